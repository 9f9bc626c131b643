//! Pixel value parsing and formatting
//!
//! Widths travel through the page as strings: inline styles (`"330px"`),
//! computed widths (`"300.5px"`) and the stored-width attribute (`"330"`).
//! All of them are read with integer-prefix semantics.

/// Parse the leading integer of a string.
///
/// Accepts optional leading whitespace and an optional sign, then reads
/// decimal digits until the first non-digit. Anything after that (a `px`
/// unit, a fractional part) is ignored. Returns `None` when no digit is
/// found or the value does not fit in an `i32`.
pub fn parse_int_prefix(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Parse a measured width, treating zero as "no usable measurement"
pub fn parse_measured(s: &str) -> Option<i32> {
    parse_int_prefix(s).filter(|&px| px != 0)
}

/// Format a width as an inline style value
pub fn format_px(px: i32) -> String {
    format!("{}px", px)
}
