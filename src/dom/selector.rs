//! Compound selectors
//!
//! Only the subset the drawer needs for discovery: an optional tag (or `*`)
//! followed by any number of `.class` and `#id` parts, e.g. `aside.q-drawer`.
//! Combinators and attribute selectors are rejected at parse time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Element;

/// A parsed compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    source: String,
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

impl Selector {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self, String> {
        let source = input.trim();
        if source.is_empty() {
            return Err("Empty selector".to_string());
        }

        let mut tag = None;
        let mut id = None;
        let mut classes = Vec::new();

        let mut chars = source.char_indices().peekable();

        // Leading tag name or universal selector
        if let Some(&(_, first)) = chars.peek() {
            if first == '*' {
                chars.next();
            } else if first.is_ascii_alphabetic() {
                let mut name = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if !is_ident_char(ch) {
                        break;
                    }
                    name.push(ch.to_ascii_lowercase());
                    chars.next();
                }
                tag = Some(name);
            }
        }

        while let Some((pos, marker)) = chars.next() {
            if marker != '.' && marker != '#' {
                return Err(format!(
                    "Unsupported character '{}' at {} in selector '{}'",
                    marker, pos, source
                ));
            }

            let mut name = String::new();
            while let Some(&(_, ch)) = chars.peek() {
                if !is_ident_char(ch) {
                    break;
                }
                name.push(ch);
                chars.next();
            }
            if name.is_empty() {
                return Err(format!(
                    "Expected a name after '{}' in selector '{}'",
                    marker, source
                ));
            }

            if marker == '.' {
                classes.push(name);
            } else if id.replace(name).is_some() {
                return Err(format!("Selector '{}' has more than one id", source));
            }
        }

        Ok(Self {
            tag,
            id,
            classes,
            source: source.to_string(),
        })
    }

    /// Selector for a single class name
    pub fn class(name: &str) -> Self {
        Self {
            tag: None,
            id: None,
            classes: vec![name.to_string()],
            source: format!(".{}", name),
        }
    }

    /// Check whether an element matches every part of this selector
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }

    /// The selector as written
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Selector::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class() {
        let sel = Selector::parse(".q-drawer").unwrap();
        assert!(sel.matches(&Element::new("aside").with_class("q-drawer")));
        assert!(!sel.matches(&Element::new("aside").with_class("q-drawer-container")));
    }

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("div.a.b#main").unwrap();
        let el = Element::new("DIV")
            .with_class("a")
            .with_class("b")
            .with_id("main");
        assert!(sel.matches(&el));
        assert!(!sel.matches(&Element::new("div").with_class("a").with_id("main")));
        assert!(!sel.matches(&Element::new("span").with_class("a").with_class("b").with_id("main")));
    }

    #[test]
    fn test_universal() {
        let sel = Selector::parse("*.x").unwrap();
        assert!(sel.matches(&Element::new("p").with_class("x")));
    }

    #[test]
    fn test_class_names_are_case_sensitive() {
        let sel = Selector::parse(".Drawer").unwrap();
        assert!(!sel.matches(&Element::new("div").with_class("drawer")));
    }

    #[test]
    fn test_rejects_combinators() {
        assert!(Selector::parse(".a .b").is_err());
        assert!(Selector::parse(".a > .b").is_err());
        assert!(Selector::parse("[data-x]").is_err());
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse(".").is_err());
        assert!(Selector::parse("#a#b").is_err());
    }

    #[test]
    fn test_display_round_trips_source() {
        let sel = Selector::parse("  .q-page-container ").unwrap();
        assert_eq!(sel.to_string(), ".q-page-container");
        assert_eq!(Selector::class("x").as_str(), ".x");
    }
}
