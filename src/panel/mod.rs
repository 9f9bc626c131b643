//! Panel capability - the drawer's only window onto its host page
//!
//! The resize controller and the width synchronizer never query the page
//! themselves. They receive a `PanelHandle` for the discovered panel (or
//! nothing, when the page renders without a drawer) and work through it.
//!
//! ## Implementations
//!
//! - `DomPanel`: the panel of an in-memory `Document`, found by `Selectors`
//! - test fakes in `tests/common` that record every write

mod dom;

pub use dom::{find_handle, DomPanel};

/// Read/write access to the resizable panel and its content region
pub trait PanelHandle {
    /// Measured rendered width, `None` when unmeasurable or zero
    fn width(&self) -> Option<i32>;

    /// Set the rendered (inline) width
    fn set_width(&mut self, px: i32);

    /// Last explicit width recorded on the panel, if it parses
    fn stored_width(&self) -> Option<i32>;

    /// Record the last explicit width on the panel
    fn set_stored_width(&mut self, px: i32);

    /// Whether the panel lacks its closed-state marker
    fn is_open(&self) -> bool;

    /// Computed width of the handle's container, the baseline of a drag
    fn container_width(&self) -> Option<i32>;

    /// Attach the drag handle, returning false if it could not be attached
    /// or was already present
    fn install_handle(&mut self) -> bool;

    /// Set the content region's leading offset, returning false when the
    /// page has no content region
    fn set_content_offset(&mut self, px: i32) -> bool;

    /// Set the rendered width and record it as the last explicit width
    fn apply_width(&mut self, px: i32) {
        self.set_width(px);
        self.set_stored_width(px);
    }
}
