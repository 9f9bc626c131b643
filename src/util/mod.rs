//! Utility modules

pub mod px;

pub use px::{format_px, parse_int_prefix, parse_measured};
