//! Presentational layout state for docmap sites.
//!
//! Layout components are pure: scroll position and search state are
//! observed by the page and passed in as flags, and this crate maps them
//! to the styles the header renders with.

mod header;

pub use header::{
    HEADER_HEIGHT, HeaderFlags, HeaderRule, HeaderStyle, MOBILE_BREAKPOINT, Position,
};
