//! Substring autocomplete for single-line text inputs.
//!
//! The core ([`Autocomplete`]) is terminal agnostic: it matches a query
//! against a candidate list, tracks the selected match inside a scrolling
//! window and renders the visible rows as plain data. The `tui` feature adds
//! a ratatui text input built on top of it, the `application` feature the
//! `autocomplete-input` picker.

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod matcher;
pub mod render;
pub mod window;

#[cfg(feature = "application")]
pub mod app;
#[cfg(feature = "application")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;

pub use autocomplete::{Autocomplete, DropdownState};
pub use error::AutocompleteError;
pub use matcher::{Highlight, Matcher, find_match, recompute};
pub use render::{DropdownRow, OVERFLOW_MARKER};
pub use window::{DEFAULT_WINDOW_SIZE, ScrollWindow};
