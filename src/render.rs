//! Structured dropdown rendering.
//!
//! Produces plain rows; styling is left to the view layer.

use crate::matcher::{Highlight, find_match};
use crate::window::ScrollWindow;

/// Marker shown after the last row when more matches exist below the window.
pub const OVERFLOW_MARKER: &str = "...";

/// One rendered line of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownRow {
    Item {
        text: String,
        /// First case-insensitive occurrence of the query, in chars.
        highlight: Option<Highlight>,
        selected: bool,
    },
    Overflow,
}

impl DropdownRow {
    pub fn text(&self) -> &str {
        match self {
            DropdownRow::Item { text, .. } => text,
            DropdownRow::Overflow => OVERFLOW_MARKER,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, DropdownRow::Item { selected: true, .. })
    }

    /// `(start, len)` of the highlighted range, if this row has one.
    pub fn highlight(&self) -> Option<(usize, usize)> {
        match self {
            DropdownRow::Item {
                highlight: Some(hl),
                ..
            } => Some((hl.start, hl.len)),
            _ => None,
        }
    }
}

/// Render the visible slice of `matches`, plus an overflow row when truncated.
///
/// An empty query or empty match set renders nothing. A window tracking a
/// different number of matches is clamped to `matches`.
pub fn render(matches: &[String], query: &str, window: &ScrollWindow) -> Vec<DropdownRow> {
    if query.is_empty() || matches.is_empty() {
        return Vec::new();
    }

    let visible = window.visible_range();
    let range = visible.start.min(matches.len())..visible.end.min(matches.len());
    let end = range.end;
    let selected = window.selected();
    let mut rows: Vec<DropdownRow> = matches[range.clone()]
        .iter()
        .zip(range)
        .map(|(text, idx)| DropdownRow::Item {
            text: text.clone(),
            highlight: find_match(text, query),
            selected: selected == Some(idx),
        })
        .collect();

    if window.has_overflow() && end < matches.len() {
        rows.push(DropdownRow::Overflow);
    }
    rows
}
