//! The autocomplete engine consumed by a text input.
//!
//! [`Autocomplete`] ties a [`Matcher`] to a [`ScrollWindow`]: every query or
//! candidate change recomputes the match set and restarts navigation at the
//! top, navigation only ever touches the window.

use std::num::NonZeroUsize;

use crate::error::AutocompleteError;
use crate::matcher::Matcher;
use crate::render::{self, DropdownRow};
use crate::window::{DEFAULT_WINDOW_SIZE, ScrollWindow};

/// Whether the dropdown currently has anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
}

/// Validate a caller supplied window size.
pub fn window_size(size: usize) -> Result<NonZeroUsize, AutocompleteError> {
    NonZeroUsize::new(size).ok_or(AutocompleteError::InvalidWindowSize(size))
}

#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    query: String,
    matcher: Matcher,
    window: ScrollWindow,
}

impl Autocomplete {
    /// Create an engine over `candidates` with the default window size.
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            query: String::new(),
            matcher: Matcher::new(candidates),
            window: ScrollWindow::new(DEFAULT_WINDOW_SIZE),
        }
    }

    pub fn with_window_size(mut self, size: usize) -> Result<Self, AutocompleteError> {
        self.window.set_window_size(window_size(size)?);
        Ok(self)
    }

    /// Replace the candidates and window size, then recompute against the
    /// current query.
    ///
    /// A zero window size is rejected and leaves the engine untouched.
    pub fn configure(
        &mut self,
        candidates: Vec<String>,
        size: usize,
    ) -> Result<(), AutocompleteError> {
        let size = window_size(size)?;
        self.matcher.set_candidates(candidates);
        self.window.set_window_size(size);
        self.recompute();
        Ok(())
    }

    /// Set the query and recompute the match set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    fn recompute(&mut self) {
        let len = self.matcher.update(&self.query).len();
        self.on_match_set_changed(len);
    }

    /// Restart navigation for a freshly computed match set.
    pub fn on_match_set_changed(&mut self, len: usize) {
        self.window.on_match_set_changed(len);
    }

    pub fn navigate_next(&mut self) {
        self.window.advance();
    }

    pub fn navigate_previous(&mut self) {
        self.window.retreat();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[String] {
        self.matcher.candidates()
    }

    pub fn matches(&self) -> &[String] {
        self.matcher.matches()
    }

    pub fn window_size(&self) -> usize {
        self.window.window_size()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.window.selected()
    }

    pub fn scroll_offset(&self) -> usize {
        self.window.scroll_offset()
    }

    pub fn current_selection(&self) -> Option<&str> {
        self.window
            .selected()
            .and_then(|idx| self.matches().get(idx))
            .map(String::as_str)
    }

    pub fn dropdown_state(&self) -> DropdownState {
        if self.query.is_empty() || self.matches().is_empty() {
            DropdownState::Closed
        } else {
            DropdownState::Open
        }
    }

    /// Rows for the visible window. Empty while the dropdown is closed.
    ///
    /// Focus gating is up to the caller.
    pub fn render_dropdown(&self) -> Vec<DropdownRow> {
        render::render(self.matches(), &self.query, &self.window)
    }

    /// The rest of the current selection after the typed query.
    ///
    /// Only offered when the selection literally starts with the query.
    pub fn render_inline_completion(&self) -> Option<&str> {
        if self.query.is_empty() {
            return None;
        }
        self.current_selection()?
            .strip_prefix(self.query.as_str())
            .filter(|suffix| !suffix.is_empty())
    }
}
