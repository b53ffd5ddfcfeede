use std::num::NonZeroUsize;
use std::ops::Range;

/// Default number of dropdown rows before the list is truncated.
pub const DEFAULT_WINDOW_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Selection and scroll state over a match set of known length.
///
/// Whenever the match set is non-empty the selection lies inside
/// `[scroll_offset, scroll_offset + window_size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollWindow {
    len: usize,
    selected: usize,
    scroll_offset: usize,
    window_size: NonZeroUsize,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl ScrollWindow {
    pub fn new(window_size: NonZeroUsize) -> Self {
        Self {
            len: 0,
            selected: 0,
            scroll_offset: 0,
            window_size,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn window_size(&self) -> usize {
        self.window_size.get()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Absolute selection index, `None` while there is nothing to select.
    pub fn selected(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.selected)
    }

    /// Indices of the matches currently inside the window.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll_offset + self.window_size()).min(self.len);
        self.scroll_offset.min(end)..end
    }

    /// Whether more matches follow the visible window.
    pub fn has_overflow(&self) -> bool {
        self.len > self.scroll_offset + self.window_size()
    }

    fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.window_size())
    }

    /// A new match set invalidates navigation: restart at the top.
    pub fn on_match_set_changed(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn set_window_size(&mut self, window_size: NonZeroUsize) {
        self.window_size = window_size;
        self.update_scroll();
    }

    /// Move the selection down one row, wrapping to the first match.
    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 >= self.len {
            0
        } else {
            self.selected + 1
        };
        self.update_scroll();
        tracing::trace!(
            selected = self.selected,
            offset = self.scroll_offset,
            "advance"
        );
    }

    /// Move the selection up one row, wrapping to the last match.
    pub fn retreat(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.len - 1
        } else {
            self.selected - 1
        };
        self.update_scroll();
        tracing::trace!(
            selected = self.selected,
            offset = self.scroll_offset,
            "retreat"
        );
    }

    /// Point the selection at `index` directly, clamped to the last match.
    pub fn select(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        self.selected = index.min(self.len - 1);
        self.update_scroll();
    }

    /// Scroll the least amount needed to keep the selection visible.
    pub fn update_scroll(&mut self) {
        let size = self.window_size();
        if self.selected >= self.scroll_offset + size {
            self.scroll_offset = self.selected + 1 - size;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    #[cfg(test)]
    fn force_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }
}
