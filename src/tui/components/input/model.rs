use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::autocomplete::Autocomplete;
use crate::config::Config;
use crate::error::AutocompleteError;
use crate::matcher::byte_offset;
use crate::render::DropdownRow;

/// Actions for text input UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Submit,
    Cancel,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    WordBack,
    WordForward,
    DeleteWordBack,
    DeleteToEnd,
    DeleteToStart,
    Insert(char),
    /// Move completion selection up
    CompletionUp,
    /// Move completion selection down
    CompletionDown,
    /// Accept current completion (Tab)
    Accept,
    None,
}

impl InputAction {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Esc => InputAction::Cancel,
            KeyCode::Backspace if alt || ctrl => InputAction::DeleteWordBack,
            KeyCode::Backspace => InputAction::Backspace,
            KeyCode::Delete => InputAction::Delete,
            KeyCode::Left if alt || ctrl => InputAction::WordBack,
            KeyCode::Right if alt || ctrl => InputAction::WordForward,
            KeyCode::Left => InputAction::Left,
            KeyCode::Right => InputAction::Right,
            KeyCode::Up => InputAction::CompletionUp,
            KeyCode::Down => InputAction::CompletionDown,
            KeyCode::Tab => InputAction::Accept,
            KeyCode::Home => InputAction::Home,
            KeyCode::End => InputAction::End,
            KeyCode::Char('a') if ctrl => InputAction::Home,
            KeyCode::Char('e') if ctrl => InputAction::End,
            KeyCode::Char('b') if ctrl => InputAction::Left,
            KeyCode::Char('f') if ctrl => InputAction::Right,
            KeyCode::Char('p') if ctrl => InputAction::CompletionUp,
            KeyCode::Char('n') if ctrl => InputAction::CompletionDown,
            KeyCode::Char('w') if ctrl => InputAction::DeleteWordBack,
            KeyCode::Char('k') if ctrl => InputAction::DeleteToEnd,
            KeyCode::Char('u') if ctrl => InputAction::DeleteToStart,
            KeyCode::Char('d') if ctrl => InputAction::Delete,
            KeyCode::Char('b') if alt => InputAction::WordBack,
            KeyCode::Char('f') if alt => InputAction::WordForward,
            KeyCode::Char(_) if ctrl || alt => InputAction::None,
            KeyCode::Char(c) => InputAction::Insert(c),
            _ => InputAction::None,
        }
    }
}

/// Result from input state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    Submit(String),
    Cancel,
}

/// Text input state machine with autocomplete.
///
/// The cursor counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct InputState {
    input: String,
    cursor: usize,
    placeholder: String,
    /// Maximum number of characters, 0 for no limit
    char_limit: usize,
    /// Display width for placeholder truncation, 0 for no limit
    width: usize,
    focused: bool,
    show_suggestions: bool,
    show_dropdown: bool,
    /// Set by Esc, cleared by the next edit
    dropdown_dismissed: bool,
    completion: Autocomplete,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl InputState {
    /// Focused input without suggestions
    pub fn new(default: Option<&str>) -> Self {
        let mut state = Self {
            input: String::new(),
            cursor: 0,
            placeholder: String::new(),
            char_limit: 0,
            width: 0,
            focused: true,
            show_suggestions: false,
            show_dropdown: false,
            dropdown_dismissed: false,
            completion: Autocomplete::default(),
        };
        state.set_value(default.unwrap_or(""));
        state
    }

    /// Create input state with suggestions shown in a dropdown
    pub fn with_completions(default: Option<&str>, items: Vec<String>) -> Self {
        let mut state = Self::new(None);
        state.show_suggestions = true;
        state.show_dropdown = true;
        state.completion = Autocomplete::new(items);
        state.set_value(default.unwrap_or(""));
        state
    }

    /// Build the input from configuration and a candidate list.
    pub fn from_config(config: &Config, items: Vec<String>) -> Result<Self, AutocompleteError> {
        let mut state = Self::new(None);
        state.completion.configure(items, config.suggestions.max_items)?;
        state.show_suggestions = config.suggestions.show;
        state.show_dropdown = config.suggestions.dropdown;
        state.placeholder = config.input.placeholder.clone();
        state.char_limit = config.input.char_limit;
        state.width = config.input.width;
        Ok(state)
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        let value = self.input.clone();
        self.set_value(&value);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_dropdown(mut self, show_dropdown: bool) -> Self {
        self.show_dropdown = show_dropdown;
        self
    }

    pub fn with_suggestions(mut self, show_suggestions: bool) -> Self {
        self.show_suggestions = show_suggestions;
        self.update_completions();
        self
    }

    pub fn with_window_size(mut self, size: usize) -> Result<Self, AutocompleteError> {
        self.completion = self.completion.with_window_size(size)?;
        Ok(self)
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn show_dropdown(&self) -> bool {
        self.show_dropdown
    }

    pub fn completion(&self) -> &Autocomplete {
        &self.completion
    }

    /// Replace the value, truncated to the character limit, cursor at end.
    pub fn set_value(&mut self, value: &str) {
        self.input = match self.char_limit {
            0 => value.to_string(),
            limit => value.chars().take(limit).collect(),
        };
        self.cursor = self.char_count();
        self.update_completions();
    }

    pub fn clear(&mut self) {
        self.set_value("");
    }

    /// Replace the suggestion list, recomputing against the current value.
    pub fn set_suggestions(&mut self, items: Vec<String>) -> Result<(), AutocompleteError> {
        let size = self.completion.window_size();
        self.completion.configure(items, size)?;
        self.dropdown_dismissed = false;
        Ok(())
    }

    // Completion accessors for the view

    /// Whether the dropdown should be drawn right now
    pub fn has_visible_completions(&self) -> bool {
        self.focused
            && self.show_suggestions
            && self.show_dropdown
            && !self.dropdown_dismissed
            && !self.completion.matches().is_empty()
    }

    /// Dropdown rows for the view, empty when the dropdown is hidden
    pub fn dropdown_rows(&self) -> Vec<DropdownRow> {
        if self.has_visible_completions() {
            self.completion.render_dropdown()
        } else {
            Vec::new()
        }
    }

    /// Ghost text shown after the value when the dropdown is disabled
    pub fn inline_completion(&self) -> Option<&str> {
        if !self.focused || !self.show_suggestions || self.show_dropdown {
            return None;
        }
        self.completion.render_inline_completion()
    }

    pub fn current_suggestion(&self) -> Option<&str> {
        if self.show_suggestions {
            self.completion.current_selection()
        } else {
            None
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.completion.selected_index()
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_cursor(&self) -> usize {
        byte_offset(&self.input, self.cursor)
    }

    /// Update completions filter based on current input
    fn update_completions(&mut self) {
        self.dropdown_dismissed = false;
        if self.show_suggestions {
            self.completion.set_query(self.input.as_str());
        } else {
            self.completion.set_query("");
        }
    }

    /// Accept the currently selected completion
    fn accept_completion(&mut self) -> bool {
        if let Some(text) = self.current_suggestion().map(str::to_string) {
            self.set_value(&text);
            self.dropdown_dismissed = true;
            return true;
        }
        false
    }

    fn insert(&mut self, c: char) {
        if self.char_limit > 0 && self.char_count() >= self.char_limit {
            return;
        }
        let at = self.byte_cursor();
        self.input.insert(at, c);
        self.cursor += 1;
        self.update_completions();
    }

    /// Remove the characters in `[from, to)` and leave the cursor at `from`
    fn remove_range(&mut self, from: usize, to: usize) {
        if from >= to {
            return;
        }
        let start = byte_offset(&self.input, from);
        let end = byte_offset(&self.input, to);
        self.input.replace_range(start..end, "");
        self.cursor = from;
        self.update_completions();
    }

    /// Handle an input action, returns Some if the interaction is complete
    pub fn handle(&mut self, action: InputAction) -> Option<InputResult> {
        match action {
            InputAction::Submit => {
                // Enter always submits the user's typed input.
                // Use Tab to accept a completion instead.
                if !self.input.is_empty() {
                    return Some(InputResult::Submit(self.input.clone()));
                }
            }
            InputAction::Cancel => {
                // If completions are visible, hide them first
                if self.has_visible_completions() {
                    self.dropdown_dismissed = true;
                    return None;
                }
                return Some(InputResult::Cancel);
            }
            InputAction::Backspace => {
                if self.cursor > 0 {
                    self.remove_range(self.cursor - 1, self.cursor);
                }
            }
            InputAction::Delete => {
                self.remove_range(self.cursor, (self.cursor + 1).min(self.char_count()));
            }
            InputAction::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            InputAction::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
            }
            InputAction::Home => {
                self.cursor = 0;
            }
            InputAction::End => {
                self.cursor = self.char_count();
            }
            InputAction::WordBack => {
                self.cursor = self.find_prev_boundary();
            }
            InputAction::WordForward => {
                self.cursor = self.find_next_boundary();
            }
            InputAction::DeleteWordBack => {
                self.remove_range(self.find_prev_boundary(), self.cursor);
            }
            InputAction::DeleteToEnd => {
                self.remove_range(self.cursor, self.char_count());
            }
            InputAction::DeleteToStart => {
                self.remove_range(0, self.cursor);
            }
            InputAction::Insert(c) => self.insert(c),
            InputAction::CompletionUp => {
                self.completion.navigate_previous();
            }
            InputAction::CompletionDown => {
                self.completion.navigate_next();
            }
            InputAction::Accept => {
                self.accept_completion();
            }
            InputAction::None => {}
        }
        None
    }

    /// Start of the word before the cursor, skipping whitespace first
    fn find_prev_boundary(&self) -> usize {
        let chars: Vec<char> = self.input.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    /// End of the word after the cursor, skipping whitespace first
    fn find_next_boundary(&self) -> usize {
        let chars: Vec<char> = self.input.chars().collect();
        let mut pos = self.cursor;
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }
}
