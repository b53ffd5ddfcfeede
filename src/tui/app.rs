//! TUI application model
//!
//! Wraps a single autocomplete input. `update()` and `render()` are pure with
//! respect to the terminal, so the whole interaction is testable with
//! ratatui's `TestBackend`.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::components::input::{Input, InputAction, InputResult, InputState};

/// Result of calling update()
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// Keep processing events
    Continue,
    /// The user submitted a value
    Done,
    /// The user cancelled
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct App {
    context: String,
    prompt: String,
    state: InputState,
    result: Option<String>,
}

impl App {
    pub fn new(context: impl Into<String>, prompt: impl Into<String>, state: InputState) -> Self {
        Self {
            context: context.into(),
            prompt: prompt.into(),
            state,
            result: None,
        }
    }

    pub fn update(&mut self, key: KeyEvent) -> UpdateResult {
        let action = InputAction::from_key(key);
        match self.state.handle(action) {
            Some(InputResult::Submit(text)) => {
                tracing::debug!("Submitted: {text}");
                self.result = Some(text);
                UpdateResult::Done
            }
            Some(InputResult::Cancel) => UpdateResult::Cancelled,
            None => UpdateResult::Continue,
        }
    }

    /// Take the submitted value, if any
    pub fn extract_result(&mut self) -> Option<String> {
        self.result.take()
    }

    pub(super) fn input(&self) -> Input<'_> {
        Input::new(&self.state, &self.prompt, &self.context)
    }

    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        self.input().cursor_position(area)
    }

    /// Height that fits the input line, a full dropdown with its overflow
    /// marker and the footer, so the viewport never has to grow.
    pub fn terminal_height(&self) -> u16 {
        let rows = u16::try_from(self.state.completion().window_size()).unwrap_or(u16::MAX);
        rows.saturating_add(3)
    }
}
