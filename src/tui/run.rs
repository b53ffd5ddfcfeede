//! TUI run loop for the interactive picker.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::widgets::Widget;

use super::app::{App, UpdateResult};
use super::backend::InlineTerminal;

/// Run the app to completion.
///
/// Returns `None` if the user cancelled, or the submitted value.
pub fn run(mut app: App) -> io::Result<Option<String>> {
    let mut term = InlineTerminal::new(app.terminal_height())?;

    loop {
        term.terminal().draw(|frame| {
            let area = frame.area();
            (&app).render(area, frame.buffer_mut());
            frame.set_cursor_position(app.cursor_position(area));
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.update(key) {
                UpdateResult::Continue => {}
                UpdateResult::Done => return Ok(app.extract_result()),
                UpdateResult::Cancelled => return Ok(None),
            }
        }
    }
}
