//! TUI rendering logic for the App.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::app::App;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input().render(area, buf);
    }
}
