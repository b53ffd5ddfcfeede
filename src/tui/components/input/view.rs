use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::model::InputState;
use crate::matcher::byte_offset;
use crate::render::DropdownRow;
use crate::tui::components::footer::Footer;
use crate::tui::helpers::{context_span, dropdown_line, layouts, truncate_to_width};
use crate::tui::style::{DIMMED_STYLE, PLACEHOLDER_STYLE};

/// Dropdown list rendered below the input line
struct Dropdown<'a> {
    rows: &'a [DropdownRow],
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, row) in self.rows.iter().take(area.height as usize).enumerate() {
            let line_area = Rect {
                y: area.y + i as u16,
                height: 1,
                ..area
            };
            Paragraph::new(dropdown_line(row)).render(line_area, buf);
        }
    }
}

/// Input widget for text entry with autocomplete
pub struct Input<'a> {
    state: &'a InputState,
    prompt: &'a str,
    context: &'a str,
    rows: Vec<DropdownRow>,
}

impl<'a> Input<'a> {
    pub fn new(state: &'a InputState, prompt: &'a str, context: &'a str) -> Self {
        Self {
            state,
            prompt,
            context,
            rows: state.dropdown_rows(),
        }
    }

    /// Calculate cursor position for the given area
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let text = self.state.text();
        let before_cursor = &text[..byte_offset(text, self.state.cursor())];
        let cursor_x = area.x + (self.prompt.width() + before_cursor.width()) as u16;
        (cursor_x, area.y)
    }

    /// Input line, dropdown rows and footer
    pub fn required_height(&self) -> u16 {
        self.rows.len() as u16 + 2
    }

    fn input_line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(self.prompt)];
        if self.state.is_empty() {
            let placeholder = truncate_to_width(
                self.state.placeholder(),
                self.state.width().saturating_sub(self.prompt.width()),
            );
            spans.push(Span::styled(placeholder, PLACEHOLDER_STYLE));
        } else {
            spans.push(Span::raw(self.state.text()));
            if let Some(suffix) = self.state.inline_completion() {
                spans.push(Span::styled(suffix, DIMMED_STYLE));
            }
        }
        Line::from(spans)
    }
}

impl Widget for Input<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (input_area, dropdown_area, footer_area) =
            layouts::input_with_dropdown(area, self.rows.len() as u16);

        Paragraph::new(self.input_line()).render(input_area, buf);

        if !self.rows.is_empty() {
            Dropdown { rows: &self.rows }.render(dropdown_area, buf);
        }

        Footer::new(vec![context_span(self.context)]).render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::input::InputAction;
    use ratatui::{Terminal, backend::TestBackend};

    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn buffer_to_plain_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn render(state: &InputState, width: u16) -> String {
        let input = Input::new(state, "> ", "Fruit");
        let mut terminal = create_test_terminal(width, input.required_height());
        terminal
            .draw(|frame| {
                Input::new(state, "> ", "Fruit").render(frame.area(), frame.buffer_mut());
            })
            .unwrap();
        buffer_to_plain_text(&terminal)
    }

    fn fruits() -> Vec<String> {
        ["Apple", "Apricot", "Banana"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_render_dropdown() {
        let state = InputState::with_completions(Some("ap"), fruits());
        insta::assert_snapshot!(render(&state, 40), @r"
> ap
> Apple
  Apricot
 Fruit               autocomplete-input
");
    }

    #[test]
    fn test_render_overflow() {
        let items: Vec<String> = (1..=5).map(|i| format!("Item{i}")).collect();
        let mut state = InputState::with_completions(Some("item"), items)
            .with_window_size(2)
            .unwrap();
        state.handle(InputAction::CompletionDown);
        state.handle(InputAction::CompletionDown);
        insta::assert_snapshot!(render(&state, 40), @r"
> item
  Item2
> Item3
  ...
 Fruit               autocomplete-input
");
    }

    #[test]
    fn test_render_placeholder_truncated() {
        let state = InputState::new(None)
            .with_placeholder("A very long placeholder, or maybe not so much")
            .with_width(10);
        let output = render(&state, 40);
        assert_eq!(output.lines().next(), Some("> A very …"));
    }

    #[test]
    fn test_render_inline_completion() {
        let state = InputState::with_completions(Some("Ap"), fruits()).with_dropdown(false);
        let output = render(&state, 40);
        assert_eq!(output.lines().next(), Some("> Apple"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_render_unfocused_has_no_dropdown() {
        let mut state = InputState::with_completions(Some("ap"), fruits());
        state.blur();
        let input = Input::new(&state, "> ", "Fruit");
        assert_eq!(input.required_height(), 2);
        assert!(!render(&state, 40).contains("Apple"));
    }

    #[test]
    fn test_cursor_position_counts_display_width() {
        let mut state = InputState::new(Some("输入"));
        state.handle(InputAction::Left);
        let input = Input::new(&state, "> ", "Fruit");
        assert_eq!(input.cursor_position(Rect::new(3, 1, 40, 2)), (7, 1));
    }
}
