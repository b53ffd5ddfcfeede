use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::helpers::layouts;
use crate::tui::style::{APP_NAME, FOOTER_STYLE, LABEL_STYLE};

/// Footer bar: context on the left, the app name on the right
pub struct Footer<'a> {
    left_spans: Vec<Span<'a>>,
}

impl<'a> Footer<'a> {
    pub fn new(left_spans: Vec<Span<'a>>) -> Self {
        Self { left_spans }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let right = Span::styled(format!(" {} ", APP_NAME), LABEL_STYLE);

        let cols = layouts::footer_columns(area);
        Paragraph::new(Line::from(self.left_spans))
            .style(FOOTER_STYLE)
            .render(cols[0], buf);
        Paragraph::new(Line::from(right).right_aligned())
            .style(FOOTER_STYLE)
            .render(cols[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::helpers::context_span;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_footer_context_and_app_name() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| {
                Footer::new(vec![context_span("Fruit")]).render(frame.area(), frame.buffer_mut());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let line: String = (0..40).map(|x| buffer[(x, 0)].symbol()).collect();
        assert_eq!(line.trim_end(), " Fruit               autocomplete-input");
    }
}
