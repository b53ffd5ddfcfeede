use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::style::{
    COMPLETION_MATCH_STYLE, COMPLETION_SELECTED_MATCH_STYLE, DIMMED_STYLE, HIGHLIGHT_STYLE,
    LABEL_STYLE, SELECTED_SYMBOL, UNSELECTED_SYMBOL,
};
use crate::matcher::Highlight;
use crate::render::DropdownRow;

/// Ellipsis appended to truncated text
pub const ELLIPSIS: char = '…';

/// Truncate `text` to `width` display columns, ending in an ellipsis when cut.
///
/// A width of 0 means unlimited.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if width == 0 || text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Style a dropdown row: selection marker, then the text with the match emphasized
pub fn dropdown_line(row: &DropdownRow) -> Line<'_> {
    match row {
        DropdownRow::Overflow => {
            Line::styled(format!("{UNSELECTED_SYMBOL}{}", row.text()), DIMMED_STYLE)
        }
        DropdownRow::Item {
            text,
            highlight,
            selected,
        } => {
            let (marker, base, emphasis) = if *selected {
                (SELECTED_SYMBOL, HIGHLIGHT_STYLE, COMPLETION_SELECTED_MATCH_STYLE)
            } else {
                (UNSELECTED_SYMBOL, Style::new(), COMPLETION_MATCH_STYLE)
            };
            let mut spans = vec![Span::styled(marker, base)];
            match highlight {
                Some(hl) => spans.extend(highlighted_spans(text, hl, base, emphasis)),
                None => spans.push(Span::styled(text.as_str(), base)),
            }
            Line::from(spans)
        }
    }
}

fn highlighted_spans<'a>(
    text: &'a str,
    hl: &Highlight,
    base: Style,
    emphasis: Style,
) -> Vec<Span<'a>> {
    let (before, matched, after) = hl.split(text);
    [(before, base), (matched, emphasis), (after, base)]
        .into_iter()
        .filter(|(part, _)| !part.is_empty())
        .map(|(part, style)| Span::styled(part, style))
        .collect()
}

/// Create a styled context label span for footer
pub fn context_span(context: &str) -> Span<'_> {
    Span::styled(format!(" {} ", context), LABEL_STYLE)
}

/// Standard layout helpers for consistent widget structure
pub mod layouts {
    use ratatui::layout::{Constraint, Layout, Rect};
    use std::rc::Rc;

    /// Split area into the input line, up to `rows` dropdown rows and a
    /// footer bar pinned to the bottom
    pub fn input_with_dropdown(area: Rect, rows: u16) -> (Rect, Rect, Rect) {
        let input = Rect {
            height: area.height.min(1),
            ..area
        };
        let dropdown = Rect {
            y: area.y.saturating_add(1),
            height: rows.min(area.height.saturating_sub(2)),
            ..area
        };
        let footer = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        (input, dropdown, footer)
    }

    /// Split footer into left and right columns
    pub fn footer_columns(area: Rect) -> Rc<[Rect]> {
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area)
    }
}
