use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::calendar::YearMonth;
use crate::theme;

/// Top bar with the app name, the displayed month and the toolbar keys.
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, displayed: YearMonth) {
        let theme = theme::current();
        let key = Style::default().add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(" Calendar ", theme.accent),
            Span::styled(format!(" {} ", displayed.label()), theme.header),
        ];

        if area.width >= 60 {
            spans.extend([
                Span::styled("  [", key),
                Span::styled(" \u{2039}  ", theme.dim),
                Span::styled("t", key),
                Span::styled(" Today  ", theme.dim),
                Span::styled("n", key),
                Span::styled(" + Add Event  ", theme.dim),
                Span::styled("m", key),
                Span::styled(" Month/Year  ", theme.dim),
                Span::styled("\u{203a} ", theme.dim),
                Span::styled("]", key),
            ]);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
