use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let theme = theme::current();

        let popup_w = area.width.clamp(30, 52);
        let popup_h = area.height.clamp(12, 24);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(theme.accent)
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = theme.accent;
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let entry = |keys: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", keys), key_style),
                Span::raw(desc),
            ])
        };

        let lines = vec![
            Line::from(Span::styled("Month", section_style)),
            entry("h/l", "Previous/next day"),
            entry("j/k", "Previous/next week"),
            entry("click", "Select a day"),
            entry("[/]", "Previous/next month"),
            entry("m", "Pick month and year"),
            entry("t", "Jump to today"),
            Line::from(""),
            Line::from(Span::styled("Events", section_style)),
            entry("n", "Add event"),
            entry("Tab", "Focus upcoming events"),
            entry("j/k", "Move in upcoming events"),
            entry("d", "Delete upcoming event"),
            Line::from(""),
            Line::from(vec![
                Span::styled("  q", key_style),
                Span::styled(" / ", theme.dim),
                Span::styled("Esc     ", key_style),
                Span::raw("Quit / close popup"),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
