use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Focus;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, focus: Focus, message: Option<&str>) {
        let theme = theme::current();
        let w = area.width as usize;

        let mode_str = match focus {
            Focus::Grid => "[Month]",
            Focus::Upcoming => "[Upcoming]",
        };

        // Show status message if present, otherwise show context-aware hints
        let right_text = if let Some(msg) = message {
            format!(" {} ", msg)
        } else {
            match focus {
                Focus::Grid if w >= 80 => {
                    " hjkl:Move [/]:Month m:Pick t:Today n:New Tab:Upcoming ?:Help q:Quit ".to_string()
                }
                Focus::Grid if w >= 50 => " hjkl:Move [/]:Month n:New q:Quit ".to_string(),
                Focus::Upcoming if w >= 60 => {
                    " jk:Move d:Delete Tab:Month n:New ?:Help q:Quit ".to_string()
                }
                Focus::Upcoming if w >= 40 => " jk:Move d:Delete q:Quit ".to_string(),
                _ => " ?:Help q:Quit ".to_string(),
            }
        };

        let left = format!(" {} ", mode_str);
        let padding_len = w.saturating_sub(left.chars().count() + right_text.chars().count());

        let line = Line::from(vec![
            Span::styled(left, theme.status),
            Span::styled(" ".repeat(padding_len), theme.status),
            Span::styled(right_text, theme.status),
        ]);

        frame.render_widget(Paragraph::new(line).style(theme.status), area);
    }
}
