use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::calendar::Event;
use crate::theme;

/// Detail panel for the selected day.
pub struct DayView;

impl DayView {
    pub fn render(frame: &mut Frame, area: Rect, date: Option<NaiveDate>, events: &[&Event]) {
        let theme = theme::current();

        let Some(date) = date else {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let hint = Paragraph::new("Select a day to see its events.")
                .style(theme.dim)
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, inner);
            return;
        };

        let w = area.width as usize;
        let title = if w >= 30 {
            format!(" Events on {} ", date.format("%d %B %Y"))
        } else {
            format!(" {} ", date.format("%d %b %Y"))
        };

        let count_str = match events.len() {
            0 => String::new(),
            1 => " 1 event ".to_string(),
            n => format!(" {} events ", n),
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(count_str, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        if events.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No events for this day.").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let items: Vec<ListItem> = events
            .iter()
            .map(|ev| {
                ListItem::new(Line::from(vec![
                    Span::styled(ev.time_display(), theme.header),
                    Span::styled(" - ", theme.dim),
                    Span::styled(ev.text.clone(), Style::default()),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
