use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::calendar::UpcomingGroup;
use crate::theme;

const DELETE_MARK: &str = "\u{2715}";

pub struct UpcomingList;

impl UpcomingList {
    /// `cursor` indexes the flattened event rows, ignoring group headers.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        groups: &[UpcomingGroup],
        cursor: usize,
        focused: bool,
    ) {
        let theme = theme::current();
        let total: usize = groups.iter().map(|g| g.events.len()).sum();

        let title = if area.width >= 28 && total > 0 {
            format!(" Upcoming Events ({}) ", total)
        } else {
            " Upcoming Events ".to_string()
        };

        let border_style = if focused { theme.accent } else { theme.border };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(border_style);

        if total == 0 {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No upcoming events.").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;
        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_item = None;
        let mut row = 0;

        for (g, group) in groups.iter().enumerate() {
            if g > 0 {
                items.push(ListItem::new(Line::from("")));
            }
            items.push(ListItem::new(Line::from(Span::styled(
                format!(" {}", group.label),
                theme.accent.add_modifier(Modifier::UNDERLINED),
            ))));

            for ev in &group.events {
                let is_selected = focused && row == cursor;
                if is_selected {
                    selected_item = Some(items.len());
                }

                let prefix = format!("  {:02} - {} - ", ev.date.day(), ev.time_display());
                let room = inner_w.saturating_sub(prefix.chars().count() + 2);
                let text_style = if is_selected {
                    theme.highlight
                } else {
                    Style::default()
                };

                let mut spans = vec![
                    Span::styled(prefix, if is_selected { theme.highlight } else { theme.dim }),
                    Span::styled(truncate(&ev.text, room), text_style),
                ];
                if is_selected {
                    spans.push(Span::styled(format!(" {}", DELETE_MARK), theme.accent));
                }

                items.push(ListItem::new(Line::from(spans)));
                row += 1;
            }
        }

        let mut state = ListState::default().with_selected(selected_item);
        frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
