use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::calendar::EventDraft;
use crate::state::DraftField;
use crate::theme;

pub struct EventForm;

impl EventForm {
    pub fn render(frame: &mut Frame, area: Rect, draft: &EventDraft, active: DraftField) {
        let theme = theme::current();

        // Center the form popup
        let form_w = area.width.clamp(30, 46);
        let form_h = area.height.clamp(8, 9);
        let x = area.x + (area.width.saturating_sub(form_w)) / 2;
        let y = area.y + (area.height.saturating_sub(form_h)) / 2;
        let form_area = Rect::new(x, y, form_w, form_h).intersection(area);

        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .title(" Add Event ")
            .title_style(theme.accent)
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // date
            Constraint::Length(1), // time
            Constraint::Length(1), // text
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_field(frame, rows[0], "Date:", &draft.date, "YYYY-MM-DD", active == DraftField::Date);
        render_field(frame, rows[1], "Time:", &draft.time, "HH:MM", active == DraftField::Time);
        render_field(frame, rows[2], "Event:", &draft.text, "Event Details", active == DraftField::Text);

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Next ", theme.dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Add ", theme.dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", theme.dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[4]);
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    active: bool,
) {
    let theme = theme::current();
    let cursor = if active { "_" } else { "" };

    let value_span = if value.is_empty() && !active {
        Span::styled(placeholder.to_string(), theme.dim.add_modifier(Modifier::ITALIC))
    } else {
        let style = if active {
            theme.accent.remove_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Span::styled(format!("{}{}", value, cursor), style)
    };

    let line = Line::from(vec![
        Span::styled(format!("{:<7}", label), theme.dim),
        value_span,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
