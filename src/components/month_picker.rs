use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::calendar::grid::month_name;
use crate::calendar::YearMonth;
use crate::config::PickerConfig;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerField {
    Month,
    Year,
}

/// Month and year choices of the picker popup. `month0` is 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub month0: u32,
    pub year: i32,
    pub field: PickerField,
    years: PickerConfig,
}

impl PickerState {
    pub fn new(displayed: YearMonth, years: PickerConfig) -> Self {
        Self {
            month0: displayed.month - 1,
            year: years.clamp(displayed.year),
            field: PickerField::Month,
            years,
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            PickerField::Month => PickerField::Year,
            PickerField::Year => PickerField::Month,
        };
    }

    /// Step the active field; months wrap, years stop at the range ends.
    pub fn step(&mut self, delta: i32) {
        match self.field {
            PickerField::Month => {
                self.month0 = (self.month0 as i32 + delta).rem_euclid(12) as u32;
            }
            PickerField::Year => {
                self.year = self.years.clamp(self.year + delta);
            }
        }
    }
}

pub struct MonthPicker;

impl MonthPicker {
    pub fn render(frame: &mut Frame, area: Rect, state: &PickerState) {
        let theme = theme::current();

        let popup_w = area.width.clamp(26, 32);
        let popup_h = area.height.clamp(6, 7);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Go to Month ")
            .title_style(theme.accent)
            .borders(Borders::ALL)
            .border_style(theme.accent);
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let month = month_name(state.month0 + 1);
        let year = state.year.to_string();
        render_choice(frame, rows[0], "Month:", month, state.field == PickerField::Month);
        render_choice(frame, rows[1], "Year:", &year, state.field == PickerField::Year);

        let help = Line::from(vec![
            Span::styled("\u{2191}\u{2193}", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Change ", theme.dim),
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Field ", theme.dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Go", theme.dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[3]);
    }
}

fn render_choice(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let theme = theme::current();
    let value = if active {
        Span::styled(format!("\u{2039} {} \u{203a}", value), theme.selected)
    } else {
        Span::styled(format!("  {}  ", value), Style::default())
    };
    let line = Line::from(vec![Span::styled(format!("{:<7}", label), theme.dim), value]);
    frame.render_widget(Paragraph::new(line), area);
}
