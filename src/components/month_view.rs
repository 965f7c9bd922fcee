use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::{CalendarCell, YearMonth};
use crate::theme;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: u16 = 5;
const EVENT_MARKER: &str = "\u{2022}";

/// Width of the grid including its border.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 7 + 2;

pub struct MonthView;

impl MonthView {
    /// Height needed for `cells`: border, weekday header and one row per week.
    pub fn height(cells: &[CalendarCell]) -> u16 {
        (cells.len() / 7) as u16 + 3
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        displayed: YearMonth,
        cells: &[CalendarCell],
        focused: bool,
    ) {
        let theme = theme::current();
        let border_style = if focused { theme.accent } else { theme.border };

        let block = Block::default()
            .title(format!(" {} ", displayed.label()))
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = Line::from(
            DAY_NAMES
                .iter()
                .map(|d| Span::styled(format!("{:^5}", d), theme.header))
                .collect::<Vec<_>>(),
        );

        let weeks: Vec<Line> = cells
            .chunks(7)
            .map(|week| Line::from(week.iter().flat_map(cell_spans).collect::<Vec<_>>()))
            .collect();

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(weeks.iter().map(|_| Constraint::Length(1)));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);
        for (i, week) in weeks.into_iter().enumerate() {
            frame.render_widget(Paragraph::new(week), rows[i + 1]);
        }
    }

    /// Index of the cell under a terminal position, for a grid drawn in `area`.
    pub fn cell_at(area: Rect, cell_count: usize, column: u16, row: u16) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let first_row = inner.y + 1;
        if column < inner.x || row < first_row {
            return None;
        }
        let col = ((column - inner.x) / CELL_WIDTH) as usize;
        let week = (row - first_row) as usize;
        if col >= 7 || column >= inner.x + CELL_WIDTH * 7 {
            return None;
        }
        let index = week * 7 + col;
        (index < cell_count && row < inner.bottom()).then_some(index)
    }
}

fn cell_spans(cell: &CalendarCell) -> Vec<Span<'static>> {
    let theme = theme::current();
    let style = if cell.is_today && cell.is_selected {
        theme.today_selected()
    } else if cell.is_selected {
        theme.selected
    } else if cell.is_today {
        theme.today
    } else if !cell.in_current_month {
        theme.dim
    } else {
        Style::default()
    };

    let marker_style = if cell.is_selected || cell.is_today {
        style
    } else if cell.in_current_month {
        theme.marker.add_modifier(Modifier::BOLD)
    } else {
        theme.dim
    };
    let marker = if cell.has_event { EVENT_MARKER } else { " " };

    vec![
        Span::raw(" "),
        Span::styled(format!("{:>2}", cell.date.day()), style),
        Span::styled(marker, marker_style),
        Span::raw(" "),
    ]
}
