use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, Focus};
use crate::components::{
    DayView, EventForm, Header, Help, MonthPicker, MonthView, StatusBar, UpcomingList,
};
use crate::components::month_view::GRID_WIDTH;

/// Below this width the upcoming panel is hidden.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let today = app.today();
    let cells = app.state.cells(today);

    // header + content + status bar
    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    Header::render(frame, layout[0], app.state.displayed);

    let (left, right) = split_content(layout[1]);
    let left_rows = Layout::vertical([
        Constraint::Length(MonthView::height(&cells)),
        Constraint::Min(3),
    ])
    .split(left);

    app.grid_area = left_rows[0];
    MonthView::render(
        frame,
        left_rows[0],
        app.state.displayed,
        &cells,
        app.focus == Focus::Grid,
    );
    DayView::render(frame, left_rows[1], app.state.selected, &app.state.selected_events());

    if let Some(right) = right {
        UpcomingList::render(
            frame,
            right,
            &app.state.upcoming(app.now),
            app.upcoming_cursor,
            app.focus == Focus::Upcoming,
        );
    }

    if app.state.popup_open {
        EventForm::render(frame, area, &app.state.draft, app.form_field);
    }
    if let Some(ref picker) = app.picker {
        MonthPicker::render(frame, area, picker);
    }
    if app.show_help {
        Help::render(frame, area);
    }

    StatusBar::render(frame, layout[2], app.focus, app.status_message.as_deref());
}

fn split_content(area: Rect) -> (Rect, Option<Rect>) {
    if area.width < SIDE_BY_SIDE_MIN_WIDTH {
        return (area, None);
    }
    let columns = Layout::horizontal([Constraint::Length(GRID_WIDTH), Constraint::Min(24)]).split(area);
    (columns[0], Some(columns[1]))
}
