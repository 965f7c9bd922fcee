use chrono::{Duration, NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::calendar::grid;
use crate::components::month_picker::PickerState;
use crate::components::MonthView;
use crate::config::PickerConfig;
use crate::state::{CalendarState, DraftField, Msg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Upcoming,
}

/// Position of one row in the upcoming-events panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingRow {
    pub group_key: String,
    pub index: usize,
}

/// Terminal-side wrapper around [`CalendarState`]: clock, focus, overlays.
pub struct App {
    pub running: bool,
    pub state: CalendarState,
    pub now: NaiveDateTime,
    pub focus: Focus,
    pub upcoming_cursor: usize,
    pub form_field: DraftField,
    pub picker: Option<PickerState>,
    pub show_help: bool,
    pub status_message: Option<String>,
    /// Where the month grid was last drawn, for mouse hit-testing.
    pub grid_area: Rect,
    years: PickerConfig,
}

impl App {
    pub fn new(now: NaiveDateTime, years: PickerConfig) -> Self {
        Self {
            running: true,
            state: CalendarState::new(now.date()),
            now,
            focus: Focus::Grid,
            upcoming_cursor: 0,
            form_field: DraftField::Date,
            picker: None,
            show_help: false,
            status_message: None,
            grid_area: Rect::default(),
            years,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// Advance the clock. Events that slip into the past leave the upcoming panel.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
        self.clamp_upcoming_cursor();
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let today = self.today();
        let state = std::mem::replace(&mut self.state, CalendarState::new(today));
        self.state = state.update(msg, self.now);
    }

    pub fn upcoming_rows(&self) -> Vec<UpcomingRow> {
        self.state
            .upcoming(self.now)
            .iter()
            .flat_map(|g| {
                (0..g.events.len()).map(move |index| UpcomingRow {
                    group_key: g.label.clone(),
                    index,
                })
            })
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.picker.is_some() {
            self.handle_picker_key(key.code);
            return;
        }

        if self.state.popup_open {
            self.handle_form_key(key.code);
            return;
        }

        self.handle_normal_key(key.code);
    }

    /// Left click: select the day under the pointer, if any.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.show_help || self.picker.is_some() || self.state.popup_open {
            return;
        }
        let dates = grid::month_grid(self.state.displayed.first_day());
        if let Some(index) = MonthView::cell_at(self.grid_area, dates.len(), column, row) {
            self.focus = Focus::Grid;
            self.dispatch(Msg::SelectDate(dates[index]));
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => {
                self.running = false;
            }
            KeyCode::Char('t') => self.dispatch(Msg::GoToToday),
            KeyCode::Char('[') | KeyCode::Char('<') => self.dispatch(Msg::PrevMonth),
            KeyCode::Char(']') | KeyCode::Char('>') => self.dispatch(Msg::NextMonth),
            KeyCode::Char('m') => {
                self.picker = Some(PickerState::new(self.state.displayed, self.years));
            }
            KeyCode::Char('n') => self.open_form(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Grid => Focus::Upcoming,
                    Focus::Upcoming => Focus::Grid,
                };
                self.clamp_upcoming_cursor();
            }
            KeyCode::Esc => self.focus = Focus::Grid,
            _ => match self.focus {
                Focus::Grid => self.handle_grid_key(code),
                Focus::Upcoming => self.handle_upcoming_key(code),
            },
        }
    }

    fn handle_grid_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(7),
            _ => {}
        }
    }

    fn handle_upcoming_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.upcoming_cursor = self.upcoming_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.upcoming_cursor += 1;
                self.clamp_upcoming_cursor();
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_upcoming(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.dispatch(Msg::CloseAddForm),
            KeyCode::Enter => {
                self.dispatch(Msg::SubmitDraft);
                if !self.state.popup_open {
                    self.status_message = Some("Event added".to_string());
                }
            }
            KeyCode::Tab | KeyCode::Down => self.form_field = self.form_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_field = self.form_field.prev(),
            KeyCode::Backspace => {
                let mut value = self.draft_value().to_string();
                value.pop();
                self.dispatch(Msg::EditDraft(self.form_field, value));
            }
            KeyCode::Char(c) => {
                let mut value = self.draft_value().to_string();
                value.push(c);
                self.dispatch(Msg::EditDraft(self.form_field, value));
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, code: KeyCode) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.picker = None,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right
            | KeyCode::Char('h') | KeyCode::Char('l') => picker.toggle_field(),
            KeyCode::Up | KeyCode::Char('k') => picker.step(-1),
            KeyCode::Down | KeyCode::Char('j') => picker.step(1),
            KeyCode::Enter => {
                let (month0, year) = (picker.month0, picker.year);
                self.picker = None;
                self.dispatch(Msg::SetYear(year));
                self.dispatch(Msg::SetMonth(month0));
            }
            _ => {}
        }
    }

    fn open_form(&mut self) {
        self.dispatch(Msg::OpenAddForm);
        self.form_field = if self.state.draft.date.is_empty() {
            DraftField::Date
        } else if self.state.draft.time.is_empty() {
            DraftField::Time
        } else {
            DraftField::Text
        };
    }

    fn draft_value(&self) -> &str {
        match self.form_field {
            DraftField::Date => &self.state.draft.date,
            DraftField::Time => &self.state.draft.time,
            DraftField::Text => &self.state.draft.text,
        }
    }

    /// Move the selection within the visible grid, as if clicking a neighbouring cell.
    fn move_selection(&mut self, days: i64) {
        let dates = grid::month_grid(self.state.displayed.first_day());
        let (Some(first), Some(last)) = (dates.first().copied(), dates.last().copied()) else {
            return;
        };

        let in_grid = |d: &NaiveDate| *d >= first && *d <= last;
        let current = match self.state.selected.filter(in_grid) {
            Some(date) => date,
            None => {
                let today = self.today();
                let start = if self.state.displayed.contains(today) {
                    today
                } else {
                    self.state.displayed.first_day()
                };
                self.dispatch(Msg::SelectDate(start));
                return;
            }
        };

        let target = current + Duration::days(days);
        if in_grid(&target) {
            self.dispatch(Msg::SelectDate(target));
        }
    }

    fn delete_upcoming(&mut self) {
        let rows = self.upcoming_rows();
        let Some(row) = rows.get(self.upcoming_cursor).cloned() else {
            return;
        };
        let before = self.state.store.len();
        self.dispatch(Msg::DeleteUpcoming {
            group_key: row.group_key,
            index: row.index,
        });
        if self.state.store.len() < before {
            self.status_message = Some("Event deleted".to_string());
        }
        self.clamp_upcoming_cursor();
    }

    fn clamp_upcoming_cursor(&mut self) {
        let rows = self.upcoming_rows().len();
        self.upcoming_cursor = self.upcoming_cursor.min(rows.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearMonth;
    use crate::components::month_view::GRID_WIDTH;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> App {
        App::new(ymd(2025, 1, 15).and_hms_opt(12, 0, 0).unwrap(), PickerConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add(app: &mut App, date: &str, time: &str, text: &str) {
        press(app, KeyCode::Char('n'));
        app.form_field = DraftField::Date;
        while !app.state.draft.date.is_empty() {
            press(app, KeyCode::Backspace);
        }
        type_str(app, date);
        press(app, KeyCode::Tab);
        type_str(app, time);
        press(app, KeyCode::Tab);
        type_str(app, text);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn form_adds_event_and_closes() {
        let mut app = app();
        add(&mut app, "2025-01-20", "09:00", "Standup");
        assert!(!app.state.popup_open);
        assert_eq!(app.state.store.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Event added"));
        assert_eq!(app.state.store.events_on(ymd(2025, 1, 20))[0].text, "Standup");
    }

    #[test]
    fn incomplete_form_stays_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "2025-01-20");
        press(&mut app, KeyCode::Enter);
        assert!(app.state.popup_open);
        assert!(app.state.store.is_empty());
        assert_eq!(app.status_message, None);

        press(&mut app, KeyCode::Esc);
        assert!(!app.state.popup_open);
        assert!(app.running, "Esc in the form must not quit");
    }

    #[test]
    fn keys_typed_in_form_do_not_trigger_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "quit tomorrow");
        assert!(app.running);
        assert_eq!(app.state.draft.text, "quit tomorrow");
    }

    #[test]
    fn arrows_move_selection_inside_grid() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.selected, Some(ymd(2025, 1, 15)), "first move selects today");

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected, Some(ymd(2025, 1, 23)));

        // Grid for January 2025 ends on Saturday 1 February.
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected, Some(ymd(2025, 1, 30)));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected, Some(ymd(2025, 1, 30)));
        assert_eq!(app.state.displayed, YearMonth { year: 2025, month: 1 });
    }

    #[test]
    fn month_keys_leave_selection_alone() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state.displayed, YearMonth { year: 2025, month: 3 });
        assert_eq!(app.state.selected, Some(ymd(2025, 1, 15)));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.state.displayed, YearMonth { year: 2025, month: 1 });
    }

    #[test]
    fn picker_jumps_to_month_and_year() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert!(app.picker.is_none());
        assert_eq!(app.state.displayed, YearMonth { year: 2024, month: 3 });
    }

    #[test]
    fn upcoming_panel_deletes_row_under_cursor() {
        let mut app = app();
        add(&mut app, "2025-02-20", "09:00", "later");
        add(&mut app, "2025-02-10", "09:00", "sooner");
        add(&mut app, "2024-12-01", "09:00", "past");

        let rows = app.upcoming_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            UpcomingRow {
                group_key: "February 2025".into(),
                index: 1
            }
        );

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.upcoming_cursor, 1);
        press(&mut app, KeyCode::Char('d'));

        let left: Vec<_> = app.state.store.events().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(left, ["sooner", "past"]);
        assert_eq!(app.upcoming_cursor, 0);
        assert_eq!(app.status_message.as_deref(), Some("Event deleted"));
    }

    #[test]
    fn clock_tick_drops_past_rows() {
        let mut app = app();
        add(&mut app, "2025-01-16", "09:00", "soon");
        add(&mut app, "2025-01-17", "09:00", "later");
        app.upcoming_cursor = 1;
        app.tick(ymd(2025, 1, 16).and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(app.upcoming_rows().len(), 1);
        assert_eq!(app.upcoming_cursor, 0);
    }

    #[test]
    fn click_selects_cell() {
        let mut app = app();
        app.grid_area = Rect::new(0, 1, GRID_WIDTH, 8);
        // Row y=3 is the first week (29 Dec .. 4 Jan); x=1 is Sunday 29 December.
        app.handle_click(1, 3);
        assert_eq!(app.state.selected, Some(ymd(2024, 12, 29)));
        assert_eq!(app.state.displayed, YearMonth { year: 2025, month: 1 });

        app.handle_click(0, 0);
        assert_eq!(app.state.selected, Some(ymd(2024, 12, 29)));
    }

    #[test]
    fn help_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.state.popup_open);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(app.running);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
