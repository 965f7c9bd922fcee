//! Calendar state and its transition function.
//!
//! `CalendarState::update` is pure: the clock comes in as an argument and the
//! next state comes out, so the terminal shell is the only place that reads
//! `Local::now()`.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::grid::{self, CalendarCell, YearMonth};
use crate::calendar::{Event, EventDraft, EventId, Store, UpcomingGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Time,
    Text,
}

impl DraftField {
    pub fn next(&self) -> Self {
        match self {
            DraftField::Date => DraftField::Time,
            DraftField::Time => DraftField::Text,
            DraftField::Text => DraftField::Date,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            DraftField::Date => DraftField::Text,
            DraftField::Time => DraftField::Date,
            DraftField::Text => DraftField::Time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SelectDate(NaiveDate),
    GoToToday,
    PrevMonth,
    NextMonth,
    /// 0-based month index.
    SetMonth(u32),
    SetYear(i32),
    OpenAddForm,
    CloseAddForm,
    EditDraft(DraftField, String),
    SubmitDraft,
    DeleteEvent(EventId),
    DeleteUpcoming { group_key: String, index: usize },
}

#[derive(Debug, Clone)]
pub struct CalendarState {
    pub displayed: YearMonth,
    pub selected: Option<NaiveDate>,
    pub store: Store,
    pub popup_open: bool,
    pub draft: EventDraft,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            displayed: YearMonth::of(today),
            selected: None,
            store: Store::new(),
            popup_open: false,
            draft: EventDraft::default(),
        }
    }

    pub fn update(mut self, msg: Msg, now: NaiveDateTime) -> Self {
        match msg {
            Msg::SelectDate(date) => self.selected = Some(date),
            Msg::GoToToday => {
                let today = now.date();
                self.displayed = YearMonth::of(today);
                self.selected = Some(today);
            }
            Msg::PrevMonth => self.displayed = self.displayed.prev(),
            Msg::NextMonth => self.displayed = self.displayed.next(),
            Msg::SetMonth(month0) => self.displayed = self.displayed.with_month0(month0),
            Msg::SetYear(year) => self.displayed = self.displayed.with_year(year),
            Msg::OpenAddForm => {
                if self.draft.date.is_empty() {
                    if let Some(date) = self.selected {
                        self.draft.date = date.format("%Y-%m-%d").to_string();
                    }
                }
                self.popup_open = true;
            }
            Msg::CloseAddForm => self.popup_open = false,
            Msg::EditDraft(field, value) => match field {
                DraftField::Date => self.draft.date = value,
                DraftField::Time => self.draft.time = value,
                DraftField::Text => self.draft.text = value,
            },
            Msg::SubmitDraft => match self.store.add(&self.draft) {
                Some(id) => {
                    log::info!("added event {} on {}", id, self.draft.date.trim());
                    self.draft.clear();
                    self.popup_open = false;
                }
                None => log::debug!("rejected incomplete draft {:?}", self.draft),
            },
            Msg::DeleteEvent(id) => {
                if self.store.delete(id) {
                    log::info!("deleted event {}", id);
                }
            }
            Msg::DeleteUpcoming { group_key, index } => {
                if self.store.delete_by_display_position(index, &group_key, now) {
                    log::info!("deleted upcoming event {} of {}", index, group_key);
                } else {
                    log::debug!("no upcoming event {} in {}", index, group_key);
                }
            }
        }
        self
    }

    pub fn cells(&self, today: NaiveDate) -> Vec<CalendarCell> {
        let marked: HashSet<NaiveDate> = self.store.dates_with_events();
        grid::month_cells(self.displayed, today, self.selected, &marked)
    }

    pub fn selected_events(&self) -> Vec<&Event> {
        self.selected
            .map(|date| self.store.events_on(date))
            .unwrap_or_default()
    }

    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<UpcomingGroup<'_>> {
        self.store.upcoming_grouped_by_month(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        ymd(2025, 1, 1).and_hms_opt(12, 0, 0).unwrap()
    }

    fn apply(state: CalendarState, msgs: impl IntoIterator<Item = Msg>) -> CalendarState {
        msgs.into_iter().fold(state, |s, m| s.update(m, now()))
    }

    fn fill(date: &str, time: &str, text: &str) -> Vec<Msg> {
        vec![
            Msg::OpenAddForm,
            Msg::EditDraft(DraftField::Date, date.into()),
            Msg::EditDraft(DraftField::Time, time.into()),
            Msg::EditDraft(DraftField::Text, text.into()),
            Msg::SubmitDraft,
        ]
    }

    #[test]
    fn starts_on_todays_month_without_selection() {
        let state = CalendarState::new(ymd(2025, 1, 1));
        assert_eq!(state.displayed, YearMonth { year: 2025, month: 1 });
        assert_eq!(state.selected, None);
        assert!(!state.popup_open);
        assert!(state.selected_events().is_empty());
    }

    #[test]
    fn selection_is_independent_of_navigation() {
        let state = apply(
            CalendarState::new(ymd(2025, 1, 1)),
            [Msg::SelectDate(ymd(2025, 1, 20)), Msg::NextMonth, Msg::NextMonth],
        );
        assert_eq!(state.displayed, YearMonth { year: 2025, month: 3 });
        assert_eq!(state.selected, Some(ymd(2025, 1, 20)));

        let state = apply(state, [Msg::SelectDate(ymd(2024, 7, 4))]);
        assert_eq!(state.displayed, YearMonth { year: 2025, month: 3 });
    }

    #[test]
    fn pickers_and_arrows_cross_year_boundaries() {
        let state = apply(
            CalendarState::new(ymd(2025, 1, 1)),
            [Msg::PrevMonth],
        );
        assert_eq!(state.displayed, YearMonth { year: 2024, month: 12 });

        let state = apply(state, [Msg::SetMonth(5), Msg::SetYear(2040)]);
        assert_eq!(state.displayed, YearMonth { year: 2040, month: 6 });
    }

    #[test]
    fn today_moves_month_and_selection() {
        let state = apply(
            CalendarState::new(ymd(2025, 1, 1)),
            [Msg::SetYear(2031), Msg::SelectDate(ymd(2031, 5, 5)), Msg::GoToToday],
        );
        assert_eq!(state.displayed, YearMonth { year: 2025, month: 1 });
        assert_eq!(state.selected, Some(ymd(2025, 1, 1)));
    }

    #[test]
    fn valid_submit_adds_clears_and_closes() {
        let state = apply(CalendarState::new(ymd(2025, 1, 1)), fill("2025-01-10", "09:00", "Standup"));
        assert!(!state.popup_open);
        assert_eq!(state.draft, EventDraft::default());

        let found = state.store.events_on(ymd(2025, 1, 10));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Standup");
    }

    #[test]
    fn invalid_submit_keeps_popup_and_draft() {
        let state = apply(CalendarState::new(ymd(2025, 1, 1)), fill("2025-01-10", "09:00", ""));
        assert!(state.popup_open);
        assert!(state.store.is_empty());
        assert_eq!(state.draft.date, "2025-01-10");
    }

    #[test]
    fn opening_form_prefills_selected_date() {
        let state = apply(
            CalendarState::new(ymd(2025, 1, 1)),
            [Msg::SelectDate(ymd(2025, 2, 3)), Msg::OpenAddForm],
        );
        assert_eq!(state.draft.date, "2025-02-03");

        let state = apply(state, [Msg::CloseAddForm, Msg::SelectDate(ymd(2025, 2, 4)), Msg::OpenAddForm]);
        assert_eq!(state.draft.date, "2025-02-03", "typed values survive cancel");
    }

    #[test]
    fn delete_paths_remove_the_right_event() {
        let mut msgs = fill("2025-02-20", "09:00", "later");
        msgs.extend(fill("2025-02-10", "09:00", "sooner"));
        let state = apply(CalendarState::new(ymd(2025, 1, 1)), msgs);

        let state = apply(
            state,
            [Msg::DeleteUpcoming { group_key: "February 2025".into(), index: 0 }],
        );
        let left: Vec<_> = state.store.events().iter().map(|e| e.text.clone()).collect();
        assert_eq!(left, ["later"]);

        let id = state.store.events()[0].id;
        let state = apply(state, [Msg::DeleteEvent(id)]);
        assert!(state.store.is_empty());
    }

    #[test]
    fn cells_mark_event_days_and_selection() {
        let mut msgs = fill("2025-01-10", "09:00", "Standup");
        msgs.push(Msg::SelectDate(ymd(2025, 1, 10)));
        let state = apply(CalendarState::new(ymd(2025, 1, 1)), msgs);

        let cells = state.cells(ymd(2025, 1, 1));
        let cell = cells.iter().find(|c| c.date == ymd(2025, 1, 10)).unwrap();
        assert!(cell.has_event && cell.is_selected);
        assert_eq!(state.selected_events().len(), 1);
    }

    #[test]
    fn upcoming_view_uses_given_clock() {
        let mut msgs = fill("2025-03-01", "09:00", "march");
        msgs.extend(fill("2025-02-01", "09:00", "february"));
        let state = apply(CalendarState::new(ymd(2025, 1, 1)), msgs);

        let groups = state.upcoming(now());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "February 2025");
        assert_eq!(groups[1].label, "March 2025");

        let late = ymd(2025, 2, 15).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(state.upcoming(late).len(), 1);
    }
}
