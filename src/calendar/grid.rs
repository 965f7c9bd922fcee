use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

/// The month shown by the grid. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day() + Duration::days(days_in_month(self.year, self.month) as i64 - 1)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Replace the month with a 0-based index, as the month picker reports it.
    pub fn with_month0(&self, month0: u32) -> Self {
        Self {
            year: self.year,
            month: month0.min(11) + 1,
        }
    }

    pub fn with_year(&self, year: i32) -> Self {
        Self { year, month: self.month }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_event: bool,
}

/// Every date of the full Sunday-to-Saturday weeks covering the reference month.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let month = YearMonth::of(reference);
    let first = month.first_day();
    let last = month.last_day();

    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);

    start.iter_days().take_while(|d| *d <= end).collect()
}

pub fn month_cells(
    displayed: YearMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    marked: &HashSet<NaiveDate>,
) -> Vec<CalendarCell> {
    month_grid(displayed.first_day())
        .into_iter()
        .map(|date| CalendarCell {
            date,
            in_current_month: displayed.contains(date),
            is_today: date == today,
            is_selected: selected == Some(date),
            has_event: marked.contains(&date),
        })
        .collect()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next, NaiveDate::from_ymd_opt(year, month, 1)) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
