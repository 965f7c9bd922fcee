use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Identifier handed out by the store when an event is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub text: String,
}

impl Event {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn time_display(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Add-form values, kept as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub date: String,
    pub time: String,
    pub text: String,
}

impl EventDraft {
    /// Event text counts as filled in as soon as it has any character, spaces included.
    pub fn is_blank(&self) -> bool {
        self.date.trim().is_empty() || self.time.trim().is_empty() || self.text.is_empty()
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn parsed_time(&self) -> Option<NaiveTime> {
        let raw = self.time.trim();
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }

    /// Date, time and text as typed, or `None` if any field is empty or malformed.
    pub fn fields(&self) -> Option<(NaiveDate, NaiveTime, String)> {
        if self.is_blank() {
            return None;
        }
        Some((self.parsed_date()?, self.parsed_time()?, self.text.clone()))
    }

    pub fn clear(&mut self) {
        self.date.clear();
        self.time.clear();
        self.text.clear();
    }
}
