use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use super::event::{Event, EventDraft, EventId};
use super::grid::YearMonth;

/// Upcoming events sharing a "Month Year" label.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingGroup<'a> {
    pub label: String,
    pub events: Vec<&'a Event>,
}

/// In-memory event list. Storage order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Store {
    events: Vec<Event>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Append an event built from `draft`. Rejected drafts leave the store untouched.
    pub fn add(&mut self, draft: &EventDraft) -> Option<EventId> {
        let (date, time, text) = draft.fields()?;
        self.next_id += 1;
        let id = EventId(self.next_id);
        self.events.push(Event { id, date, time, text });
        Some(id)
    }

    pub fn delete(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    /// Delete the event shown at `index` under `group_key` in the upcoming view.
    pub fn delete_by_display_position(
        &mut self,
        index: usize,
        group_key: &str,
        now: NaiveDateTime,
    ) -> bool {
        let target = self
            .upcoming_grouped_by_month(now)
            .into_iter()
            .find(|g| g.label == group_key)
            .and_then(|g| g.events.get(index).map(|e| e.id));

        match target {
            Some(id) => self.delete(id),
            None => false,
        }
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    pub fn has_event(&self, date: NaiveDate) -> bool {
        self.events.iter().any(|e| e.date == date)
    }

    pub fn dates_with_events(&self) -> HashSet<NaiveDate> {
        self.events.iter().map(|e| e.date).collect()
    }

    pub fn upcoming_grouped_by_month(&self, now: NaiveDateTime) -> Vec<UpcomingGroup<'_>> {
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.timestamp() > now)
            .collect();
        upcoming.sort_by_key(|e| e.timestamp());

        let mut groups: Vec<UpcomingGroup> = Vec::new();
        for ev in upcoming {
            let label = YearMonth::of(ev.date).label();
            match groups.last_mut() {
                Some(group) if group.label == label => group.events.push(ev),
                _ => groups.push(UpcomingGroup {
                    label,
                    events: vec![ev],
                }),
            }
        }
        groups
    }
}
