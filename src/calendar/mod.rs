pub mod event;
pub mod grid;
pub mod store;

pub use event::{Event, EventDraft, EventId};
pub use grid::{CalendarCell, YearMonth};
pub use store::{Store, UpcomingGroup};
