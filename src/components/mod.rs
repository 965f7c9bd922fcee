pub mod day_view;
pub mod event_form;
pub mod header;
pub mod help;
pub mod month_picker;
pub mod month_view;
pub mod status_bar;
pub mod upcoming_list;

pub use day_view::DayView;
pub use event_form::EventForm;
pub use header::Header;
pub use help::Help;
pub use month_picker::{MonthPicker, PickerState};
pub use month_view::MonthView;
pub use status_bar::StatusBar;
pub use upcoming_list::UpcomingList;
