//! Terminal month calendar with an in-memory event list.
//!
//! The date arithmetic and event queries in [`calendar`] and the transition
//! function in [`state`] have no terminal dependency; the remaining modules
//! are the ratatui front end built on top of them.

pub mod app;
pub mod calendar;
pub mod components;
pub mod config;
pub mod event;
pub mod logging;
pub mod state;
pub mod theme;
pub mod tui;
pub mod ui;
