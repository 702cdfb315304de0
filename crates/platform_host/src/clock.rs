//! Wall-clock helpers shared by the lock screen and the desktop status bar.

use chrono::{Datelike, Local, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local date and time captured for display.
pub struct WallClockSnapshot(NaiveDateTime);

impl WallClockSnapshot {
    /// Reads local time (the browser's zone on `wasm32`).
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Wraps an already-resolved local time.
    pub fn from_local(local: NaiveDateTime) -> Self {
        Self(local)
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 24-hour `HH:MM`.
    pub fn format_hh_mm(&self) -> String {
        self.0.format("%H:%M").to_string()
    }

    /// Long date such as `Monday, January 5`.
    pub fn format_long_date(&self) -> String {
        self.0.format("%A, %B %-d").to_string()
    }
}
