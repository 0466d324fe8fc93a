//! # yc-time
//!
//! Date and month types for the calendar grid, built on `chrono`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use chrono::Weekday;
pub use date::{days_in_month, is_leap_year, is_valid_year, Date};
pub use month::Month;
