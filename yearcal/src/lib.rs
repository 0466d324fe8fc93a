//! # yearcal
//!
//! Full-year calendar grids with holiday/weekend overrides, per-day vacation
//! states and localized active-day counters.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `yc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! yearcal = "0.1"
//! ```
//!
//! ```rust
//! use yearcal::calendar::{Holiday, HolidayKind, Locale, YearCalendar};
//!
//! let mut cal = YearCalendar::new(2024, Locale::english());
//! cal.set_holidays(vec![Holiday::new("23-02-2024", HolidayKind::Holiday)]);
//!
//! let february = cal.month(1).unwrap();
//! assert_eq!(february.days_in_month(), 29);
//! assert!(cal.day(1, 23).unwrap().holiday());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and text utilities.
pub use yc_core as core;

/// Date, month and weekday types.
pub use yc_time as time;

/// Year grid, overrides, vacation states and aggregation.
pub use yc_calendar as calendar;
