//! # yc-calendar
//!
//! Year calendar grid and day-state engine.
//!
//! A year is laid out as twelve [`CalendarMonth`]s on Monday-first week
//! grids. Holiday feeds mark cells as official holidays or weekend-type
//! days, callers set vacation states, and each month reports how many of
//! its days are active together with a localized label.
//!
//! ```
//! use yc_calendar::{Holiday, HolidayKind, Locale, YearCalendar};
//!
//! let mut cal = YearCalendar::new(2024, Locale::russian());
//! cal.set_holidays(vec![Holiday::new("01-01-2024", HolidayKind::Holiday)]);
//!
//! let january = cal.month(0).unwrap();
//! assert_eq!(january.name(), "Январь");
//! assert_eq!((january.empty_days(), january.weeks()), (0, 5));
//! assert!(cal.day(0, 1).unwrap().holiday());
//! assert_eq!(cal.format_active_days(0).as_deref(), Some("0 дней"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Active-day counting and labels.
pub mod aggregate;

/// Calendar cells: identity, status and state.
pub mod day;

/// Year grid construction and access.
pub mod grid;

/// Holiday / weekend overrides.
pub mod holiday;

/// Localized titles and labels.
pub mod locale;

/// Date-to-cell resolution.
pub mod lookup;

/// `CalendarMonth`.
pub mod month;

/// Style tokens and legend.
pub mod style;

/// Vacation records, periods and projection.
pub mod vacation;

/// `YearCalendar` — grid plus inputs, refreshed on change.
pub mod year_calendar;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aggregate::{active_days, format_active_days};
pub use day::{CalendarDay, DayIdentity, DayState, DayStatus};
pub use grid::{build, YearGrid};
pub use holiday::{Holiday, HolidayKind};
pub use locale::{LegendTexts, Locale};
pub use lookup::DayPosition;
pub use month::{CalendarMonth, DAYS_IN_WEEK};
pub use style::{day_classes, legend, state_token, LegendItem};
pub use vacation::{project_vacations, Period, VacationDate, VacationDateKind};
pub use year_calendar::YearCalendar;
