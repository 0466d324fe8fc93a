//! `Date` type.
//!
//! A thin wrapper over [`chrono::NaiveDate`] restricted to positive years
//! that fit a `u16`, the range the calendar grid works with.

use crate::month::Month;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};
use yc_core::errors::{Error, Result};

/// Text layout of dates in holiday and vacation feeds.
const DMY_FORMAT: &str = "%d-%m-%Y";

/// A calendar date in the proleptic Gregorian calendar.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Smallest supported year.
    pub const MIN_YEAR: u16 = 1;

    /// Largest supported year.
    pub const MAX_YEAR: u16 = u16::MAX;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !is_valid_year(year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("no such day {year}-{month:02}-{day:02}")))
    }

    /// Wrap a chrono date, rejecting years outside the supported range.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        match u16::try_from(date.year()) {
            Ok(year) if is_valid_year(year) => Ok(Date(date)),
            _ => Err(Error::Date(format!(
                "year {} out of range [{}, {}]",
                date.year(),
                Self::MIN_YEAR,
                Self::MAX_YEAR
            ))),
        }
    }

    /// Parse a `DD-MM-YYYY` string, the format used by holiday and vacation
    /// feeds.
    ///
    /// ```
    /// use yc_time::Date;
    /// let d = Date::parse_dmy("29-02-2024").unwrap();
    /// assert_eq!((d.year(), d.month(), d.day_of_month()), (2024, 2, 29));
    /// assert!(Date::parse_dmy("29-02-2023").is_err());
    /// assert!(Date::parse_dmy("2024-02-29").is_err());
    /// ```
    pub fn parse_dmy(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), DMY_FORMAT)
            .map_err(|e| Error::parse(s, e.to_string()))?;
        Self::from_naive(date).map_err(|e| Error::parse(s, e.to_string()))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        // checked on construction
        self.0.year() as u16
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("chrono months are in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The last representable instant of this day, 23:59:59.999 local time.
    pub fn end_of_day(&self) -> NaiveDateTime {
        self.0
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("23:59:59.999 is a valid time of day")
    }

    /// Format as `DD-MM-YYYY`.
    pub fn format_dmy(&self) -> String {
        self.0.format(DMY_FORMAT).to_string()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let step = Days::new(u64::from(n.unsigned_abs()));
        let moved = if n >= 0 {
            self.0.checked_add_days(step)
        } else {
            self.0.checked_sub_days(step)
        };
        moved
            .ok_or_else(|| Error::Date(format!("{self:?} + {n} days overflows")))
            .and_then(Self::from_naive)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other - self
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        // at most u16::MAX years apart
        self.0.signed_duration_since(rhs.0).num_days() as i32
    }
}

// ── Conversions / Parsing / Display ───────────────────────────────────────────

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_naive(date)
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_dmy(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%-d %B %Y"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Whether a year lies in the supported range.
pub fn is_valid_year(year: u16) -> bool {
    year >= Date::MIN_YEAR
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    NaiveDate::from_ymd_opt(i32::from(year), 2, 29).is_some()
}

/// Number of days in a given month/year.
///
/// # Panics
/// If `month` is not in `1..=12`.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    let first = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), 1)
        .expect("month must be in 1..=12");
    let next = first
        .checked_add_months(Months::new(1))
        .expect("chrono covers every u16 year");
    (next - first).num_days() as u8
}

// ── Tests ─────────────────────────────────────────────────────────────────────
