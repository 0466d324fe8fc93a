//! Calendar cells.
//!
//! A cell is split in two: an immutable [`DayIdentity`] fixed when the grid
//! is built, and a mutable [`DayStatus`] that overrides and callers update
//! in place. [`CalendarDay`] is a borrowed view over both.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use yc_time::Date;

/// Vacation / day-kind classification of a cell. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayState {
    /// Nothing scheduled.
    #[default]
    None,
    /// Holiday taken as leave.
    Holiday,
    /// Planned vacation day.
    Planned,
    /// Vacation day used according to the schedule.
    ScheduleUsed,
    /// Vacation day used outside the schedule.
    OffScheduleUsed,
    /// Employee recalled from vacation.
    Recall,
}

impl DayState {
    /// Every state, `None` first.
    pub const ALL: [DayState; 6] = [
        DayState::None,
        DayState::Holiday,
        DayState::Planned,
        DayState::ScheduleUsed,
        DayState::OffScheduleUsed,
        DayState::Recall,
    ];

    /// Whether a day in this state counts towards a month's active days,
    /// before the holiday flag is taken into account.
    pub fn is_active(self) -> bool {
        !matches!(self, DayState::None | DayState::Recall)
    }
}

/// The fixed part of a cell: its day-of-month and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayIdentity {
    value: u8,
    date: Option<Date>,
}

impl DayIdentity {
    /// A leading empty cell that pads the first week.
    pub(crate) fn placeholder() -> Self {
        Self {
            value: 0,
            date: None,
        }
    }

    /// A real day of the month.
    pub(crate) fn real(date: Date) -> Self {
        Self {
            value: date.day_of_month(),
            date: Some(date),
        }
    }

    /// Day of the month (1–31), or `0` for a placeholder.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// `true` for leading padding cells.
    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }

    /// The calendar date, `None` for placeholders.
    pub fn calendar_date(&self) -> Option<Date> {
        self.date
    }

    /// End of the day (23:59:59.999), `None` for placeholders.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date.map(|d| d.end_of_day())
    }
}

/// The mutable part of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DayStatus {
    /// Vacation / day-kind classification.
    pub state: DayState,
    /// Official non-working holiday.
    pub holiday: bool,
    /// Non-working weekend-type day.
    pub weekend: bool,
    /// Greyed out in the UI.
    pub disabled: bool,
    /// Emphasised in the UI.
    pub highlighted: bool,
}

impl DayStatus {
    /// Mark as an official holiday. Clears the weekend flag.
    pub fn mark_holiday(&mut self) {
        self.holiday = true;
        self.weekend = false;
    }

    /// Mark as a weekend-type day. Clears the holiday flag.
    pub fn mark_weekend(&mut self) {
        self.weekend = true;
        self.holiday = false;
    }

    /// Drop any holiday/weekend override.
    pub fn clear_overrides(&mut self) {
        self.holiday = false;
        self.weekend = false;
    }

    /// Whether this day counts towards the month's active days.
    pub fn is_active(&self) -> bool {
        self.state.is_active() && !self.holiday
    }
}

/// Read-only view of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay<'a> {
    /// Fixed part.
    pub identity: &'a DayIdentity,
    /// Mutable part, borrowed.
    pub status: &'a DayStatus,
}

impl CalendarDay<'_> {
    /// Day of the month, `0` for placeholders.
    pub fn value(&self) -> u8 {
        self.identity.value()
    }

    /// See [`DayIdentity::is_placeholder`].
    pub fn is_placeholder(&self) -> bool {
        self.identity.is_placeholder()
    }

    /// See [`DayIdentity::date`].
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.identity.date()
    }

    /// Current state.
    pub fn state(&self) -> DayState {
        self.status.state
    }

    /// Official holiday flag.
    pub fn holiday(&self) -> bool {
        self.status.holiday
    }

    /// Weekend flag.
    pub fn weekend(&self) -> bool {
        self.status.weekend
    }

    /// UI disabled flag.
    pub fn disabled(&self) -> bool {
        self.status.disabled
    }

    /// UI highlighted flag.
    pub fn highlighted(&self) -> bool {
        self.status.highlighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_and_weekend_are_exclusive() {
        let mut s = DayStatus::default();
        s.mark_holiday();
        assert!(s.holiday && !s.weekend);
        s.mark_weekend();
        assert!(s.weekend && !s.holiday);
        s.clear_overrides();
        assert!(!s.weekend && !s.holiday);
    }

    #[test]
    fn activity_rules() {
        let mut s = DayStatus::default();
        assert!(!s.is_active());
        s.state = DayState::Planned;
        assert!(s.is_active());
        s.holiday = true;
        assert!(!s.is_active());
        s.holiday = false;
        s.weekend = true;
        assert!(s.is_active(), "weekend flag does not affect activity");
        s.state = DayState::Recall;
        assert!(!s.is_active());
        s.state = DayState::Holiday;
        assert!(s.is_active());
    }

    #[test]
    fn placeholder_has_no_date() {
        let p = DayIdentity::placeholder();
        assert_eq!(p.value(), 0);
        assert!(p.is_placeholder());
        assert!(p.date().is_none());

        let d = DayIdentity::real(Date::from_ymd(2024, 5, 9).unwrap());
        assert_eq!(d.value(), 9);
        assert_eq!(
            d.date().map(|t| t.to_string()).as_deref(),
            Some("2024-05-09 23:59:59.999")
        );
    }
}
