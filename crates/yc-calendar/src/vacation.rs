//! Vacation records and their projection onto a grid.
//!
//! Deciding which days of a schedule are planned, used or recalled is the
//! caller's job. This module only carries the records and writes each one's
//! state into the matching cell.

use crate::day::DayState;
use crate::grid::YearGrid;
use serde::{Deserialize, Serialize};
use yc_core::ensure;
use yc_core::errors::Result;
use yc_time::Date;

/// Kind of a vacation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VacationDateKind {
    /// Planned vacation day.
    Planned,
    /// Used according to the schedule.
    ScheduleUsed,
    /// Used outside the schedule.
    OffScheduleUsed,
    /// Recalled from vacation.
    Recall,
    /// Holiday falling within a vacation.
    Holiday,
}

impl From<VacationDateKind> for DayState {
    fn from(kind: VacationDateKind) -> Self {
        match kind {
            VacationDateKind::Planned => DayState::Planned,
            VacationDateKind::ScheduleUsed => DayState::ScheduleUsed,
            VacationDateKind::OffScheduleUsed => DayState::OffScheduleUsed,
            VacationDateKind::Recall => DayState::Recall,
            VacationDateKind::Holiday => DayState::Holiday,
        }
    }
}

/// One record of a vacation feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacationDate {
    /// Date as `DD-MM-YYYY`.
    pub date: String,
    /// Record kind.
    #[serde(rename = "type")]
    pub kind: VacationDateKind,
}

impl VacationDate {
    /// Create a record.
    pub fn new(date: impl Into<String>, kind: VacationDateKind) -> Self {
        Self {
            date: date.into(),
            kind,
        }
    }
}

/// An inclusive range of `DD-MM-YYYY` dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// First day.
    pub start: String,
    /// Last day.
    pub end: String,
}

impl Period {
    /// Create a period.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parse both ends. Fails if either is malformed or `end < start`.
    pub fn bounds(&self) -> Result<(Date, Date)> {
        let start = Date::parse_dmy(&self.start)?;
        let end = Date::parse_dmy(&self.end)?;
        ensure!(start <= end, "period ends on {end} before it starts on {start}");
        Ok((start, end))
    }

    /// Every date of the period, in order.
    pub fn dates(&self) -> Result<impl Iterator<Item = Date>> {
        let (start, end) = self.bounds()?;
        Ok((0..=start.days_between(end)).map(move |n| start + n))
    }

    /// Number of calendar days in the period.
    pub fn day_count(&self) -> Result<usize> {
        let (start, end) = self.bounds()?;
        Ok(start.days_between(end) as usize + 1)
    }

    /// One record of `kind` per day of the period.
    pub fn to_vacation_dates(&self, kind: VacationDateKind) -> Result<Vec<VacationDate>> {
        Ok(self
            .dates()?
            .map(|d| VacationDate::new(d.format_dmy(), kind))
            .collect())
    }
}

/// Set the state of each record's cell in `grid`.
///
/// Records from other years or with malformed dates are skipped. Returns
/// the number of cells updated.
pub fn project_vacations(grid: &mut YearGrid, records: &[VacationDate]) -> usize {
    let mut updated = 0;
    for record in records {
        let date = match Date::parse_dmy(&record.date) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "skipping vacation record");
                continue;
            }
        };
        if let Some(status) = grid.status_for_date_mut(date) {
            status.state = record.kind.into();
            updated += 1;
        }
    }
    tracing::debug!(
        year = grid.year(),
        updated,
        total = records.len(),
        "projected vacation dates"
    );
    updated
}
