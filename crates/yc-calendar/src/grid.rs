//! Year grid construction.
//!
//! [`build`] lays out all twelve months of a year. A zero year produces
//! nothing, so the caller keeps whatever grid it already had.

use crate::day::{CalendarDay, DayStatus};
use crate::locale::Locale;
use crate::lookup;
use crate::month::CalendarMonth;
use yc_core::errors::{Error, Result};
use yc_time::{is_valid_year, Date, Month};

/// The twelve laid-out months of one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGrid {
    year: u16,
    months: Vec<CalendarMonth>,
}

/// Lay out every month of `year` with titles from `locale`.
///
/// Returns `None` when `year` is `0`.
pub fn build(year: u16, locale: &Locale) -> Option<YearGrid> {
    if !is_valid_year(year) {
        tracing::debug!(year, "no grid for year");
        return None;
    }
    let months: Vec<CalendarMonth> = Month::ALL
        .iter()
        .map(|&m| CalendarMonth::layout(year, m, locale.month_name(m)))
        .collect();
    tracing::debug!(
        year,
        cells = months.iter().map(CalendarMonth::len).sum::<usize>(),
        "built year grid"
    );
    Some(YearGrid { year, months })
}

impl YearGrid {
    /// The year this grid lays out.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// All twelve months, January first.
    pub fn months(&self) -> &[CalendarMonth] {
        &self.months
    }

    /// All twelve months, mutably.
    pub fn months_mut(&mut self) -> &mut [CalendarMonth] {
        &mut self.months
    }

    /// Month at zero-based `index`.
    pub fn month(&self, index: usize) -> Result<&CalendarMonth> {
        self.months.get(index).ok_or(Error::IndexOutOfRange {
            index,
            size: self.months.len(),
        })
    }

    /// Cell for `day_of_month` (1-based) in month `month_index` (0-based).
    pub fn day(&self, month_index: usize, day_of_month: u8) -> Option<CalendarDay<'_>> {
        let pos = lookup::resolve(&self.months, month_index, day_of_month)?;
        self.months[pos.month].day(pos.index)
    }

    /// Mutable status for `day_of_month` in month `month_index`.
    pub fn status_mut(&mut self, month_index: usize, day_of_month: u8) -> Option<&mut DayStatus> {
        let pos = lookup::resolve(&self.months, month_index, day_of_month)?;
        self.months[pos.month].status_mut(pos.index)
    }

    /// Cell for `date`, `None` if the date lies in another year.
    pub fn day_for_date(&self, date: Date) -> Option<CalendarDay<'_>> {
        if date.year() != self.year {
            return None;
        }
        self.day(date.month_of_year().index(), date.day_of_month())
    }

    /// Mutable status for `date`, `None` if the date lies in another year.
    pub fn status_for_date_mut(&mut self, date: Date) -> Option<&mut DayStatus> {
        if date.year() != self.year {
            return None;
        }
        self.status_mut(date.month_of_year().index(), date.day_of_month())
    }
}
