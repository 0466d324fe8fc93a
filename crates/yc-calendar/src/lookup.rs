//! Date-to-cell resolution.
//!
//! Day `k` of a month lives at grid position `empty_days + k - 1`. Lookups
//! outside the real days of the month resolve to `None`.

use crate::month::CalendarMonth;
use yc_time::Date;

/// Position of a cell in a year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayPosition {
    /// Zero-based month index.
    pub month: usize,
    /// Index into the month's cells, placeholders included.
    pub index: usize,
}

/// Position of `day_of_month` (1-based) in month `month_index` (0-based).
pub fn resolve(
    months: &[CalendarMonth],
    month_index: usize,
    day_of_month: u8,
) -> Option<DayPosition> {
    let month = months.get(month_index)?;
    if day_of_month == 0 || day_of_month > month.days_in_month() {
        return None;
    }
    Some(DayPosition {
        month: month_index,
        index: usize::from(month.empty_days()) + usize::from(day_of_month) - 1,
    })
}

/// Position of `date`, ignoring its year.
///
/// Callers are expected to check the year against the grid first.
pub fn resolve_date(months: &[CalendarMonth], date: Date) -> Option<DayPosition> {
    resolve(months, date.month_of_year().index(), date.day_of_month())
}
