//! Active-day statistics.

use crate::locale::Locale;
use crate::month::CalendarMonth;

/// Number of days in `month` whose state is set, is not `Recall`, and which
/// are not official holidays. Placeholders never count.
pub fn active_days(month: &CalendarMonth) -> usize {
    month.statuses().iter().filter(|s| s.is_active()).count()
}

/// `"<count> <unit>"` with the unit declined for the count, e.g. `"3 дня"`.
pub fn format_active_days(month: &CalendarMonth, locale: &Locale) -> String {
    let count = active_days(month);
    format!("{count} {}", locale.days_unit(count))
}

impl CalendarMonth {
    /// See [`active_days`].
    pub fn active_days(&self) -> usize {
        active_days(self)
    }
}
