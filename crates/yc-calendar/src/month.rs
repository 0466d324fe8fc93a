//! `CalendarMonth` — one month of the year grid.

use crate::day::{CalendarDay, DayIdentity, DayStatus};
use yc_time::{days_in_month, Date, Month};

/// Number of columns in a grid row.
pub const DAYS_IN_WEEK: u8 = 7;

/// A month laid out on a Monday-first week grid.
///
/// `days` holds `empty_days` placeholders followed by every real day of the
/// month. Identities are immutable once built; statuses are updated in place
/// and addressed by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    month: Month,
    name: String,
    identities: Vec<DayIdentity>,
    statuses: Vec<DayStatus>,
    weeks: u8,
    empty_days: u8,
}

impl CalendarMonth {
    /// Lay out `month` of `year`.
    ///
    /// `year` must already be known to be in range; see
    /// [`yc_time::is_valid_year`].
    pub(crate) fn layout(year: u16, month: Month, name: impl Into<String>) -> Self {
        let m = month.number();
        let first = Date::from_ymd(year, m, 1).expect("caller validated the year");
        let empty_days = first.weekday().num_days_from_monday() as u8;
        let length = days_in_month(year, m);
        let weeks = (empty_days + length).div_ceil(DAYS_IN_WEEK);

        let mut identities = Vec::with_capacity(usize::from(empty_days + length));
        identities.extend((0..empty_days).map(|_| DayIdentity::placeholder()));
        identities.extend((0..length).map(|k| DayIdentity::real(first + i32::from(k))));

        let statuses = vec![DayStatus::default(); identities.len()];
        Self {
            month,
            name: name.into(),
            identities,
            statuses,
            weeks,
            empty_days,
        }
    }

    /// Which month of the year this is.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Zero-based month index (0 = January).
    pub fn index(&self) -> usize {
        self.month.index()
    }

    /// Localized title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of grid rows, `ceil((empty_days + days_in_month) / 7)`.
    pub fn weeks(&self) -> u8 {
        self.weeks
    }

    /// Placeholder cells before day 1, equal to the ISO weekday index of
    /// the 1st (Monday = 0).
    pub fn empty_days(&self) -> u8 {
        self.empty_days
    }

    /// Number of real days.
    pub fn days_in_month(&self) -> u8 {
        // identities always holds empty_days + days_in_month cells
        (self.identities.len() - usize::from(self.empty_days)) as u8
    }

    /// Total cells including placeholders.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// `true` only for a month without cells, which layout never produces.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// The cell at grid position `index`.
    pub fn day(&self, index: usize) -> Option<CalendarDay<'_>> {
        Some(CalendarDay {
            identity: self.identities.get(index)?,
            status: self.statuses.get(index)?,
        })
    }

    /// Every cell in grid order, placeholders first.
    pub fn days(&self) -> impl Iterator<Item = CalendarDay<'_>> + '_ {
        self.identities
            .iter()
            .zip(&self.statuses)
            .map(|(identity, status)| CalendarDay { identity, status })
    }

    /// Fixed cell data in grid order.
    pub fn identities(&self) -> &[DayIdentity] {
        &self.identities
    }

    /// Cell statuses in grid order.
    pub fn statuses(&self) -> &[DayStatus] {
        &self.statuses
    }

    /// Mutable status at grid position `index`.
    pub fn status_mut(&mut self, index: usize) -> Option<&mut DayStatus> {
        self.statuses.get_mut(index)
    }

    /// All statuses, mutably, in grid order.
    pub fn statuses_mut(&mut self) -> impl Iterator<Item = &mut DayStatus> + '_ {
        self.statuses.iter_mut()
    }
}
