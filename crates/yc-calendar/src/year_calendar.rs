//! `YearCalendar` — owns a grid and keeps it in step with its inputs.
//!
//! Whenever the year or the holiday list changes, [`YearCalendar::refresh`]
//! runs, in this order:
//!
//! 1. reset every holiday/weekend flag of the current grid;
//! 2. rebuild the grid if the year differs from the grid's year;
//! 3. apply the holiday list for the year.
//!
//! A grid from a previous year is therefore never given the new year's
//! overrides.

use crate::aggregate;
use crate::day::{CalendarDay, DayStatus};
use crate::grid::{self, YearGrid};
use crate::holiday::{self, Holiday};
use crate::locale::Locale;
use crate::month::CalendarMonth;
use crate::vacation::{self, VacationDate};
use yc_core::errors::Result;

/// A year grid together with the inputs it was built from.
#[derive(Debug, Clone)]
pub struct YearCalendar {
    year: u16,
    holidays: Vec<Holiday>,
    locale: Locale,
    grid: Option<YearGrid>,
}

impl YearCalendar {
    /// Build the calendar of `year` with no holidays.
    ///
    /// A zero year yields an empty calendar that fills in once a valid year
    /// is set.
    pub fn new(year: u16, locale: Locale) -> Self {
        let mut calendar = Self {
            year,
            holidays: Vec::new(),
            locale,
            grid: None,
        };
        calendar.refresh();
        calendar
    }

    /// Like [`YearCalendar::new`], validating `locale` first.
    pub fn with_locale(year: u16, locale: Locale) -> Result<Self> {
        locale.validate()?;
        Ok(Self::new(year, locale))
    }

    /// Requested year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Current holiday list.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Locale used for titles and labels.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The grid, if one has been built.
    pub fn grid(&self) -> Option<&YearGrid> {
        self.grid.as_ref()
    }

    /// Change the year and refresh.
    pub fn set_year(&mut self, year: u16) {
        self.year = year;
        self.refresh();
    }

    /// Replace the holiday list and refresh.
    pub fn set_holidays(&mut self, holidays: Vec<Holiday>) {
        self.holidays = holidays;
        self.refresh();
    }

    /// Reset overrides, rebuild if the year changed, re-apply holidays.
    ///
    /// A zero year is a no-op: the current grid keeps its cells and flags.
    pub fn refresh(&mut self) {
        if !yc_time::is_valid_year(self.year) {
            return;
        }
        if let Some(grid) = self.grid.as_mut() {
            holiday::reset(grid.months_mut());
        }
        if self.grid.as_ref().map(YearGrid::year) != Some(self.year) {
            self.grid = grid::build(self.year, &self.locale);
        }
        if let Some(grid) = self.grid.as_mut() {
            holiday::apply(grid.months_mut(), &self.holidays, self.year);
        }
    }

    /// All months, empty before the first valid year is set.
    pub fn months(&self) -> &[CalendarMonth] {
        self.grid.as_ref().map(YearGrid::months).unwrap_or(&[])
    }

    /// Month at zero-based `index`.
    pub fn month(&self, index: usize) -> Option<&CalendarMonth> {
        self.months().get(index)
    }

    /// Cell for `day_of_month` in month `month_index`.
    pub fn day(&self, month_index: usize, day_of_month: u8) -> Option<CalendarDay<'_>> {
        self.grid.as_ref()?.day(month_index, day_of_month)
    }

    /// Mutable status for `day_of_month` in month `month_index`.
    pub fn status_mut(&mut self, month_index: usize, day_of_month: u8) -> Option<&mut DayStatus> {
        self.grid.as_mut()?.status_mut(month_index, day_of_month)
    }

    /// Write vacation states into the grid; see [`vacation::project_vacations`].
    pub fn project_vacations(&mut self, records: &[VacationDate]) -> usize {
        self.grid
            .as_mut()
            .map_or(0, |grid| vacation::project_vacations(grid, records))
    }

    /// Active days of month `index`.
    pub fn active_days(&self, index: usize) -> Option<usize> {
        self.month(index).map(aggregate::active_days)
    }

    /// Localized active-day label of month `index`.
    pub fn format_active_days(&self, index: usize) -> Option<String> {
        self.month(index)
            .map(|m| aggregate::format_active_days(m, &self.locale))
    }
}
