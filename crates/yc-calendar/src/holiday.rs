//! Holiday and weekend overrides.
//!
//! A holiday feed lists dates that are non-working either as official
//! holidays or as (possibly transferred) weekend days. [`apply`] projects
//! such a list onto a grid; [`reset`] clears every override so a changed
//! list can be applied from scratch.

use crate::lookup;
use crate::month::CalendarMonth;
use serde::{Deserialize, Serialize};
use yc_time::Date;

/// Kind of non-working day.
///
/// Any feed `type` other than `"holiday"` reads as [`HolidayKind::Weekend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// Official holiday.
    Holiday,
    /// Weekend-type day off.
    #[serde(other)]
    Weekend,
}

/// One record of a holiday feed.
///
/// Serialized as `{"date": "DD-MM-YYYY", "type": "holiday" | "weekend"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// Date as `DD-MM-YYYY`.
    pub date: String,
    /// Holiday or weekend.
    #[serde(rename = "type")]
    pub kind: HolidayKind,
}

impl Holiday {
    /// Create a record.
    pub fn new(date: impl Into<String>, kind: HolidayKind) -> Self {
        Self {
            date: date.into(),
            kind,
        }
    }
}

/// Clear the holiday and weekend flags of every cell.
pub fn reset(months: &mut [CalendarMonth]) {
    for month in months.iter_mut() {
        month.statuses_mut().for_each(|s| s.clear_overrides());
    }
}

/// Apply `holidays` to the grid of `year`.
///
/// Records dated in another year, or whose date does not parse, are
/// skipped. When several records name the same date the last one wins.
/// Flags set by earlier calls are not cleared; call [`reset`] first.
pub fn apply(months: &mut [CalendarMonth], holidays: &[Holiday], year: u16) {
    let mut applied = 0usize;
    for record in holidays {
        let date = match Date::parse_dmy(&record.date) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "skipping holiday record");
                continue;
            }
        };
        if date.year() != year {
            continue;
        }
        let Some(pos) = lookup::resolve_date(months, date) else {
            continue;
        };
        let Some(status) = months[pos.month].status_mut(pos.index) else {
            continue;
        };
        match record.kind {
            HolidayKind::Holiday => status.mark_holiday(),
            HolidayKind::Weekend => status.mark_weekend(),
        }
        tracing::trace!(date = %record.date, kind = ?record.kind, "override applied");
        applied += 1;
    }
    tracing::debug!(year, applied, total = holidays.len(), "applied holiday overrides");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build;
    use crate::locale::Locale;

    #[test]
    fn holiday_then_reset() {
        let mut grid = build(2024, &Locale::default()).unwrap();
        apply(
            grid.months_mut(),
            &[Holiday::new("01-01-2024", HolidayKind::Holiday)],
            2024,
        );
        let day = grid.day(0, 1).unwrap();
        assert!(day.holiday());
        assert!(!day.weekend());

        reset(grid.months_mut());
        let day = grid.day(0, 1).unwrap();
        assert!(!day.holiday());
        assert!(!day.weekend());
    }

    #[test]
    fn last_record_wins() {
        let mut grid = build(2024, &Locale::default()).unwrap();
        let holidays = [
            Holiday::new("02-11-2024", HolidayKind::Holiday),
            Holiday::new("02-11-2024", HolidayKind::Weekend),
        ];
        apply(grid.months_mut(), &holidays, 2024);
        let day = grid.day(10, 2).unwrap();
        assert!(day.weekend() && !day.holiday());

        reset(grid.months_mut());
        apply(grid.months_mut(), &[holidays[1].clone(), holidays[0].clone()], 2024);
        let day = grid.day(10, 2).unwrap();
        assert!(day.holiday() && !day.weekend());
    }

    #[test]
    fn other_years_and_garbage_are_skipped() {
        let mut grid = build(2024, &Locale::default()).unwrap();
        let holidays = [
            Holiday::new("01-01-2025", HolidayKind::Holiday),
            Holiday::new("2024-01-02", HolidayKind::Holiday),
            Holiday::new("30-02-2024", HolidayKind::Weekend),
        ];
        apply(grid.months_mut(), &holidays, 2024);
        assert!(grid
            .months()
            .iter()
            .flat_map(|m| m.statuses())
            .all(|s| !s.holiday && !s.weekend));
    }

    #[test]
    fn feed_json_shape() {
        let json = r#"[
            {"date": "08-03-2024", "type": "holiday"},
            {"date": "27-04-2024", "type": "weekend"}
        ]"#;
        let holidays: Vec<Holiday> = serde_json::from_str(json).unwrap();
        assert_eq!(
            holidays,
            vec![
                Holiday::new("08-03-2024", HolidayKind::Holiday),
                Holiday::new("27-04-2024", HolidayKind::Weekend),
            ]
        );
    }

    #[test]
    fn unknown_feed_type_reads_as_weekend() {
        let json = r#"[
            {"date": "01-05-2024", "type": "holiday"},
            {"date": "02-05-2024", "type": "bridge"},
            {"date": "03-05-2024", "type": "Holiday"}
        ]"#;
        let holidays: Vec<Holiday> = serde_json::from_str(json).unwrap();
        let kinds: Vec<HolidayKind> = holidays.iter().map(|h| h.kind).collect();
        assert_eq!(
            kinds,
            [HolidayKind::Holiday, HolidayKind::Weekend, HolidayKind::Weekend]
        );

        let mut grid = build(2024, &Locale::default()).unwrap();
        apply(grid.months_mut(), &holidays, 2024);
        assert!(grid.day(4, 1).unwrap().holiday());
        assert!(grid.day(4, 2).unwrap().weekend());
        assert!(grid.day(4, 3).unwrap().weekend());
    }
}
