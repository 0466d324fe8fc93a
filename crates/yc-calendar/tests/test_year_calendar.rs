//! End-to-end scenarios: feeds in, grid and labels out.

use yc_calendar::style::{day_classes, ACTIVE_HOLIDAY, HOLIDAY, PLANNED, RECALL};
use yc_calendar::{
    legend, DayState, Holiday, HolidayKind, Locale, Period, VacationDate, VacationDateKind,
    YearCalendar,
};

/// Route engine logs to the test harness; `RUST_LOG` overrides the default.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("yc_calendar=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

const HOLIDAYS_2024: &str = r#"[
    {"date": "01-01-2024", "type": "holiday"},
    {"date": "02-01-2024", "type": "holiday"},
    {"date": "08-01-2024", "type": "holiday"},
    {"date": "23-02-2024", "type": "holiday"},
    {"date": "08-03-2024", "type": "holiday"},
    {"date": "27-04-2024", "type": "weekend"},
    {"date": "29-04-2024", "type": "holiday"},
    {"date": "01-05-2024", "type": "holiday"},
    {"date": "09-05-2024", "type": "holiday"},
    {"date": "10-05-2024", "type": "weekend"},
    {"date": "12-06-2024", "type": "holiday"},
    {"date": "04-11-2024", "type": "holiday"},
    {"date": "28-12-2024", "type": "weekend"},
    {"date": "31-12-2024", "type": "holiday"},
    {"date": "01-01-2025", "type": "holiday"}
]"#;

fn holidays() -> Vec<Holiday> {
    serde_json::from_str(HOLIDAYS_2024).unwrap()
}

#[test]
fn new_year_holiday_and_reset() {
    init_tracing();
    let mut cal = YearCalendar::new(2024, Locale::russian());
    cal.set_holidays(vec![Holiday::new("01-01-2024", HolidayKind::Holiday)]);
    let day = cal.day(0, 1).unwrap();
    assert!(day.holiday() && !day.weekend());

    // a new list is applied from scratch
    cal.set_holidays(Vec::new());
    let day = cal.day(0, 1).unwrap();
    assert!(!day.holiday() && !day.weekend());
}

#[test]
fn feed_marks_expected_cells() {
    init_tracing();
    let mut cal = YearCalendar::new(2024, Locale::russian());
    cal.set_holidays(holidays());

    assert!(cal.day(3, 27).unwrap().weekend());
    assert!(cal.day(4, 9).unwrap().holiday());
    assert!(cal.day(11, 31).unwrap().holiday());

    let marked = cal
        .months()
        .iter()
        .flat_map(|m| m.days())
        .filter(|d| d.holiday() || d.weekend())
        .count();
    // the 2025 record is skipped
    assert_eq!(marked, 14);

    // applying the same feed twice changes nothing
    let before: Vec<_> = cal.months().to_vec();
    cal.refresh();
    assert_eq!(cal.months(), &before[..]);
}

#[test]
fn vacation_in_may() {
    init_tracing();
    let mut cal = YearCalendar::new(2024, Locale::russian());
    cal.set_holidays(holidays());

    let mut records = Period::new("06-05-2024", "17-05-2024")
        .to_vacation_dates(VacationDateKind::ScheduleUsed)
        .unwrap();
    records.push(VacationDate::new("16-05-2024", VacationDateKind::Recall));
    records.push(VacationDate::new("17-05-2024", VacationDateKind::Recall));
    assert_eq!(cal.project_vacations(&records), 14);

    // 12 days, minus the 9 May holiday, minus two recall days
    assert_eq!(cal.active_days(4), Some(9));
    assert_eq!(cal.format_active_days(4).as_deref(), Some("9 дней"));

    let victory_day = cal.day(4, 9).unwrap();
    assert_eq!(victory_day.state(), DayState::ScheduleUsed);
    assert_eq!(day_classes(&victory_day), ["schedule-used", HOLIDAY]);
    assert_eq!(day_classes(&cal.day(4, 16).unwrap()), [RECALL]);

    cal.set_year(2025);
    assert_eq!(cal.active_days(4), Some(0));
    assert_eq!(cal.format_active_days(4).as_deref(), Some("0 дней"));
}

#[test]
fn caller_flags_and_active_holiday() {
    let mut cal = YearCalendar::new(2024, Locale::english());
    {
        let status = cal.status_mut(7, 15).unwrap();
        status.state = DayState::Holiday;
        status.highlighted = true;
    }
    cal.status_mut(7, 16).unwrap().state = DayState::Planned;
    cal.status_mut(7, 16).unwrap().disabled = true;

    assert_eq!(
        day_classes(&cal.day(7, 15).unwrap()),
        [ACTIVE_HOLIDAY, "highlighted"]
    );
    assert_eq!(day_classes(&cal.day(7, 16).unwrap()), [PLANNED, "disabled"]);
    assert_eq!(cal.format_active_days(7).as_deref(), Some("2 days"));
}

#[test]
fn russian_legend() {
    let items = legend(&Locale::russian());
    let styles: Vec<&str> = items.iter().map(|i| i.style).collect();
    assert_eq!(
        styles,
        ["planned", "schedule-used", "off-schedule-used", "recall", "active-holiday"]
    );
    assert_eq!(items[0].text, "Запланированный отпуск");
}

#[test]
fn locale_from_config() {
    let json = r#"{
        "month_names": ["I", "II", "III", "IV", "V", "VI",
                        "VII", "VIII", "IX", "X", "XI", "XII"],
        "day_forms": ["dzień", "dni", "dni"],
        "legend": {
            "planned": "p", "schedule_used": "s", "off_schedule_used": "o",
            "recall": "r", "holiday": "h"
        }
    }"#;
    let locale: Locale = serde_json::from_str(json).unwrap();
    let cal = YearCalendar::with_locale(2024, locale).unwrap();
    assert_eq!(cal.month(8).unwrap().name(), "IX");
    assert_eq!(cal.format_active_days(8).as_deref(), Some("0 dni"));
}
