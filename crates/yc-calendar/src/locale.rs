//! Localized text used by the grid: month titles, the unit word for
//! active-day counters and legend captions.
//!
//! A [`Locale`] is plain configuration. It derives serde so callers can load
//! it from whatever format their application uses; call
//! [`Locale::validate`] after loading.

use serde::{Deserialize, Serialize};
use yc_core::errors::Result;
use yc_core::{decline, ensure};
use yc_time::Month;

/// Captions for the legend, one per non-`None` day state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendTexts {
    /// Caption for planned vacation days.
    pub planned: String,
    /// Caption for days used according to the schedule.
    pub schedule_used: String,
    /// Caption for days used outside the schedule.
    pub off_schedule_used: String,
    /// Caption for recall days.
    pub recall: String,
    /// Caption for holidays taken as leave.
    pub holiday: String,
}

/// Month titles, plural unit forms and legend captions for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Month titles, January first.
    pub month_names: [String; 12],
    /// Unit word for day counts in `[one, few, many]` order.
    pub day_forms: [String; 3],
    /// Legend captions.
    pub legend: LegendTexts,
}

impl Locale {
    /// Russian titles and the `день` / `дня` / `дней` declension.
    pub fn russian() -> Self {
        Self {
            month_names: [
                "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август",
                "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
            ]
            .map(String::from),
            day_forms: ["день", "дня", "дней"].map(String::from),
            legend: LegendTexts {
                planned: "Запланированный отпуск".into(),
                schedule_used: "Отпуск по графику".into(),
                off_schedule_used: "Отпуск вне графика".into(),
                recall: "Отзыв из отпуска".into(),
                holiday: "Праздничный день".into(),
            },
        }
    }

    /// English titles. English has only two forms, so few and many coincide.
    pub fn english() -> Self {
        Self {
            month_names: Month::ALL.map(|m| m.long_name().to_owned()),
            day_forms: ["day", "days", "days"].map(String::from),
            legend: LegendTexts {
                planned: "Planned vacation".into(),
                schedule_used: "Used on schedule".into(),
                off_schedule_used: "Used off schedule".into(),
                recall: "Recalled from vacation".into(),
                holiday: "Holiday".into(),
            },
        }
    }

    /// Check that no title, form or caption is blank.
    pub fn validate(&self) -> Result<()> {
        for (month, name) in Month::ALL.iter().zip(&self.month_names) {
            ensure!(!name.trim().is_empty(), "empty title for {month}");
        }
        for form in &self.day_forms {
            ensure!(!form.trim().is_empty(), "empty plural form in {:?}", self.day_forms);
        }
        let legend = &self.legend;
        for caption in [
            &legend.planned,
            &legend.schedule_used,
            &legend.off_schedule_used,
            &legend.recall,
            &legend.holiday,
        ] {
            ensure!(!caption.trim().is_empty(), "empty legend caption");
        }
        Ok(())
    }

    /// Title of `month`.
    pub fn month_name(&self, month: Month) -> &str {
        &self.month_names[month.index()]
    }

    /// Unit word agreeing with `count`.
    pub fn days_unit(&self, count: usize) -> &str {
        decline(count as i64, &self.day_forms)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::russian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yc_core::Error;

    #[test]
    fn builtin_locales_are_valid() {
        assert_eq!(Locale::russian().validate(), Ok(()));
        assert_eq!(Locale::english().validate(), Ok(()));
    }

    #[test]
    fn month_names() {
        let ru = Locale::russian();
        assert_eq!(ru.month_name(Month::January), "Январь");
        assert_eq!(ru.month_name(Month::December), "Декабрь");
        assert_eq!(Locale::english().month_name(Month::May), "May");
    }

    #[test]
    fn blank_entries_are_rejected() {
        let mut locale = Locale::english();
        locale.month_names[3] = "  ".into();
        assert_eq!(
            locale.validate(),
            Err(Error::Precondition("empty title for April".into()))
        );

        let mut locale = Locale::english();
        locale.legend.recall.clear();
        assert!(locale.validate().is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let json = serde_json::to_string(&Locale::english()).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::english());
    }

    #[test]
    fn russian_day_units() {
        let ru = Locale::russian();
        assert_eq!(ru.days_unit(1), "день");
        assert_eq!(ru.days_unit(3), "дня");
        assert_eq!(ru.days_unit(11), "дней");
        assert_eq!(ru.days_unit(21), "день");
    }
}
