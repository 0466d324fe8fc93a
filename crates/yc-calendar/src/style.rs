//! Presentation tokens.
//!
//! Each [`DayState`] maps to exactly one style token; the holiday/weekend,
//! disabled and highlighted flags add independent tokens. How tokens are
//! rendered is up to the UI.

use crate::day::{CalendarDay, DayState};
use crate::locale::Locale;
use serde::Serialize;

/// Token for a planned vacation day.
pub const PLANNED: &str = "planned";
/// Token for a day used according to the schedule.
pub const SCHEDULE_USED: &str = "schedule-used";
/// Token for a day used outside the schedule.
pub const OFF_SCHEDULE_USED: &str = "off-schedule-used";
/// Token for a recall day.
pub const RECALL: &str = "recall";
/// Token for a holiday taken as leave.
pub const ACTIVE_HOLIDAY: &str = "active-holiday";
/// Token for official holidays and weekend-type days.
pub const HOLIDAY: &str = "holiday";
/// Token for disabled cells.
pub const DISABLED: &str = "disabled";
/// Token for highlighted cells.
pub const HIGHLIGHTED: &str = "highlighted";

/// Style token of a state; empty for [`DayState::None`].
pub fn state_token(state: DayState) -> &'static str {
    match state {
        DayState::None => "",
        DayState::Planned => PLANNED,
        DayState::ScheduleUsed => SCHEDULE_USED,
        DayState::OffScheduleUsed => OFF_SCHEDULE_USED,
        DayState::Recall => RECALL,
        DayState::Holiday => ACTIVE_HOLIDAY,
    }
}

/// All non-empty tokens that apply to `day`, state token first.
pub fn day_classes(day: &CalendarDay<'_>) -> Vec<&'static str> {
    let flags = [
        (day.holiday() || day.weekend(), HOLIDAY),
        (day.disabled(), DISABLED),
        (day.highlighted(), HIGHLIGHTED),
    ];
    std::iter::once(state_token(day.state()))
        .filter(|t| !t.is_empty())
        .chain(flags.into_iter().filter_map(|(on, t)| on.then_some(t)))
        .collect()
}

/// One legend entry: a caption and the token it explains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendItem {
    /// Localized caption.
    pub text: String,
    /// Style token.
    pub style: &'static str,
}

/// Legend entries for every state except `None`, in a fixed order.
pub fn legend(locale: &Locale) -> Vec<LegendItem> {
    let texts = &locale.legend;
    [
        (&texts.planned, DayState::Planned),
        (&texts.schedule_used, DayState::ScheduleUsed),
        (&texts.off_schedule_used, DayState::OffScheduleUsed),
        (&texts.recall, DayState::Recall),
        (&texts.holiday, DayState::Holiday),
    ]
    .into_iter()
    .map(|(text, state)| LegendItem {
        text: text.clone(),
        style: state_token(state),
    })
    .collect()
}
