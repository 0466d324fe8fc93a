//! Data formatting helpers.
//!
//! Provides quantity labelling for languages with a three-way plural
//! (one / few / many), as used by the active-day counters.

/// Grammatical number selected for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralForm {
    /// Counts ending in 1, except 11 (`1 день`, `21 день`).
    One,
    /// Counts ending in 2–4, except 12–14 (`2 дня`).
    Few,
    /// Everything else, including 11–19 (`5 дней`, `11 дней`).
    Many,
}

impl PluralForm {
    /// Position of this form in a `[one, few, many]` triple.
    pub fn index(self) -> usize {
        match self {
            PluralForm::One => 0,
            PluralForm::Few => 1,
            PluralForm::Many => 2,
        }
    }
}

/// Select the plural form for `n`.
///
/// With `h = |n| mod 100` and `t = h mod 10`: the teens `10 < h < 20` take
/// the many form, then `1 < t < 5` is few, `t == 1` is one, and anything
/// else is many.
pub fn plural_form(n: i64) -> PluralForm {
    let hundreds = n.unsigned_abs() % 100;
    let tens = hundreds % 10;
    if hundreds > 10 && hundreds < 20 {
        return PluralForm::Many;
    }
    if tens > 1 && tens < 5 {
        return PluralForm::Few;
    }
    if tens == 1 {
        return PluralForm::One;
    }
    PluralForm::Many
}

/// Pick the word from a `[one, few, many]` triple that agrees with `n`.
///
/// # Example
/// ```
/// use yc_core::decline;
/// let forms = ["день", "дня", "дней"];
/// assert_eq!(decline(21, &forms), "день");
/// assert_eq!(decline(3, &forms), "дня");
/// assert_eq!(decline(12, &forms), "дней");
/// ```
pub fn decline<S: AsRef<str>>(n: i64, forms: &[S; 3]) -> &str {
    forms[plural_form(n).index()].as_ref()
}
