use chrono::{Datelike, NaiveDate};

/// Placeholder rendered in place of an absent date.
pub const DATE_PLACEHOLDER: &str = "—";

// Month names in the genitive case, as they appear after a day number.
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Render a date in the long localized form used across the site, e.g.
/// "1 декабря 2024 г.".
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} г.",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Render an optional date in the long localized form; an absent date renders
/// as the placeholder dash.
pub fn long_date_or_dash(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => long_date(date),
        None => DATE_PLACEHOLDER.to_string(),
    }
}
