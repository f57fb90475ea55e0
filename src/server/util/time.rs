use chrono::NaiveDate;

/// Formats a date the way it appears in outbound emails, e.g. `1 May 2026`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
