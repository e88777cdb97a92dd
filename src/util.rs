//! Utility functions for folio

use chrono::NaiveDate;

/// Joins start and end dates with an em dash, as shown on cards.
pub fn date_range(start: &str, end: &str) -> String {
    format!("{} \u{2014} {}", start, end)
}

/// Formats a post date as `March 1, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a post date as ISO `YYYY-MM-DD` for `datetime` attributes.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
