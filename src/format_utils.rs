use crate::categories::NOT_FOUND_LABEL;
use chrono::{DateTime, NaiveDate};

/// Display helpers for listing tables
pub struct FormatUtils;

impl FormatUtils {
    /// Cut text to `max_chars` characters, marking the cut with `...`
    pub fn shorten(text: &str, max_chars: usize) -> String {
        if max_chars == 0 {
            return String::new();
        }
        if text.chars().count() <= max_chars {
            return text.to_string();
        }

        let mut shortened: String = text.chars().take(max_chars).collect();
        shortened.push_str("...");
        shortened
    }

    /// Render an RFC 3339 timestamp or a `YYYY-MM-DD` date as `DD Mon YYYY`
    pub fn format_date(raw: &str) -> String {
        let raw = raw.trim();

        let date = DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

        match date {
            Ok(date) => date.format("%d %b %Y").to_string(),
            Err(e) => {
                log::debug!("format: cannot parse date '{raw}': {e}");
                NOT_FOUND_LABEL.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Gold ring", 20, "Gold ring")]
    #[case("Gold ring", 4, "Gold...")]
    #[case("Złoty pierścionek", 5, "Złoty...")]
    #[case("anything", 0, "")]
    #[case("", 3, "")]
    fn shortens_by_chars(#[case] text: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(FormatUtils::shorten(text, max), expected);
    }

    #[rstest]
    #[case("2024-03-05T10:15:00Z", "05 Mar 2024")]
    #[case("2024-03-05T23:30:00-02:00", "05 Mar 2024")]
    #[case("2023-12-31", "31 Dec 2023")]
    #[case("yesterday", "N/A")]
    #[case("", "N/A")]
    fn formats_dates(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(FormatUtils::format_date(raw), expected);
    }
}
