use chrono::{DateTime, NaiveDate};

/// Rendering used for every date that leaves the service, e.g. `Mon Jan 01 2024`.
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %d %Y";

const DATE_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", DATE_DISPLAY_FORMAT];

/// Returns the trimmed value, or `None` when it is absent or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a caller-supplied calendar date.
///
/// Accepts `YYYY-MM-DD`, US-style `MM/DD/YYYY`, RFC 3339 timestamps (the date
/// part is kept) and the display format produced by [`format_date`].
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Parse an exercise duration. Only finite numbers are accepted; the minimum is
/// checked separately so the caller can report it distinctly.
pub fn parse_duration(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|duration| duration.is_finite())
}

/// Parse a log `limit`. Zero is valid and means unlimited.
pub fn parse_limit(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|limit| *limit >= 0)
}
