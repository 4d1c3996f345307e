use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, SubsecRound, Utc};

/// The one textual rendering used for every timestamp leaving the service.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %I:%M %p",
];

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%a, %d %b %Y",
    "%Y%m%d",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not parse `{input}` as a date")]
pub struct NormalizationError {
    input: String,
}

impl NormalizationError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Parses free-form date text into a second-precision timestamp.
///
/// Accepts RFC 3339 / RFC 2822 strings, the usual numeric and month-name
/// layouts with or without a time part, `@<unix seconds>`, and the keywords
/// `now`, `today`, `tomorrow`, `yesterday`. Offsets are converted to UTC.
pub fn normalize(input: &str) -> Result<NaiveDateTime, NormalizationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(NormalizationError::new(input));
    }

    parse(value)
        .map(|parsed| parsed.trunc_subsecs(0))
        .ok_or_else(|| NormalizationError::new(input))
}

fn parse(value: &str) -> Option<NaiveDateTime> {
    if let Some(parsed) = parse_keyword(value) {
        return Some(parsed);
    }

    if let Some(seconds) = value.strip_prefix('@') {
        return seconds
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .map(|parsed| parsed.naive_utc());
    }

    if let Ok(parsed) = DateTime::<FixedOffset>::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    if let Ok(parsed) = DateTime::<FixedOffset>::parse_from_rfc2822(value) {
        return Some(parsed.naive_utc());
    }

    ZONED_FORMATS
        .iter()
        .find_map(|format| DateTime::<FixedOffset>::parse_from_str(value, format).ok())
        .map(|parsed| parsed.naive_utc())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn parse_keyword(value: &str) -> Option<NaiveDateTime> {
    let now = Utc::now().naive_utc();
    let midnight = now.date().and_hms_opt(0, 0, 0)?;

    match value.to_ascii_lowercase().as_str() {
        "now" => Some(now),
        "today" | "midnight" => Some(midnight),
        "tomorrow" => Some(midnight + Duration::days(1)),
        "yesterday" => Some(midnight - Duration::days(1)),
        _ => None,
    }
}

pub fn render(value: &NaiveDateTime) -> String {
    value.format(CANONICAL_FORMAT).to_string()
}

/// Serde adapter for nullable timestamp columns: canonical string out,
/// anything [`normalize`] understands in.
pub mod canonical {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&super::render(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::normalize(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
