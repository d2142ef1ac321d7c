//! Lenient timestamp parsing for the raw catalog documents.
//!
//! Accepts RFC 3339 (`2025-01-01T09:30:00.000Z`), a timestamp without offset
//! (`2025-01-01T09:30:00`, read as UTC) or a bare date (`2025-01-01`, midnight UTC).

use serde::{de, Deserialize, Deserializer};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();

    if let Ok(dt) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(dt);
    }

    let naive_formats = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    for format in naive_formats {
        if let Ok(dt) = PrimitiveDateTime::parse(value, format) {
            return Some(dt.assume_utc());
        }
    }

    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
}

/// Like [`deserialize`], but `null` and `""` become `None`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`"))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::parse_timestamp;

    #[test]
    fn parses_supported_forms() {
        assert_eq!(
            parse_timestamp("2025-01-01T09:30:00.000Z"),
            Some(datetime!(2025-01-01 09:30 UTC))
        );
        assert_eq!(
            parse_timestamp("2025-01-01T09:30:00+02:00"),
            Some(datetime!(2025-01-01 09:30 +2))
        );
        assert_eq!(
            parse_timestamp("2025-01-01T09:30:00"),
            Some(datetime!(2025-01-01 09:30 UTC))
        );
        assert_eq!(
            parse_timestamp("2025-01-01"),
            Some(datetime!(2025-01-01 00:00 UTC))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("next tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
