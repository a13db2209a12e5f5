//! Wall-clock timestamp parsing for mute windows and log entries.
//!
//! The bell server stores naive local datetimes and emits them in ISO-8601
//! without an offset. Form input may drop the seconds (`2024-12-24T18:00`).

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::ValidationError;

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp in any of the accepted ISO-8601 shapes.
///
/// Values carrying an offset keep their wall-clock reading and drop the offset.
pub fn parse_naive_datetime(input: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = input.trim();
    for format in ACCEPTED_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }
    Err(ValidationError::InvalidValue {
        field: "datetime".into(),
        message: format!("'{trimmed}' is not an ISO-8601 date and time"),
    })
}

/// Render a timestamp the way the server expects it.
pub fn to_wire(dt: &NaiveDateTime) -> String {
    dt.format(WIRE_FORMAT).to_string()
}

pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_wire(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_naive_datetime(&raw).map_err(serde::de::Error::custom)
}

/// Same as the parent module, for `Option<NaiveDateTime>` fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(dt: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&to_wire(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_naive_datetime(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_python_isoformat_with_micros() {
        let dt = parse_naive_datetime("2024-12-24T18:00:05.123456").unwrap();
        assert_eq!(dt.second(), 5);
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 12, 24).unwrap());
    }

    #[test]
    fn parses_minute_only_form_input() {
        let dt = parse_naive_datetime("2024-12-24T18:00").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (18, 0, 0));
    }

    #[test]
    fn offset_is_dropped_keeping_wall_clock() {
        let dt = parse_naive_datetime("2024-12-24T18:00:00-06:00").unwrap();
        assert_eq!(dt.hour(), 18);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_naive_datetime("tomorrow at noon").is_err());
    }

    #[test]
    fn wire_format_has_seconds_and_no_offset() {
        let dt = parse_naive_datetime("2024-01-02T03:04").unwrap();
        assert_eq!(to_wire(&dt), "2024-01-02T03:04:00");
    }
}
