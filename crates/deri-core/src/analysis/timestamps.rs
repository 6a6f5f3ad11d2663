use crate::error::AnalysisError;
use chrono::{DateTime, Utc};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Parses a timestamp that carries a UTC offset and converts it to UTC.
///
/// Accepts RFC 3339 as well as the `YYYY-MM-DD HH:MM:SS[.f]+HH[:MM]` text that
/// Postgres emits for `timestamptz`. A timestamp without an offset cannot be
/// placed on the same timeline as the others and is rejected.
pub fn normalize(value: &str) -> Result<DateTime<Utc>, AnalysisError> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }
    Err(AnalysisError::TimestampConsistency {
        value: value.to_string(),
    })
}
