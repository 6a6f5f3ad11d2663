use chrono::{DateTime, Utc};
use deri_core::analysis::timestamps;
use rusqlite::types::FromSql;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("column {index}: {message}")]
    Column { index: usize, message: String },
    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

pub fn to_rfc3339(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

/// Reads a stored timestamp. Rows written by this service are RFC 3339, rows
/// imported from Postgres may use its `timestamptz` text form; both must
/// carry an offset.
pub fn from_rfc3339(value: &str) -> Result<DateTime<Utc>, DbError> {
    timestamps::normalize(value).map_err(|_| DbError::InvalidTimestamp {
        value: value.to_string(),
    })
}

pub fn column<T: FromSql>(row: &rusqlite::Row<'_>, index: usize) -> Result<T, DbError> {
    row.get(index).map_err(|err| DbError::Column {
        index,
        message: err.to_string(),
    })
}

pub fn timestamp_column(row: &rusqlite::Row<'_>, index: usize) -> Result<DateTime<Utc>, DbError> {
    let raw: String = column(row, index)?;
    from_rfc3339(&raw)
}

pub fn optional_timestamp_column(
    row: &rusqlite::Row<'_>,
    index: usize,
) -> Result<Option<DateTime<Utc>>, DbError> {
    let raw: Option<String> = column(row, index)?;
    raw.as_deref().map(from_rfc3339).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn round_trips_through_text() {
        let at = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
        assert_eq!(from_rfc3339(&to_rfc3339(&at)).unwrap(), at);
    }

    #[test]
    fn rejects_naive_text() {
        assert!(matches!(
            from_rfc3339("2024-02-29 23:59:59"),
            Err(DbError::InvalidTimestamp { .. })
        ));
    }
}
