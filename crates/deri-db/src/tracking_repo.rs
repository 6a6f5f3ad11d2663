use chrono::Utc;
use deri_core::error::TrackingError;
use deri_core::tracking::TrackingStateRepository;
use deri_core::types::{
    CreateTrackingStateInput, IncidentId, StatusId, TrackingState, TrackingStateId,
};
use rusqlite::{Connection, params};

use crate::util::{DbError, column, timestamp_column, to_rfc3339};

pub struct TrackingRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> TrackingRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn storage(err: impl ToString) -> TrackingError {
    TrackingError::Storage {
        message: err.to_string(),
    }
}

fn from_db(err: DbError) -> TrackingError {
    match err {
        DbError::InvalidTimestamp { value } => TrackingError::InconsistentTimestamp { value },
        DbError::Column { .. } => TrackingError::InvalidInput {
            message: err.to_string(),
        },
    }
}

impl TrackingStateRepository for TrackingRepo<'_> {
    fn record(&self, input: CreateTrackingStateInput) -> Result<TrackingState, TrackingError> {
        let created_at = input.created_at.unwrap_or_else(Utc::now);
        let stamp = to_rfc3339(&created_at);
        self.conn
            .execute(
                "INSERT INTO security_incidenttrackingstate (created_at, updated_at, incident_id, status_id) VALUES (?1, ?1, ?2, ?3)",
                params![stamp, input.incident_id.get(), input.status_id.map(StatusId::get)],
            )
            .map_err(storage)?;
        Ok(TrackingState {
            id: TrackingStateId::new(self.conn.last_insert_rowid()),
            created_at,
            updated_at: created_at,
            incident_id: input.incident_id,
            status_id: input.status_id,
        })
    }

    fn list_by_incident(
        &self,
        incident_id: IncidentId,
    ) -> Result<Vec<TrackingState>, TrackingError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, created_at, updated_at, incident_id, status_id
                 FROM security_incidenttrackingstate
                 WHERE incident_id = ?1
                 ORDER BY created_at ASC, id ASC",
            )
            .map_err(storage)?;
        let mut rows = stmt.query([incident_id.get()]).map_err(storage)?;
        let mut states = Vec::new();
        while let Some(row) = rows.next().map_err(storage)? {
            states.push(map_tracking_row(row).map_err(from_db)?);
        }
        // Text order is only chronological when every row shares an offset.
        states.sort_by_key(|state| state.created_at);
        Ok(states)
    }
}

fn map_tracking_row(row: &rusqlite::Row<'_>) -> Result<TrackingState, DbError> {
    let status_id: Option<i64> = column(row, 4)?;
    Ok(TrackingState {
        id: TrackingStateId::new(column(row, 0)?),
        created_at: timestamp_column(row, 1)?,
        updated_at: timestamp_column(row, 2)?,
        incident_id: IncidentId::new(column(row, 3)?),
        status_id: status_id.map(StatusId::new),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::with_test_db;
    use chrono::TimeZone;

    fn insert_raw(conn: &Connection, incident: i64, status: Option<i64>, at: &str) {
        conn.execute(
            "INSERT INTO security_incidenttrackingstate (created_at, updated_at, incident_id, status_id) VALUES (?1, ?1, ?2, ?3)",
            params![at, incident, status],
        )
        .unwrap();
    }

    #[test]
    fn record_then_list_oldest_first() {
        let conn = with_test_db().unwrap();
        let repo = TrackingRepo::new(&conn);
        let incident_id = IncidentId::new(3);
        for (status, minute) in [(2, 30), (1, 0)] {
            repo.record(CreateTrackingStateInput {
                incident_id,
                status_id: Some(StatusId::new(status)),
                created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, minute, 0).unwrap()),
            })
            .unwrap();
        }

        let states = repo.list_by_incident(incident_id).unwrap();
        let statuses: Vec<Option<StatusId>> = states.iter().map(|s| s.status_id).collect();
        assert_eq!(statuses, vec![Some(StatusId::new(1)), Some(StatusId::new(2))]);
        assert!(repo.list_by_incident(IncidentId::new(4)).unwrap().is_empty());
    }

    #[test]
    fn mixed_offsets_are_ordered_by_instant() {
        let conn = with_test_db().unwrap();
        // 09:30-05:00 is 14:30Z, after 12:00Z even though it sorts first as text.
        insert_raw(&conn, 1, Some(2), "2024-01-01T09:30:00-05:00");
        insert_raw(&conn, 1, Some(1), "2024-01-01T12:00:00+00:00");

        let states = TrackingRepo::new(&conn)
            .list_by_incident(IncidentId::new(1))
            .unwrap();
        assert_eq!(states[0].status_id, Some(StatusId::new(1)));
        assert_eq!(
            states[1].created_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn keeps_rows_without_status() {
        let conn = with_test_db().unwrap();
        insert_raw(&conn, 1, None, "2024-01-01T12:00:00+00:00");
        let states = TrackingRepo::new(&conn)
            .list_by_incident(IncidentId::new(1))
            .unwrap();
        assert_eq!(states[0].status_id, None);
    }

    #[test]
    fn naive_row_is_an_inconsistent_timestamp() {
        let conn = with_test_db().unwrap();
        insert_raw(&conn, 1, Some(1), "2024-01-01 12:00:00");
        let err = TrackingRepo::new(&conn)
            .list_by_incident(IncidentId::new(1))
            .unwrap_err();
        assert!(matches!(
            err,
            TrackingError::InconsistentTimestamp { value } if value == "2024-01-01 12:00:00"
        ));
    }
}
