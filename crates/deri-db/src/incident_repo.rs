use chrono::Utc;
use deri_core::error::IncidentError;
use deri_core::incidents::IncidentRepository;
use deri_core::types::{
    CreateIncidentInput, Incident, IncidentId, IncidentTypeId, PoliceId, StatusId, VectorId,
    ZoneId,
};
use rusqlite::{Connection, params};

use crate::util::{DbError, column, optional_timestamp_column, timestamp_column, to_rfc3339};

const INCIDENT_COLUMNS: &str = "id, created_at, updated_at, sku, citizen_affected, location, address, description, assigned_at, report, assigned_by_id, citizen_id, monitor_id, police_id, status_id, is_open, is_verified, incident_type_id, vector_id, zone_id, is_affected, is_rated, is_police_arrived, is_police_confirm, is_possible_duplicate, is_read, is_monitor_open, is_from_call, atention_time, social_proximity_id";

pub struct IncidentRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> IncidentRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn query(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Incident>, IncidentError> {
        let mut stmt = self.conn.prepare(sql).map_err(storage)?;
        let mut rows = stmt.query(params).map_err(storage)?;
        let mut incidents = Vec::new();
        while let Some(row) = rows.next().map_err(storage)? {
            incidents.push(map_incident_row(row).map_err(|err| invalid(&err))?);
        }
        Ok(incidents)
    }
}

fn storage(err: impl ToString) -> IncidentError {
    IncidentError::Storage {
        message: err.to_string(),
    }
}

fn invalid(err: &DbError) -> IncidentError {
    IncidentError::InvalidInput {
        message: err.to_string(),
    }
}

impl IncidentRepository for IncidentRepo<'_> {
    fn create(&self, input: CreateIncidentInput) -> Result<Incident, IncidentError> {
        let created_at = input.created_at.unwrap_or_else(Utc::now);
        self.conn
            .execute(
                "INSERT INTO security_incident (created_at, updated_at, police_id, status_id, incident_type_id, vector_id, zone_id, description, address, assigned_at, atention_time, is_open) VALUES (?1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    to_rfc3339(&created_at),
                    input.police_id.map(PoliceId::get),
                    input.status_id.map(StatusId::get),
                    input.incident_type_id.map(IncidentTypeId::get),
                    input.vector_id.map(VectorId::get),
                    input.zone_id.map(ZoneId::get),
                    input.description,
                    input.address,
                    input.assigned_at.as_ref().map(to_rfc3339),
                    input.attention_time,
                    input.is_open,
                ],
            )
            .map_err(storage)?;
        let id = IncidentId::new(self.conn.last_insert_rowid());
        self.get(id)?.ok_or(IncidentError::NotFound)
    }

    fn get(&self, id: IncidentId) -> Result<Option<Incident>, IncidentError> {
        let sql = format!("SELECT {INCIDENT_COLUMNS} FROM security_incident WHERE id = ?1");
        Ok(self.query(&sql, &[&id.get()])?.into_iter().next())
    }

    fn list_by_police(
        &self,
        police_id: PoliceId,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Incident>, IncidentError> {
        let sql = format!(
            "SELECT {INCIDENT_COLUMNS} FROM security_incident WHERE police_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3"
        );
        self.query(&sql, &[&police_id.get(), &limit, &offset])
    }

    fn all_by_police(&self, police_id: PoliceId) -> Result<Vec<Incident>, IncidentError> {
        let sql = format!(
            "SELECT {INCIDENT_COLUMNS} FROM security_incident WHERE police_id = ?1 ORDER BY id ASC"
        );
        self.query(&sql, &[&police_id.get()])
    }
}

fn map_incident_row(row: &rusqlite::Row<'_>) -> Result<Incident, DbError> {
    let police_id: Option<i64> = column(row, 13)?;
    let status_id: Option<i64> = column(row, 14)?;
    let incident_type_id: Option<i64> = column(row, 17)?;
    let vector_id: Option<i64> = column(row, 18)?;
    let zone_id: Option<i64> = column(row, 19)?;
    Ok(Incident {
        id: IncidentId::new(column(row, 0)?),
        created_at: timestamp_column(row, 1)?,
        updated_at: timestamp_column(row, 2)?,
        sku: column(row, 3)?,
        citizen_affected: column(row, 4)?,
        location: column(row, 5)?,
        address: column(row, 6)?,
        description: column(row, 7)?,
        assigned_at: optional_timestamp_column(row, 8)?,
        report: column(row, 9)?,
        assigned_by_id: column(row, 10)?,
        citizen_id: column(row, 11)?,
        monitor_id: column(row, 12)?,
        police_id: police_id.map(PoliceId::new),
        status_id: status_id.map(StatusId::new),
        is_open: column(row, 15)?,
        is_verified: column(row, 16)?,
        incident_type_id: incident_type_id.map(IncidentTypeId::new),
        vector_id: vector_id.map(VectorId::new),
        zone_id: zone_id.map(ZoneId::new),
        is_affected: column(row, 20)?,
        is_rated: column(row, 21)?,
        is_police_arrived: column(row, 22)?,
        is_police_confirm: column(row, 23)?,
        is_possible_duplicate: column(row, 24)?,
        is_read: column(row, 25)?,
        is_monitor_open: column(row, 26)?,
        is_from_call: column(row, 27)?,
        attention_time: column(row, 28)?,
        social_proximity_id: column(row, 29)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::police_repo::PoliceRepo;
    use crate::schema::with_test_db;
    use chrono::TimeZone;
    use deri_core::police::PoliceRepository;
    use deri_core::types::CreatePoliceInput;

    fn officer(conn: &Connection) -> PoliceId {
        PoliceRepo::new(conn)
            .create(CreatePoliceInput {
                grade: "Cabo".to_string(),
                ..CreatePoliceInput::default()
            })
            .unwrap()
            .id
    }

    fn incident(police_id: PoliceId, minute: u32, attention: &str) -> CreateIncidentInput {
        CreateIncidentInput {
            police_id: Some(police_id),
            attention_time: attention.to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, minute, 0).unwrap()),
            ..CreateIncidentInput::default()
        }
    }

    #[test]
    fn create_then_get_keeps_attention_time() {
        let conn = with_test_db().unwrap();
        let police_id = officer(&conn);
        let repo = IncidentRepo::new(&conn);
        let created = repo.create(incident(police_id, 0, "00:12:30")).unwrap();

        let fetched = repo.get(created.id).unwrap().unwrap();
        assert_eq!(fetched.attention_time, "00:12:30");
        assert_eq!(fetched.police_id, Some(police_id));
        assert_eq!(
            fetched.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(repo.get(IncidentId::new(404)).unwrap(), None);
    }

    #[test]
    fn list_by_police_is_newest_first_and_paged() {
        let conn = with_test_db().unwrap();
        let police_id = officer(&conn);
        let other = officer(&conn);
        let repo = IncidentRepo::new(&conn);
        for minute in [5, 1, 9] {
            repo.create(incident(police_id, minute, "00:01:00")).unwrap();
        }
        repo.create(incident(other, 30, "00:01:00")).unwrap();

        let page = repo.list_by_police(police_id, 2, 0).unwrap();
        let minutes: Vec<String> = page
            .iter()
            .map(|i| i.created_at.format("%M").to_string())
            .collect();
        assert_eq!(minutes, vec!["09", "05"]);

        let rest = repo.list_by_police(police_id, 2, 2).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].created_at.format("%M").to_string(), "01");

        assert_eq!(repo.all_by_police(police_id).unwrap().len(), 3);
        assert!(repo.all_by_police(PoliceId::new(99)).unwrap().is_empty());
    }

    #[test]
    fn naive_stored_timestamp_is_reported() {
        let conn = with_test_db().unwrap();
        conn.execute(
            "INSERT INTO security_incident (created_at, updated_at, atention_time) VALUES ('2024-05-01 10:00:00', '2024-05-01 10:00:00', '00:00:01')",
            [],
        )
        .unwrap();
        let err = IncidentRepo::new(&conn).get(IncidentId::new(1)).unwrap_err();
        assert!(matches!(err, IncidentError::InvalidInput { .. }));
    }
}
