use deri_core::catalog::CatalogRepository;
use deri_core::error::CatalogError;
use deri_core::types::{
    CreateIncidentTypeInput, CreateStatusInput, CreateVectorInput, CreateZoneInput, IncidentType,
    IncidentTypeId, StatusId, StatusIncident, Vector, VectorId, Zone, ZoneId,
};
use rusqlite::{Connection, params};

use crate::util::{DbError, column, timestamp_column, to_rfc3339};

const ZONE_COLUMNS: &str = "id, created_at, updated_at, sku, name, poly, status_id, description, vector_final, vector_initial, zone_type";
const VECTOR_COLUMNS: &str =
    "id, created_at, updated_at, sku, name, poly, status_id, zone_id, description";

pub struct CatalogRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> CatalogRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn storage(err: impl ToString) -> CatalogError {
    CatalogError::Storage {
        message: err.to_string(),
    }
}

fn invalid(err: &DbError) -> CatalogError {
    CatalogError::InvalidInput {
        message: err.to_string(),
    }
}

impl CatalogRepository for CatalogRepo<'_> {
    fn create_status(&self, input: CreateStatusInput) -> Result<StatusIncident, CatalogError> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::InvalidInput {
                message: "status name must not be empty".to_string(),
            });
        }
        self.conn
            .execute(
                "INSERT INTO security_statusincident (name, slug) VALUES (?1, ?2)",
                params![input.name, input.slug],
            )
            .map_err(storage)?;
        Ok(StatusIncident {
            id: StatusId::new(self.conn.last_insert_rowid()),
            name: input.name,
            slug: input.slug,
        })
    }

    fn statuses(&self) -> Result<Vec<StatusIncident>, CatalogError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, slug FROM security_statusincident ORDER BY id ASC")
            .map_err(storage)?;
        let mut rows = stmt.query([]).map_err(storage)?;
        let mut statuses = Vec::new();
        while let Some(row) = rows.next().map_err(storage)? {
            statuses.push(StatusIncident {
                id: StatusId::new(column(row, 0).map_err(|err| invalid(&err))?),
                name: column(row, 1).map_err(|err| invalid(&err))?,
                slug: column(row, 2).map_err(|err| invalid(&err))?,
            });
        }
        Ok(statuses)
    }

    fn create_zone(&self, input: CreateZoneInput) -> Result<Zone, CatalogError> {
        let now = to_rfc3339(&chrono::Utc::now());
        self.conn
            .execute(
                "INSERT INTO security_zone (created_at, updated_at, sku, name, poly, status_id, description, vector_final, vector_initial, zone_type) VALUES (?1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    now,
                    input.sku,
                    input.name,
                    input.poly,
                    input.status_id,
                    input.description,
                    input.vector_final,
                    input.vector_initial,
                    input.zone_type,
                ],
            )
            .map_err(storage)?;
        let id = ZoneId::new(self.conn.last_insert_rowid());
        self.zone(id)?.ok_or(CatalogError::ZoneNotFound)
    }

    fn zone(&self, id: ZoneId) -> Result<Option<Zone>, CatalogError> {
        let sql = format!("SELECT {ZONE_COLUMNS} FROM security_zone WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_zone_row(row).map(Some).map_err(|err| invalid(&err))
    }

    fn create_vector(&self, input: CreateVectorInput) -> Result<Vector, CatalogError> {
        let now = to_rfc3339(&chrono::Utc::now());
        self.conn
            .execute(
                "INSERT INTO security_vector (created_at, updated_at, sku, name, poly, status_id, zone_id, description) VALUES (?1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    now,
                    input.sku,
                    input.name,
                    input.poly,
                    input.status_id,
                    input.zone_id.map(ZoneId::get),
                    input.description,
                ],
            )
            .map_err(storage)?;
        let id = VectorId::new(self.conn.last_insert_rowid());
        self.vector(id)?.ok_or(CatalogError::VectorNotFound)
    }

    fn vector(&self, id: VectorId) -> Result<Option<Vector>, CatalogError> {
        let sql = format!("SELECT {VECTOR_COLUMNS} FROM security_vector WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_vector_row(row).map(Some).map_err(|err| invalid(&err))
    }

    fn create_incident_type(
        &self,
        input: CreateIncidentTypeInput,
    ) -> Result<IncidentType, CatalogError> {
        self.conn
            .execute(
                "INSERT INTO security_incidenttype (sku, name, slug, level, active) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![input.sku, input.name, input.slug, input.level, input.active],
            )
            .map_err(storage)?;
        Ok(IncidentType {
            id: IncidentTypeId::new(self.conn.last_insert_rowid()),
            sku: input.sku,
            name: input.name,
            slug: input.slug,
            level: input.level,
            active: input.active,
        })
    }

    fn incident_types(&self) -> Result<Vec<IncidentType>, CatalogError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, sku, name, slug, level, active FROM security_incidenttype ORDER BY id ASC",
            )
            .map_err(storage)?;
        let mut rows = stmt.query([]).map_err(storage)?;
        let mut types = Vec::new();
        while let Some(row) = rows.next().map_err(storage)? {
            types.push(map_incident_type_row(row).map_err(|err| invalid(&err))?);
        }
        Ok(types)
    }
}

fn map_zone_row(row: &rusqlite::Row<'_>) -> Result<Zone, DbError> {
    Ok(Zone {
        id: ZoneId::new(column(row, 0)?),
        created_at: timestamp_column(row, 1)?,
        updated_at: timestamp_column(row, 2)?,
        sku: column(row, 3)?,
        name: column(row, 4)?,
        poly: column(row, 5)?,
        status_id: column(row, 6)?,
        description: column(row, 7)?,
        vector_final: column(row, 8)?,
        vector_initial: column(row, 9)?,
        zone_type: column(row, 10)?,
    })
}

fn map_vector_row(row: &rusqlite::Row<'_>) -> Result<Vector, DbError> {
    let zone_id: Option<i64> = column(row, 7)?;
    Ok(Vector {
        id: VectorId::new(column(row, 0)?),
        created_at: timestamp_column(row, 1)?,
        updated_at: timestamp_column(row, 2)?,
        sku: column(row, 3)?,
        name: column(row, 4)?,
        poly: column(row, 5)?,
        status_id: column(row, 6)?,
        zone_id: zone_id.map(ZoneId::new),
        description: column(row, 8)?,
    })
}

fn map_incident_type_row(row: &rusqlite::Row<'_>) -> Result<IncidentType, DbError> {
    Ok(IncidentType {
        id: IncidentTypeId::new(column(row, 0)?),
        sku: column(row, 1)?,
        name: column(row, 2)?,
        slug: column(row, 3)?,
        level: column(row, 4)?,
        active: column(row, 5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::with_test_db;

    #[test]
    fn statuses_come_back_in_id_order() {
        let conn = with_test_db().unwrap();
        let repo = CatalogRepo::new(&conn);
        repo.create_status(CreateStatusInput {
            name: "Abierto".to_string(),
            slug: Some("abierto".to_string()),
        })
        .unwrap();
        repo.create_status(CreateStatusInput {
            name: "Cerrado".to_string(),
            slug: None,
        })
        .unwrap();

        let statuses = repo.statuses().unwrap();
        let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Abierto", "Cerrado"]);
        assert_eq!(statuses[0].id, StatusId::new(1));
    }

    #[test]
    fn blank_status_name_is_rejected() {
        let conn = with_test_db().unwrap();
        let repo = CatalogRepo::new(&conn);
        let err = repo
            .create_status(CreateStatusInput {
                name: "  ".to_string(),
                slug: None,
            })
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput { .. }));
    }

    #[test]
    fn zones_and_vectors_round_trip() {
        let conn = with_test_db().unwrap();
        let repo = CatalogRepo::new(&conn);
        let zone = repo
            .create_zone(CreateZoneInput {
                name: Some("Centro".to_string()),
                vector_initial: 1,
                vector_final: 4,
                zone_type: 2,
                ..CreateZoneInput::default()
            })
            .unwrap();
        let vector = repo
            .create_vector(CreateVectorInput {
                name: Some("V-1".to_string()),
                zone_id: Some(zone.id),
                ..CreateVectorInput::default()
            })
            .unwrap();

        assert_eq!(repo.zone(zone.id).unwrap(), Some(zone.clone()));
        assert_eq!(repo.vector(vector.id).unwrap().unwrap().zone_id, Some(zone.id));
        assert_eq!(repo.zone(ZoneId::new(99)).unwrap(), None);
        assert_eq!(repo.vector(VectorId::new(99)).unwrap(), None);
    }

    #[test]
    fn incident_types_are_listed() {
        let conn = with_test_db().unwrap();
        let repo = CatalogRepo::new(&conn);
        let created = repo
            .create_incident_type(CreateIncidentTypeInput {
                sku: None,
                name: "Robo".to_string(),
                slug: Some("robo".to_string()),
                level: "alto".to_string(),
                active: true,
            })
            .unwrap();
        assert_eq!(repo.incident_types().unwrap(), vec![created]);
    }
}
