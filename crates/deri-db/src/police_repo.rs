use deri_core::error::PoliceError;
use deri_core::police::PoliceRepository;
use deri_core::types::{CreatePoliceInput, Police, PoliceId, VectorId, ZoneId};
use rusqlite::{Connection, params};

use crate::util::{DbError, column, optional_timestamp_column, timestamp_column, to_rfc3339};

pub struct PoliceRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> PoliceRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn storage(err: impl ToString) -> PoliceError {
    PoliceError::Storage {
        message: err.to_string(),
    }
}

impl PoliceRepository for PoliceRepo<'_> {
    fn create(&self, input: CreatePoliceInput) -> Result<Police, PoliceError> {
        if input.grade.trim().is_empty() {
            return Err(PoliceError::InvalidInput {
                message: "grade must not be empty".to_string(),
            });
        }
        let now = to_rfc3339(&chrono::Utc::now());
        self.conn
            .execute(
                "INSERT INTO security_police (created_at, updated_at, grade, license_plate, vector_id, zone_id, is_supervisor, is_chief, is_sergeant, is_assignable, is_outside) VALUES (?1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    now,
                    input.grade,
                    input.license_plate,
                    input.vector_id.map(VectorId::get),
                    input.zone_id.map(ZoneId::get),
                    input.is_supervisor,
                    input.is_chief,
                    input.is_sergeant,
                    input.is_assignable,
                    input.is_outside,
                ],
            )
            .map_err(storage)?;
        let id = PoliceId::new(self.conn.last_insert_rowid());
        self.get(id)?.ok_or(PoliceError::NotFound)
    }

    fn get(&self, id: PoliceId) -> Result<Option<Police>, PoliceError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT p.id, p.created_at, p.updated_at, p.position_id, p.license_plate, p.point,
                        p.profile_id, p.status_id, p.supervisor_id, p.vector_id, p.is_outside,
                        p.armament_id, p.bulletprof_vest_id, p.device_id, p.is_supervisor,
                        p.radio_id, p.turn_id, p.vehicle_id, p.zone_id, z.name, p.status_staff_id,
                        p.is_chief, p.is_sergeant, p.grade, p.grouping_id, p.is_assignable,
                        p.special_group_police_id, p.last_tracking_location
                 FROM security_police p
                 LEFT JOIN security_zone z ON z.id = p.zone_id
                 WHERE p.id = ?1",
            )
            .map_err(storage)?;
        let mut rows = stmt.query([id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_police_row(row)
            .map(Some)
            .map_err(|err| PoliceError::InvalidInput {
                message: err.to_string(),
            })
    }
}

fn map_police_row(row: &rusqlite::Row<'_>) -> Result<Police, DbError> {
    let vector_id: Option<i64> = column(row, 9)?;
    let zone_id: Option<i64> = column(row, 18)?;
    Ok(Police {
        id: PoliceId::new(column(row, 0)?),
        created_at: timestamp_column(row, 1)?,
        updated_at: timestamp_column(row, 2)?,
        position_id: column(row, 3)?,
        license_plate: column(row, 4)?,
        point: column(row, 5)?,
        profile_id: column(row, 6)?,
        status_id: column(row, 7)?,
        supervisor_id: column(row, 8)?,
        vector_id: vector_id.map(VectorId::new),
        is_outside: column(row, 10)?,
        armament_id: column(row, 11)?,
        bulletprof_vest_id: column(row, 12)?,
        device_id: column(row, 13)?,
        is_supervisor: column(row, 14)?,
        radio_id: column(row, 15)?,
        turn_id: column(row, 16)?,
        vehicle_id: column(row, 17)?,
        zone_id: zone_id.map(ZoneId::new),
        zone_name: column(row, 19)?,
        status_staff_id: column(row, 20)?,
        is_chief: column(row, 21)?,
        is_sergeant: column(row, 22)?,
        grade: column(row, 23)?,
        grouping_id: column(row, 24)?,
        is_assignable: column(row, 25)?,
        special_group_police_id: column(row, 26)?,
        last_tracking_location: optional_timestamp_column(row, 27)?,
    })
}
