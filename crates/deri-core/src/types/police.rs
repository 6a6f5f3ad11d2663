use crate::types::ids::{PoliceId, VectorId, ZoneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An officer record. `zone_name` is joined from the officer's zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Police {
    pub id: PoliceId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub position_id: Option<i64>,
    pub license_plate: Option<String>,
    pub point: Option<String>,
    pub profile_id: Option<i64>,
    pub status_id: Option<i64>,
    pub supervisor_id: Option<i64>,
    pub vector_id: Option<VectorId>,
    pub is_outside: bool,
    pub armament_id: Option<i64>,
    pub bulletprof_vest_id: Option<i64>,
    pub device_id: Option<i64>,
    pub is_supervisor: bool,
    pub radio_id: Option<i64>,
    pub turn_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub zone_id: Option<ZoneId>,
    pub zone_name: Option<String>,
    pub status_staff_id: Option<i64>,
    pub is_chief: bool,
    pub is_sergeant: bool,
    pub grade: String,
    pub grouping_id: Option<i64>,
    pub is_assignable: bool,
    pub special_group_police_id: Option<i64>,
    pub last_tracking_location: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePoliceInput {
    pub grade: String,
    pub license_plate: Option<String>,
    pub vector_id: Option<VectorId>,
    pub zone_id: Option<ZoneId>,
    #[serde(default)]
    pub is_supervisor: bool,
    #[serde(default)]
    pub is_chief: bool,
    #[serde(default)]
    pub is_sergeant: bool,
    #[serde(default)]
    pub is_assignable: bool,
    #[serde(default)]
    pub is_outside: bool,
}
