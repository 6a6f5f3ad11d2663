use crate::types::ids::{IncidentId, IncidentTypeId, PoliceId, StatusId, VectorId, ZoneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Incident {
    pub id: IncidentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sku: Option<String>,
    pub citizen_affected: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub report: Option<String>,
    pub assigned_by_id: Option<i64>,
    pub citizen_id: Option<i64>,
    pub monitor_id: Option<i64>,
    pub police_id: Option<PoliceId>,
    pub status_id: Option<StatusId>,
    pub is_open: bool,
    pub is_verified: bool,
    pub incident_type_id: Option<IncidentTypeId>,
    pub vector_id: Option<VectorId>,
    pub zone_id: Option<ZoneId>,
    pub is_affected: bool,
    pub is_rated: bool,
    pub is_police_arrived: bool,
    pub is_police_confirm: bool,
    pub is_possible_duplicate: bool,
    pub is_read: bool,
    pub is_monitor_open: bool,
    pub is_from_call: bool,
    /// Raw attention time as recorded upstream, usually `HH:MM:SS`.
    pub attention_time: String,
    pub social_proximity_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateIncidentInput {
    pub police_id: Option<PoliceId>,
    pub status_id: Option<StatusId>,
    pub incident_type_id: Option<IncidentTypeId>,
    pub vector_id: Option<VectorId>,
    pub zone_id: Option<ZoneId>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub attention_time: String,
    #[serde(default)]
    pub is_open: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Pagination for officer incident listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 50;
    pub const MAX_LIMIT: u32 = 100;
}
