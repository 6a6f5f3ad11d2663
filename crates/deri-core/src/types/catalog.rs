use crate::types::ids::{IncidentTypeId, StatusId, VectorId, ZoneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusIncident {
    pub id: StatusId,
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateStatusInput {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Zone {
    pub id: ZoneId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub poly: Option<String>,
    pub status_id: Option<i64>,
    pub description: Option<String>,
    pub vector_final: i64,
    pub vector_initial: i64,
    pub zone_type: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateZoneInput {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub poly: Option<String>,
    pub status_id: Option<i64>,
    pub description: Option<String>,
    pub vector_final: i64,
    pub vector_initial: i64,
    pub zone_type: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Vector {
    pub id: VectorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub poly: Option<String>,
    pub status_id: Option<i64>,
    pub zone_id: Option<ZoneId>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateVectorInput {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub poly: Option<String>,
    pub status_id: Option<i64>,
    pub zone_id: Option<ZoneId>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IncidentType {
    pub id: IncidentTypeId,
    pub sku: Option<String>,
    pub name: String,
    pub slug: Option<String>,
    pub level: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateIncidentTypeInput {
    pub sku: Option<String>,
    pub name: String,
    pub slug: Option<String>,
    pub level: String,
    pub active: bool,
}
