use crate::types::ids::{IncidentId, StatusId, TrackingStateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of an incident's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrackingState {
    pub id: TrackingStateId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub incident_id: IncidentId,
    pub status_id: Option<StatusId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateTrackingStateInput {
    pub incident_id: IncidentId,
    pub status_id: Option<StatusId>,
    pub created_at: Option<DateTime<Utc>>,
}
