use crate::error::TrackingError;
use crate::types::{CreateTrackingStateInput, IncidentId, TrackingState};

pub trait TrackingStateRepository {
    fn record(&self, input: CreateTrackingStateInput) -> Result<TrackingState, TrackingError>;
    /// Oldest first.
    fn list_by_incident(&self, incident_id: IncidentId)
    -> Result<Vec<TrackingState>, TrackingError>;
}
