pub mod analysis;
pub mod catalog;
pub mod ids;
pub mod incident;
pub mod police;
pub mod tracking;

pub use analysis::{
    AttentionAnalysis, DescriptiveStats, DurationOrder, IncidentAttention, IncidentStatusAnalysis,
    OfficerInfo, PercentileValue, PoliceAnalysis, RawStatusEvent, StatusCount, StatusDuration,
    StatusDurationsRequest, StatusEvent, VectorAttention, ZoneAttention,
};
pub use catalog::{
    CreateIncidentTypeInput, CreateStatusInput, CreateVectorInput, CreateZoneInput, IncidentType,
    StatusIncident, Vector, Zone,
};
pub use ids::{
    IdError, IncidentId, IncidentTypeId, PoliceId, StatusId, TrackingStateId, VectorId, ZoneId,
};
pub use incident::{CreateIncidentInput, Incident, Page};
pub use police::{CreatePoliceInput, Police};
pub use tracking::{CreateTrackingStateInput, TrackingState};
