use crate::types::{IncidentId, PoliceId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no data to analyze")]
    EmptyInput,
    #[error("status event {index} has no status id")]
    MissingStatus { index: usize },
    #[error("timestamp cannot be normalized to UTC: {value}")]
    TimestampConsistency { value: String },
}

#[derive(Debug, Error)]
pub enum PoliceError {
    #[error("police record not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum IncidentError {
    #[error("incident not found")]
    NotFound,
    #[error("no security incidents found for police officer with id {police_id}")]
    NoneForPolice { police_id: PoliceId },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("no tracking states found for incident {incident_id}")]
    NoneForIncident { incident_id: IncidentId },
    #[error("tracking state timestamp cannot be normalized to UTC: {value}")]
    InconsistentTimestamp { value: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no status incidents found")]
    NoStatuses,
    #[error("zone not found")]
    ZoneNotFound,
    #[error("vector not found")]
    VectorNotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum DeriError {
    #[error(transparent)]
    Police(#[from] PoliceError),
    #[error(transparent)]
    Incident(#[from] IncidentError),
    #[error(transparent)]
    Tracking(#[from] TrackingError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("internal error: {message}")]
    Internal { message: String },
}
