use crate::error::CatalogError;
use crate::types::{
    CreateIncidentTypeInput, CreateStatusInput, CreateVectorInput, CreateZoneInput, IncidentType,
    StatusIncident, Vector, VectorId, Zone, ZoneId,
};

/// Lookup tables: statuses, zones, vectors and incident types.
pub trait CatalogRepository {
    fn create_status(&self, input: CreateStatusInput) -> Result<StatusIncident, CatalogError>;
    fn statuses(&self) -> Result<Vec<StatusIncident>, CatalogError>;
    fn create_zone(&self, input: CreateZoneInput) -> Result<Zone, CatalogError>;
    fn zone(&self, id: ZoneId) -> Result<Option<Zone>, CatalogError>;
    fn create_vector(&self, input: CreateVectorInput) -> Result<Vector, CatalogError>;
    fn vector(&self, id: VectorId) -> Result<Option<Vector>, CatalogError>;
    fn create_incident_type(
        &self,
        input: CreateIncidentTypeInput,
    ) -> Result<IncidentType, CatalogError>;
    fn incident_types(&self) -> Result<Vec<IncidentType>, CatalogError>;
}
