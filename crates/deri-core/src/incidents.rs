use crate::error::IncidentError;
use crate::types::{CreateIncidentInput, Incident, IncidentId, PoliceId};

pub trait IncidentRepository {
    fn create(&self, input: CreateIncidentInput) -> Result<Incident, IncidentError>;
    fn get(&self, id: IncidentId) -> Result<Option<Incident>, IncidentError>;
    /// Newest first.
    fn list_by_police(
        &self,
        police_id: PoliceId,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Incident>, IncidentError>;
    fn all_by_police(&self, police_id: PoliceId) -> Result<Vec<Incident>, IncidentError>;
}
