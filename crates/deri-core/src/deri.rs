use crate::analysis::{
    AnalysisSettings, StatusNames, analyze_attention, compute_status_durations, durations,
    events_from_raw, events_from_tracking,
};
use crate::catalog::CatalogRepository;
use crate::error::{CatalogError, DeriError, IncidentError, PoliceError, TrackingError};
use crate::incidents::IncidentRepository;
use crate::police::PoliceRepository;
use crate::store::Store;
use crate::tracking::TrackingStateRepository;
use crate::types::{
    DurationOrder, Incident, IncidentId, IncidentStatusAnalysis, IncidentType, OfficerInfo, Page,
    Police, PoliceAnalysis, PoliceId, StatusDuration, StatusDurationsRequest, StatusIncident,
    TrackingState, Vector, VectorId, Zone, ZoneId,
};
use tracing::debug;

/// Request-scoped entry point: owns one store for the lifetime of a request.
pub struct Deri<S: Store> {
    store: S,
    settings: AnalysisSettings,
}

impl<S: Store> Deri<S> {
    pub fn new(store: S, settings: AnalysisSettings) -> Self {
        Self { store, settings }
    }

    pub fn police(&self) -> PoliceApi<'_, S> {
        PoliceApi { core: self }
    }

    pub fn incidents(&self) -> IncidentsApi<'_, S> {
        IncidentsApi { core: self }
    }

    pub fn tracking(&self) -> TrackingApi<'_, S> {
        TrackingApi { core: self }
    }

    pub fn catalog(&self) -> CatalogApi<'_, S> {
        CatalogApi { core: self }
    }

    pub fn analysis(&self) -> AnalysisApi<'_, S> {
        AnalysisApi { core: self }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub struct PoliceApi<'a, S: Store> {
    core: &'a Deri<S>,
}

impl<S: Store> PoliceApi<'_, S> {
    pub fn get(&self, id: PoliceId) -> Result<Police, DeriError> {
        self.core
            .store
            .police()
            .get(id)?
            .ok_or(DeriError::Police(PoliceError::NotFound))
    }
}

pub struct IncidentsApi<'a, S: Store> {
    core: &'a Deri<S>,
}

impl<S: Store> IncidentsApi<'_, S> {
    pub fn get(&self, id: IncidentId) -> Result<Incident, DeriError> {
        self.core
            .store
            .incidents()
            .get(id)?
            .ok_or(DeriError::Incident(IncidentError::NotFound))
    }

    pub fn list_by_police(
        &self,
        police_id: PoliceId,
        page: Page,
    ) -> Result<Vec<Incident>, DeriError> {
        let limit = page.limit.unwrap_or(Page::DEFAULT_LIMIT);
        if !(1..=Page::MAX_LIMIT).contains(&limit) {
            return Err(IncidentError::InvalidInput {
                message: format!("limit must be between 1 and {}", Page::MAX_LIMIT),
            }
            .into());
        }
        let offset = page.offset.unwrap_or(0);
        let incidents = self
            .core
            .store
            .incidents()
            .list_by_police(police_id, limit, offset)?;
        if incidents.is_empty() {
            return Err(IncidentError::NoneForPolice { police_id }.into());
        }
        Ok(incidents)
    }
}

pub struct TrackingApi<'a, S: Store> {
    core: &'a Deri<S>,
}

impl<S: Store> TrackingApi<'_, S> {
    pub fn list_by_incident(
        &self,
        incident_id: IncidentId,
    ) -> Result<Vec<TrackingState>, DeriError> {
        let states = self.core.store.tracking().list_by_incident(incident_id)?;
        if states.is_empty() {
            return Err(TrackingError::NoneForIncident { incident_id }.into());
        }
        Ok(states)
    }
}

pub struct CatalogApi<'a, S: Store> {
    core: &'a Deri<S>,
}

impl<S: Store> CatalogApi<'_, S> {
    pub fn statuses(&self) -> Result<Vec<StatusIncident>, DeriError> {
        let statuses = self.core.store.catalog().statuses()?;
        if statuses.is_empty() {
            return Err(CatalogError::NoStatuses.into());
        }
        Ok(statuses)
    }

    pub fn zone(&self, id: ZoneId) -> Result<Zone, DeriError> {
        self.core
            .store
            .catalog()
            .zone(id)?
            .ok_or(DeriError::Catalog(CatalogError::ZoneNotFound))
    }

    pub fn vector(&self, id: VectorId) -> Result<Vector, DeriError> {
        self.core
            .store
            .catalog()
            .vector(id)?
            .ok_or(DeriError::Catalog(CatalogError::VectorNotFound))
    }

    pub fn incident_types(&self) -> Result<Vec<IncidentType>, DeriError> {
        Ok(self.core.store.catalog().incident_types()?)
    }

    /// The full name mapping; an empty catalogue gives an empty mapping.
    pub fn status_names(&self) -> Result<StatusNames, DeriError> {
        Ok(StatusNames::from_statuses(
            &self.core.store.catalog().statuses()?,
        ))
    }
}

pub struct AnalysisApi<'a, S: Store> {
    core: &'a Deri<S>,
}

impl<S: Store> AnalysisApi<'_, S> {
    pub fn incident_status_time(
        &self,
        incident_id: IncidentId,
        order: DurationOrder,
    ) -> Result<IncidentStatusAnalysis, DeriError> {
        let states = self.core.store.tracking().list_by_incident(incident_id)?;
        debug!(%incident_id, events = states.len(), "loaded status history");
        let events = events_from_tracking(&states)?;
        let mut status_time = compute_status_durations(&events, order)?;
        self.core.catalog().status_names()?.label(&mut status_time);
        Ok(IncidentStatusAnalysis {
            incident_id,
            event_count: events.len(),
            total_duration_seconds: durations::total_seconds(&status_time),
            status_time,
        })
    }

    pub fn status_durations(
        &self,
        request: StatusDurationsRequest,
    ) -> Result<Vec<StatusDuration>, DeriError> {
        let events = events_from_raw(&request.events)?;
        let mut rows = compute_status_durations(&events, request.order)?;
        let names = match request.names {
            Some(map) => StatusNames::from_map(map),
            None => self.core.catalog().status_names()?,
        };
        names.label(&mut rows);
        Ok(rows)
    }

    pub fn police_attention(&self, police_id: PoliceId) -> Result<PoliceAnalysis, DeriError> {
        let police = self.core.police().get(police_id)?;
        let incidents = self.core.store.incidents().all_by_police(police_id)?;
        if incidents.is_empty() {
            return Err(IncidentError::NoneForPolice { police_id }.into());
        }
        debug!(%police_id, incidents = incidents.len(), "analyzing attention times");
        Ok(PoliceAnalysis {
            police_id,
            officer: OfficerInfo {
                grade: police.grade,
                is_supervisor: police.is_supervisor,
                zone_name: police.zone_name,
            },
            attention: analyze_attention(&incidents, &self.core.settings.percentiles),
        })
    }
}
