use crate::catalog::CatalogRepository;
use crate::incidents::IncidentRepository;
use crate::police::PoliceRepository;
use crate::tracking::TrackingStateRepository;

pub trait Store {
    type Police<'a>: PoliceRepository
    where
        Self: 'a;
    type Incidents<'a>: IncidentRepository
    where
        Self: 'a;
    type Tracking<'a>: TrackingStateRepository
    where
        Self: 'a;
    type Catalog<'a>: CatalogRepository
    where
        Self: 'a;

    fn police(&self) -> Self::Police<'_>;
    fn incidents(&self) -> Self::Incidents<'_>;
    fn tracking(&self) -> Self::Tracking<'_>;
    fn catalog(&self) -> Self::Catalog<'_>;
}
