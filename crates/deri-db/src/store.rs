use deri_core::store::Store;
use rusqlite::Connection;

use crate::catalog_repo::CatalogRepo;
use crate::incident_repo::IncidentRepo;
use crate::police_repo::PoliceRepo;
use crate::tracking_repo::TrackingRepo;

/// A store over one connection. Dropping it closes the connection.
pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl Store for DbStore {
    type Police<'a>
        = PoliceRepo<'a>
    where
        Self: 'a;
    type Incidents<'a>
        = IncidentRepo<'a>
    where
        Self: 'a;
    type Tracking<'a>
        = TrackingRepo<'a>
    where
        Self: 'a;
    type Catalog<'a>
        = CatalogRepo<'a>
    where
        Self: 'a;

    fn police(&self) -> Self::Police<'_> {
        PoliceRepo::new(&self.conn)
    }

    fn incidents(&self) -> Self::Incidents<'_> {
        IncidentRepo::new(&self.conn)
    }

    fn tracking(&self) -> Self::Tracking<'_> {
        TrackingRepo::new(&self.conn)
    }

    fn catalog(&self) -> Self::Catalog<'_> {
        CatalogRepo::new(&self.conn)
    }
}
