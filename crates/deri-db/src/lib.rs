pub mod catalog_repo;
pub mod incident_repo;
pub mod police_repo;
pub mod schema;
pub mod store;
pub mod tracking_repo;
pub mod util;
