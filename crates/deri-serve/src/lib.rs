pub mod middleware;
pub mod openapi;
pub mod routes;

use axum::Router;
use deri_core::analysis::AnalysisSettings;
use deri_core::{Deri, DeriError};
use deri_db::schema;
use deri_db::store::DbStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub db_path: String,
    pub analysis: AnalysisSettings,
}

/// Opens a connection for the duration of one request.
pub fn build_deri(state: &AppState) -> Result<Deri<DbStore>, DeriError> {
    debug!(db_path = %state.db_path, "acquiring store");
    let conn = schema::open_and_migrate(&state.db_path).map_err(|err| DeriError::Internal {
        message: err.to_string(),
    })?;
    Ok(Deri::new(DbStore::new(conn), state.analysis.clone()))
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, db_path = %state.db_path, "deri listening");
    axum::serve(listener, app(state)).await
}
