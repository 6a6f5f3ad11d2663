use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::routes::parse_id;
use crate::{AppState, build_deri};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use deri_core::types::{IncidentType, StatusIncident, Vector, VectorId, Zone, ZoneId};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status_incidents", get(list_statuses))
        .route("/security_zone/{id}", get(get_zone))
        .route("/security_vector/{id}", get(get_vector))
        .route("/security_incidenttype", get(list_incident_types))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/status_incidents",
    responses(
        (status = 200, body = Vec<StatusIncident>),
        (status = 404, description = "Status catalogue is empty")
    )
)]
pub(crate) async fn list_statuses(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
) -> Response {
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.catalog().statuses() {
        Ok(list) => Json(list).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/security_zone/{id}",
    params(("id" = i64, Path, description = "Zone id")),
    responses((status = 200, body = Zone), (status = 404, description = "No zone with that id"))
)]
pub(crate) async fn get_zone(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    let zone_id = match parse_id::<ZoneId>(&id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.catalog().zone(zone_id) {
        Ok(zone) => Json(zone).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/security_vector/{id}",
    params(("id" = i64, Path, description = "Vector id")),
    responses((status = 200, body = Vector), (status = 404, description = "No vector with that id"))
)]
pub(crate) async fn get_vector(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    let vector_id = match parse_id::<VectorId>(&id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.catalog().vector(vector_id) {
        Ok(vector) => Json(vector).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/security_incidenttype",
    responses((status = 200, body = Vec<IncidentType>))
)]
pub(crate) async fn list_incident_types(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
) -> Response {
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.catalog().incident_types() {
        Ok(list) => Json(list).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
