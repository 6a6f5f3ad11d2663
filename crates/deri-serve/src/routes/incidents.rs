use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::routes::parse_id;
use crate::{AppState, build_deri};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use deri_core::types::{Incident, IncidentId, Page, PoliceAnalysis, PoliceId};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/security_incident/{id}", get(get_incident))
        .route(
            "/security_incident/police/{police_id}",
            get(list_by_police),
        )
        .route(
            "/security_incident/police/{police_id}/analysis",
            get(police_analysis),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/security_incident/{id}",
    params(("id" = i64, Path, description = "Incident id")),
    responses(
        (status = 200, body = Incident),
        (status = 404, description = "No incident with that id")
    )
)]
pub(crate) async fn get_incident(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    let incident_id = match parse_id::<IncidentId>(&id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.incidents().get(incident_id) {
        Ok(incident) => Json(incident).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/security_incident/police/{police_id}",
    params(("police_id" = i64, Path, description = "Officer id"), Page),
    responses(
        (status = 200, body = Vec<Incident>),
        (status = 400, description = "limit outside 1..=100"),
        (status = 404, description = "Officer has no incidents")
    )
)]
pub(crate) async fn list_by_police(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(police_id): Path<String>,
    Query(page): Query<Page>,
) -> Response {
    let police_id = match parse_id::<PoliceId>(&police_id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.incidents().list_by_police(police_id, page) {
        Ok(list) => Json(list).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/security_incident/police/{police_id}/analysis",
    params(("police_id" = i64, Path, description = "Officer id")),
    responses(
        (status = 200, body = PoliceAnalysis),
        (status = 404, description = "Officer missing or without incidents")
    )
)]
pub(crate) async fn police_analysis(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(police_id): Path<String>,
) -> Response {
    let police_id = match parse_id::<PoliceId>(&police_id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.analysis().police_attention(police_id) {
        Ok(analysis) => Json(analysis).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
