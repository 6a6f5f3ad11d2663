use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::routes::parse_id;
use crate::{AppState, build_deri};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use deri_core::types::{DurationOrder, IncidentId, IncidentStatusAnalysis, TrackingState};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct StatusTimeQuery {
    /// `status_id` (default) or `first_occurrence`.
    #[serde(default)]
    pub order: DurationOrder,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/incident_tracking_states/{incident_id}", get(list_states))
        .route(
            "/incident_tracking_states/{incident_id}/analysis",
            get(status_time),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/incident_tracking_states/{incident_id}",
    params(("incident_id" = i64, Path, description = "Incident id")),
    responses(
        (status = 200, body = Vec<TrackingState>),
        (status = 404, description = "Incident has no tracking states")
    )
)]
pub(crate) async fn list_states(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(incident_id): Path<String>,
) -> Response {
    let incident_id = match parse_id::<IncidentId>(&incident_id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.tracking().list_by_incident(incident_id) {
        Ok(states) => Json(states).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/incident_tracking_states/{incident_id}/analysis",
    params(("incident_id" = i64, Path, description = "Incident id"), StatusTimeQuery),
    responses(
        (status = 200, body = IncidentStatusAnalysis),
        (status = 404, description = "Incident has no status history"),
        (status = 422, description = "Stored timestamp without a UTC offset")
    )
)]
pub(crate) async fn status_time(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(incident_id): Path<String>,
    Query(query): Query<StatusTimeQuery>,
) -> Response {
    let incident_id = match parse_id::<IncidentId>(&incident_id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri
        .analysis()
        .incident_status_time(incident_id, query.order)
    {
        Ok(analysis) => Json(analysis).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
