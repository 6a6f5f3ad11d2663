use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{AppState, build_deri};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use deri_core::types::{StatusDuration, StatusDurationsRequest};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analysis/status_durations", post(status_durations))
        .with_state(state)
}

/// Aggregates caller-supplied events. Names come from `names` when present,
/// otherwise from the status catalogue.
#[utoipa::path(
    post,
    path = "/api/analysis/status_durations",
    request_body = StatusDurationsRequest,
    responses(
        (status = 200, body = Vec<StatusDuration>),
        (status = 400, description = "An event has no status id"),
        (status = 404, description = "No events"),
        (status = 422, description = "A timestamp has no UTC offset")
    )
)]
pub(crate) async fn status_durations(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(request): Json<StatusDurationsRequest>,
) -> Response {
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.analysis().status_durations(request) {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
