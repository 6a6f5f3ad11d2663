use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::routes::parse_id;
use crate::{AppState, build_deri};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use deri_core::types::{Police, PoliceId};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/security_police/{id}", get(get_police))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/security_police/{id}",
    params(("id" = i64, Path, description = "Officer id")),
    responses(
        (status = 200, body = Police),
        (status = 404, description = "No officer with that id")
    )
)]
pub(crate) async fn get_police(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    let police_id = match parse_id::<PoliceId>(&id, &correlation) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let deri = match build_deri(&state) {
        Ok(deri) => deri,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match deri.police().get(police_id) {
        Ok(police) => Json(police).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
