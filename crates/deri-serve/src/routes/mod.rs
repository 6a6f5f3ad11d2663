pub mod analysis;
pub mod catalog;
pub mod error;
pub mod health;
pub mod incidents;
pub mod police;
pub mod tracking;

use crate::middleware::correlation::{CorrelationId, correlation_middleware};
use crate::{AppState, openapi};
use axum::Router;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use deri_core::DeriError;
use deri_core::types::IdError;
use error::map_error;
use std::str::FromStr;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(police::router(state.clone()))
        .merge(incidents::router(state.clone()))
        .merge(tracking::router(state.clone()))
        .merge(catalog::router(state.clone()))
        .merge(analysis::router(state))
        .merge(health::router())
        .merge(openapi::router())
        .route_layer(middleware::from_fn(correlation_middleware));

    Router::new().nest("/api", api)
}

/// Parses a path id, answering 400 `invalid_input` when it is not a positive
/// integer.
pub(crate) fn parse_id<T>(raw: &str, correlation: &CorrelationId) -> Result<T, Response>
where
    T: FromStr<Err = IdError>,
{
    raw.parse::<T>().map_err(|err| {
        map_error(
            &DeriError::InvalidInput {
                message: err.to_string(),
            },
            Some(correlation.0.clone()),
        )
        .into_response()
    })
}
