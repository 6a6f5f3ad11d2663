use axum::Json;
use axum::http::StatusCode;
use deri_core::error::{
    AnalysisError, CatalogError, DeriError, IncidentError, PoliceError, TrackingError,
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: &'static str,
    pub message: String,
    pub correlation_id: Option<String>,
}

pub fn map_error(
    err: &DeriError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        DeriError::Police(police) => map_police_error(police),
        DeriError::Incident(incident) => map_incident_error(incident),
        DeriError::Tracking(tracking) => map_tracking_error(tracking),
        DeriError::Catalog(catalog) => map_catalog_error(catalog),
        DeriError::Analysis(analysis) => map_analysis_error(analysis),
        DeriError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        DeriError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            message.clone(),
        ),
    };

    if status.is_server_error() {
        error!(code, %message, correlation_id = ?correlation_id, "request failed");
    }

    (
        status,
        Json(ErrorEnvelope {
            code,
            message,
            correlation_id,
        }),
    )
}

fn storage_failure(message: String) -> (StatusCode, &'static str, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
}

fn map_police_error(err: &PoliceError) -> (StatusCode, &'static str, String) {
    match err {
        PoliceError::NotFound => (StatusCode::NOT_FOUND, "not_found", err.to_string()),
        PoliceError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        PoliceError::Storage { .. } => storage_failure(err.to_string()),
    }
}

fn map_incident_error(err: &IncidentError) -> (StatusCode, &'static str, String) {
    match err {
        IncidentError::NotFound | IncidentError::NoneForPolice { .. } => {
            (StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        IncidentError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        IncidentError::Storage { .. } => storage_failure(err.to_string()),
    }
}

fn map_tracking_error(err: &TrackingError) -> (StatusCode, &'static str, String) {
    match err {
        TrackingError::NoneForIncident { .. } => {
            (StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        TrackingError::InconsistentTimestamp { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid_timestamp",
            err.to_string(),
        ),
        TrackingError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        TrackingError::Storage { .. } => storage_failure(err.to_string()),
    }
}

fn map_catalog_error(err: &CatalogError) -> (StatusCode, &'static str, String) {
    match err {
        CatalogError::NoStatuses | CatalogError::ZoneNotFound | CatalogError::VectorNotFound => {
            (StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        CatalogError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        CatalogError::Storage { .. } => storage_failure(err.to_string()),
    }
}

fn map_analysis_error(err: &AnalysisError) -> (StatusCode, &'static str, String) {
    match err {
        AnalysisError::EmptyInput => (StatusCode::NOT_FOUND, "no_data", err.to_string()),
        AnalysisError::MissingStatus { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        AnalysisError::TimestampConsistency { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid_timestamp",
            err.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deri_core::types::IncidentId;

    #[test]
    fn analysis_errors_map_to_their_codes() {
        let cases = [
            (AnalysisError::EmptyInput, StatusCode::NOT_FOUND, "no_data"),
            (
                AnalysisError::MissingStatus { index: 2 },
                StatusCode::BAD_REQUEST,
                "invalid_input",
            ),
            (
                AnalysisError::TimestampConsistency {
                    value: "2024-01-01 00:00:00".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_timestamp",
            ),
        ];
        for (err, status, code) in cases {
            let (got, Json(body)) = map_error(&DeriError::Analysis(err), None);
            assert_eq!(got, status);
            assert_eq!(body.code, code);
        }
    }

    #[test]
    fn envelope_carries_correlation_id() {
        let err = DeriError::Tracking(TrackingError::NoneForIncident {
            incident_id: IncidentId::new(9),
        });
        let (status, Json(body)) = map_error(&err, Some("corr_x".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.correlation_id.as_deref(), Some("corr_x"));
        assert_eq!(body.message, "no tracking states found for incident 9");
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let err = DeriError::Catalog(CatalogError::Storage {
            message: "disk I/O error".to_string(),
        });
        let (status, Json(body)) = map_error(&err, None);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "storage_error");
    }
}
