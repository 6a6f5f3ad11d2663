use utoipa::OpenApi;

use crate::routes::health::Health;
use crate::routes::tracking::StatusTimeQuery;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use deri_core::types::{
    AttentionAnalysis, DescriptiveStats, DurationOrder, Incident, IncidentAttention, IncidentId,
    IncidentStatusAnalysis, IncidentType, IncidentTypeId, OfficerInfo, Page, PercentileValue,
    Police, PoliceAnalysis, PoliceId, RawStatusEvent, StatusCount, StatusDuration,
    StatusDurationsRequest, StatusId, StatusIncident, TrackingState, TrackingStateId, Vector,
    VectorAttention, VectorId, Zone, ZoneAttention, ZoneId,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::police::get_police,
        crate::routes::incidents::get_incident,
        crate::routes::incidents::list_by_police,
        crate::routes::incidents::police_analysis,
        crate::routes::tracking::list_states,
        crate::routes::tracking::status_time,
        crate::routes::analysis::status_durations,
        crate::routes::catalog::list_statuses,
        crate::routes::catalog::get_zone,
        crate::routes::catalog::get_vector,
        crate::routes::catalog::list_incident_types,
        crate::routes::health::health
    ),
    components(schemas(
        Police,
        Incident,
        Page,
        TrackingState,
        StatusIncident,
        Zone,
        Vector,
        IncidentType,
        RawStatusEvent,
        StatusDurationsRequest,
        StatusDuration,
        DurationOrder,
        StatusTimeQuery,
        IncidentStatusAnalysis,
        PercentileValue,
        DescriptiveStats,
        IncidentAttention,
        StatusCount,
        ZoneAttention,
        VectorAttention,
        AttentionAnalysis,
        OfficerInfo,
        PoliceAnalysis,
        Health,
        PoliceId,
        IncidentId,
        StatusId,
        ZoneId,
        VectorId,
        IncidentTypeId,
        TrackingStateId
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn router() -> Router {
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> impl IntoResponse {
    let html = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Deri API Docs</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.ui = SwaggerUIBundle({ url: '/api/openapi.json', dom_id: '#swagger-ui' });
    </script>
  </body>
</html>
"#;
    axum::response::Html(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_route() {
        let spec: serde_json::Value = serde_json::from_str(&generate_spec()).unwrap();
        let paths = spec["paths"].as_object().unwrap();
        for path in [
            "/api/security_police/{id}",
            "/api/security_incident/police/{police_id}/analysis",
            "/api/incident_tracking_states/{incident_id}/analysis",
            "/api/status_incidents",
            "/api/health",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
