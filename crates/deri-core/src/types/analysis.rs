use crate::types::ids::{IncidentId, PoliceId, StatusId, VectorId, ZoneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A status change with its timestamp already normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusEvent {
    pub status_id: StatusId,
    pub occurred_at: DateTime<Utc>,
}

/// A status change as handed over by a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RawStatusEvent {
    pub status_id: Option<i64>,
    pub occurred_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusDuration {
    pub status_id: StatusId,
    pub status_name: Option<String>,
    pub duration_seconds: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DurationOrder {
    /// Ascending status id.
    #[default]
    StatusId,
    /// By the first time each status was entered.
    FirstOccurrence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IncidentStatusAnalysis {
    pub incident_id: IncidentId,
    pub event_count: usize,
    pub total_duration_seconds: f64,
    pub status_time: Vec<StatusDuration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusDurationsRequest {
    pub events: Vec<RawStatusEvent>,
    #[serde(default)]
    pub order: DurationOrder,
    /// Status names to label the result with; the stored catalogue is used when absent.
    pub names: Option<BTreeMap<i64, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PercentileValue {
    pub percentile: u8,
    pub seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DescriptiveStats {
    /// Number of values that parsed; missing values are not counted.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: Vec<PercentileValue>,
}

impl DescriptiveStats {
    pub fn percentile(&self, percentile: u8) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|value| value.percentile == percentile)
            .map(|value| value.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IncidentAttention {
    pub incident_id: IncidentId,
    pub police_id: Option<PoliceId>,
    pub status_id: Option<StatusId>,
    pub vector_id: Option<VectorId>,
    pub zone_id: Option<ZoneId>,
    pub attention_time: String,
    pub attention_time_seconds: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    pub status_id: StatusId,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ZoneAttention {
    pub zone_id: ZoneId,
    /// Incidents in the zone, including those without a usable attention time.
    pub count: usize,
    pub stats: DescriptiveStats,
    pub average_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VectorAttention {
    /// `None` groups incidents without a vector.
    pub vector_id: Option<VectorId>,
    pub count: usize,
    pub mean_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttentionAnalysis {
    pub total_incidents: usize,
    pub stats: DescriptiveStats,
    pub average_formatted: String,
    pub status_distribution: Vec<StatusCount>,
    pub zone_analysis: Vec<ZoneAttention>,
    pub vector_analysis: Vec<VectorAttention>,
    pub incidents: Vec<IncidentAttention>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OfficerInfo {
    pub grade: String,
    pub is_supervisor: bool,
    pub zone_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PoliceAnalysis {
    pub police_id: PoliceId,
    pub officer: OfficerInfo,
    pub attention: AttentionAnalysis,
}
