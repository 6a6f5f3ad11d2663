pub mod attention;
pub mod durations;
pub mod names;
pub mod timestamps;

pub use attention::{analyze_attention, describe, format_hms, parse_attention_time};
pub use durations::{compute_status_durations, events_from_raw, events_from_tracking};
pub use names::StatusNames;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub percentiles: Vec<u8>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            percentiles: attention::DEFAULT_PERCENTILES.to_vec(),
        }
    }
}
