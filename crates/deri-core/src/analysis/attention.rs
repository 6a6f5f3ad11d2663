//! Attention-time statistics over an officer's incidents.
//!
//! Attention times arrive as strings. Values that do not parse are treated as
//! missing and left out of every statistic; they never fail the analysis.

use crate::types::{
    AttentionAnalysis, DescriptiveStats, Incident, IncidentAttention, PercentileValue, StatusCount,
    StatusId, VectorAttention, VectorId, ZoneAttention, ZoneId,
};
use std::collections::BTreeMap;
use tracing::warn;

pub const DEFAULT_PERCENTILES: [u8; 5] = [25, 50, 75, 90, 95];

/// Parses `H:M:S` (one or two digits per field) or a bare number of seconds.
pub fn parse_attention_time(value: &str) -> Option<f64> {
    if value.is_empty() || value == "null" {
        return None;
    }
    if let Some(seconds) = parse_clock(value) {
        return Some(seconds);
    }
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
}

fn parse_clock(value: &str) -> Option<f64> {
    let mut parts = value.split(':');
    let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    let field = |part: &str| -> Option<u32> {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };
    let (h, m, s) = (field(h)?, field(m)?, field(s)?);
    Some(f64::from(h * 3600 + m * 60 + s))
}

/// Renders seconds as `HH:MM:SS`, dropping the fractional part.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_hms(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };
    let (hours, remainder) = (whole / 3600, whole % 3600);
    let (minutes, seconds) = (remainder / 60, remainder % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Linear interpolation between the closest ranks of an ascending slice.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentile(sorted: &[f64], percentile: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = percentile.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - rank.floor();
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Mean, median, extremes and percentiles. An empty input yields zeros.
#[allow(clippy::cast_precision_loss)]
pub fn describe(values: &[f64], percentiles: &[u8]) -> DescriptiveStats {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let at = |p: f64| percentile(&sorted, p).unwrap_or(0.0);
    let mean = if sorted.is_empty() {
        0.0
    } else {
        sorted.iter().sum::<f64>() / sorted.len() as f64
    };

    DescriptiveStats {
        count: sorted.len(),
        mean,
        median: at(50.0),
        min: sorted.first().copied().unwrap_or(0.0),
        max: sorted.last().copied().unwrap_or(0.0),
        percentiles: percentiles
            .iter()
            .map(|&p| PercentileValue {
                percentile: p,
                seconds: at(f64::from(p)),
            })
            .collect(),
    }
}

pub fn analyze_attention(incidents: &[Incident], percentiles: &[u8]) -> AttentionAnalysis {
    let rows: Vec<IncidentAttention> = incidents
        .iter()
        .map(|incident| IncidentAttention {
            incident_id: incident.id,
            police_id: incident.police_id,
            status_id: incident.status_id,
            vector_id: incident.vector_id,
            zone_id: incident.zone_id,
            attention_time: incident.attention_time.clone(),
            attention_time_seconds: parse_attention_time(&incident.attention_time),
        })
        .collect();

    let missing = rows
        .iter()
        .filter(|row| row.attention_time_seconds.is_none())
        .count();
    if missing > 0 {
        warn!(missing, total = rows.len(), "skipping unparseable attention times");
    }

    let values: Vec<f64> = rows.iter().filter_map(|row| row.attention_time_seconds).collect();
    let stats = describe(&values, percentiles);
    let average_formatted = format_hms(stats.mean);

    AttentionAnalysis {
        total_incidents: rows.len(),
        average_formatted,
        stats,
        status_distribution: status_distribution(&rows),
        zone_analysis: zone_analysis(&rows, percentiles),
        vector_analysis: vector_analysis(&rows),
        incidents: rows,
    }
}

fn status_distribution(rows: &[IncidentAttention]) -> Vec<StatusCount> {
    let mut counts: BTreeMap<StatusId, usize> = BTreeMap::new();
    for status_id in rows.iter().filter_map(|row| row.status_id) {
        *counts.entry(status_id).or_default() += 1;
    }
    let mut distribution: Vec<StatusCount> = counts
        .into_iter()
        .map(|(status_id, count)| StatusCount { status_id, count })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}

fn zone_analysis(rows: &[IncidentAttention], percentiles: &[u8]) -> Vec<ZoneAttention> {
    let mut zones: BTreeMap<ZoneId, (usize, Vec<f64>)> = BTreeMap::new();
    for row in rows {
        let Some(zone_id) = row.zone_id else {
            continue;
        };
        let entry = zones.entry(zone_id).or_default();
        entry.0 += 1;
        if let Some(seconds) = row.attention_time_seconds {
            entry.1.push(seconds);
        }
    }
    zones
        .into_iter()
        .map(|(zone_id, (count, values))| {
            let stats = describe(&values, percentiles);
            ZoneAttention {
                zone_id,
                count,
                average_formatted: format_hms(stats.mean),
                stats,
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn vector_analysis(rows: &[IncidentAttention]) -> Vec<VectorAttention> {
    let mut vectors: BTreeMap<Option<VectorId>, Vec<f64>> = BTreeMap::new();
    for row in rows {
        if let Some(seconds) = row.attention_time_seconds {
            vectors.entry(row.vector_id).or_default().push(seconds);
        }
    }
    let mut analysis: Vec<VectorAttention> = vectors
        .into_iter()
        .map(|(vector_id, values)| VectorAttention {
            vector_id,
            count: values.len(),
            mean_seconds: values.iter().sum::<f64>() / values.len() as f64,
        })
        .collect();
    analysis.sort_by(|a, b| b.mean_seconds.total_cmp(&a.mean_seconds));
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IncidentId, PoliceId};
    use chrono::{TimeZone, Utc};

    fn incident(id: i64, attention: &str, zone: Option<i64>, vector: Option<i64>) -> Incident {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Incident {
            id: IncidentId::new(id),
            created_at: at,
            updated_at: at,
            sku: None,
            citizen_affected: None,
            location: None,
            address: None,
            description: None,
            assigned_at: None,
            report: None,
            assigned_by_id: None,
            citizen_id: None,
            monitor_id: None,
            police_id: Some(PoliceId::new(1)),
            status_id: Some(StatusId::new(if id % 2 == 0 { 2 } else { 1 })),
            is_open: false,
            is_verified: false,
            incident_type_id: None,
            vector_id: vector.map(VectorId::new),
            zone_id: zone.map(ZoneId::new),
            is_affected: false,
            is_rated: false,
            is_police_arrived: false,
            is_police_confirm: false,
            is_possible_duplicate: false,
            is_read: false,
            is_monitor_open: false,
            is_from_call: false,
            attention_time: attention.to_string(),
            social_proximity_id: None,
        }
    }

    #[test]
    fn parses_clock_and_numeric_forms() {
        assert_eq!(parse_attention_time("01:02:03"), Some(3723.0));
        assert_eq!(parse_attention_time("1:2:3"), Some(3723.0));
        assert_eq!(parse_attention_time("90"), Some(90.0));
        assert_eq!(parse_attention_time("12.5"), Some(12.5));
    }

    #[test]
    fn unparseable_values_are_missing() {
        assert_eq!(parse_attention_time("not-a-time"), None);
        assert_eq!(parse_attention_time(""), None);
        assert_eq!(parse_attention_time("null"), None);
        assert_eq!(parse_attention_time("100:00:00"), None);
        assert_eq!(parse_attention_time("01:02"), None);
        assert_eq!(parse_attention_time("inf"), None);
    }

    #[test]
    fn formats_whole_seconds() {
        assert_eq!(format_hms(3723.9), "01:02:03");
        assert_eq!(format_hms(0.0), "00:00:00");
        assert_eq!(format_hms(f64::NAN), "00:00:00");
        assert_eq!(format_hms(360_000.0), "100:00:00");
    }

    #[test]
    fn percentiles_interpolate_linearly() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&sorted, 0.0), Some(10.0));
        assert_eq!(percentile(&sorted, 50.0), Some(25.0));
        assert_eq!(percentile(&sorted, 100.0), Some(40.0));
        assert!((percentile(&sorted, 90.0).unwrap() - 37.0).abs() < 1e-9);
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn describe_empty_is_all_zero() {
        let stats = describe(&[], &DEFAULT_PERCENTILES);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.percentile(95), Some(0.0));
    }

    #[test]
    fn describe_reports_requested_percentiles() {
        let stats = describe(&[5.0, 1.0, 3.0], &[25, 75]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.percentile(25), Some(2.0));
        assert_eq!(stats.percentile(75), Some(4.0));
        assert_eq!(stats.percentile(90), None);
    }

    #[test]
    fn missing_values_are_excluded_from_mean_and_median() {
        let incidents = vec![
            incident(1, "00:01:00", Some(1), Some(10)),
            incident(2, "not-a-time", Some(1), None),
            incident(3, "00:03:00", Some(2), None),
        ];
        let analysis = analyze_attention(&incidents, &DEFAULT_PERCENTILES);
        assert_eq!(analysis.total_incidents, 3);
        assert_eq!(analysis.stats.count, 2);
        assert_eq!(analysis.stats.mean, 120.0);
        assert_eq!(analysis.stats.median, 120.0);
        assert_eq!(analysis.average_formatted, "00:02:00");
        assert_eq!(analysis.incidents[1].attention_time_seconds, None);
    }

    #[test]
    fn zones_count_every_incident_but_average_parsed_ones() {
        let incidents = vec![
            incident(1, "00:01:00", Some(1), None),
            incident(2, "garbage", Some(1), None),
            incident(3, "00:03:00", None, None),
        ];
        let analysis = analyze_attention(&incidents, &DEFAULT_PERCENTILES);
        assert_eq!(analysis.zone_analysis.len(), 1);
        let zone = &analysis.zone_analysis[0];
        assert_eq!(zone.zone_id, ZoneId::new(1));
        assert_eq!(zone.count, 2);
        assert_eq!(zone.stats.count, 1);
        assert_eq!(zone.stats.mean, 60.0);
        assert_eq!(zone.average_formatted, "00:01:00");
    }

    #[test]
    fn vectors_sorted_by_mean_with_unknown_group() {
        let incidents = vec![
            incident(1, "60", None, Some(7)),
            incident(2, "600", None, None),
            incident(3, "120", None, Some(7)),
            incident(4, "bad", None, Some(8)),
        ];
        let analysis = analyze_attention(&incidents, &DEFAULT_PERCENTILES);
        assert_eq!(analysis.vector_analysis.len(), 2);
        assert_eq!(analysis.vector_analysis[0].vector_id, None);
        assert_eq!(analysis.vector_analysis[0].mean_seconds, 600.0);
        assert_eq!(analysis.vector_analysis[1].vector_id, Some(VectorId::new(7)));
        assert_eq!(analysis.vector_analysis[1].count, 2);
        assert_eq!(analysis.vector_analysis[1].mean_seconds, 90.0);
    }

    #[test]
    fn status_distribution_counts_incidents() {
        let incidents = vec![
            incident(1, "1", None, None),
            incident(2, "1", None, None),
            incident(3, "1", None, None),
        ];
        let analysis = analyze_attention(&incidents, &DEFAULT_PERCENTILES);
        assert_eq!(
            analysis.status_distribution,
            vec![
                StatusCount {
                    status_id: StatusId::new(1),
                    count: 2
                },
                StatusCount {
                    status_id: StatusId::new(2),
                    count: 1
                },
            ]
        );
    }
}
