//! Plain-text rendering for `deri analyze`. Colour is opt-in so tests and
//! pipes see bare text.

use deri_core::analysis::format_hms;
use deri_core::types::{IncidentStatusAnalysis, PoliceAnalysis, StatusDuration};
use owo_colors::OwoColorize;
use std::fmt::{self, Write};

const BAR_WIDTH: usize = 40;
const SEGMENT_GLYPHS: [char; 6] = ['#', '=', '+', '*', '~', '%'];

pub fn status_time(analysis: &IncidentStatusAnalysis, color: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let title = format!("Incident {}", analysis.incident_id);
    writeln!(
        out,
        "{}: {} events, {} total",
        paint(&title, color),
        analysis.event_count,
        format_hms(analysis.total_duration_seconds)
    )?;
    writeln!(out)?;
    writeln!(out, "  {:<24} {:>10} {:>7}", "STATUS", "TIME", "SHARE")?;
    for (index, row) in analysis.status_time.iter().enumerate() {
        writeln!(
            out,
            "{} {:<24} {:>10} {:>6.1}%",
            glyph(index),
            status_label(row),
            format_hms(row.duration_seconds),
            row.percentage
        )?;
    }
    writeln!(out)?;
    writeln!(out, "[{}]", stacked_bar(&analysis.status_time))?;
    Ok(out)
}

pub fn attention(analysis: &PoliceAnalysis, color: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let officer = &analysis.officer;
    let title = format!("Officer {}", analysis.police_id);
    let zone = officer.zone_name.as_deref().unwrap_or("no zone");
    let role = if officer.is_supervisor {
        ", supervisor"
    } else {
        ""
    };
    writeln!(
        out,
        "{} ({}{}, {})",
        paint(&title, color),
        officer.grade,
        role,
        zone
    )?;

    let attention = &analysis.attention;
    let stats = &attention.stats;
    writeln!(
        out,
        "Incidents: {} ({} with attention time), average {}",
        attention.total_incidents, stats.count, attention.average_formatted
    )?;
    writeln!(
        out,
        "  median {}  min {}  max {}",
        format_hms(stats.median),
        format_hms(stats.min),
        format_hms(stats.max)
    )?;
    if !stats.percentiles.is_empty() {
        let line: Vec<String> = stats
            .percentiles
            .iter()
            .map(|value| format!("p{} {}", value.percentile, format_hms(value.seconds)))
            .collect();
        writeln!(out, "  {}", line.join("  "))?;
    }

    if !attention.status_distribution.is_empty() {
        writeln!(out, "\n{}", paint("Statuses", color))?;
        for entry in &attention.status_distribution {
            writeln!(out, "  status {:<6} {:>5}", entry.status_id, entry.count)?;
        }
    }
    if !attention.zone_analysis.is_empty() {
        writeln!(out, "\n{}", paint("Zones", color))?;
        for zone in &attention.zone_analysis {
            writeln!(
                out,
                "  zone {:<8} {:>5} incidents  average {}",
                zone.zone_id, zone.count, zone.average_formatted
            )?;
        }
    }
    if !attention.vector_analysis.is_empty() {
        writeln!(out, "\n{}", paint("Vectors", color))?;
        for vector in &attention.vector_analysis {
            let label = vector
                .vector_id
                .map_or_else(|| "unknown".to_string(), |id| id.to_string());
            writeln!(
                out,
                "  vector {:<8} {:>5} incidents  mean {}",
                label,
                vector.count,
                format_hms(vector.mean_seconds)
            )?;
        }
    }
    Ok(out)
}

fn paint(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn status_label(row: &StatusDuration) -> String {
    match &row.status_name {
        Some(name) => format!("{name} ({})", row.status_id),
        None => format!("status {}", row.status_id),
    }
}

fn glyph(index: usize) -> char {
    SEGMENT_GLYPHS[index % SEGMENT_GLYPHS.len()]
}

/// One bar split into a segment per row, each as wide as its share. Segment
/// edges are rounded from the running total so the widths always add up to
/// `BAR_WIDTH`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn stacked_bar(rows: &[StatusDuration]) -> String {
    let total: f64 = rows.iter().map(|row| row.percentage.max(0.0)).sum();
    if total <= 0.0 {
        return ".".repeat(BAR_WIDTH);
    }
    let mut bar = String::with_capacity(BAR_WIDTH);
    let mut cumulative = 0.0;
    let mut drawn = 0;
    for (index, row) in rows.iter().enumerate() {
        cumulative += row.percentage.max(0.0);
        let edge = ((cumulative / total) * BAR_WIDTH as f64).round() as usize;
        let edge = edge.min(BAR_WIDTH);
        bar.extend(std::iter::repeat_n(glyph(index), edge.saturating_sub(drawn)));
        drawn = drawn.max(edge);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use deri_core::analysis::analyze_attention;
    use deri_core::types::{Incident, IncidentId, OfficerInfo, PoliceId, StatusId, ZoneId};

    fn duration(id: i64, name: Option<&str>, seconds: f64, percentage: f64) -> StatusDuration {
        StatusDuration {
            status_id: StatusId::new(id),
            status_name: name.map(str::to_string),
            duration_seconds: seconds,
            percentage,
        }
    }

    #[test]
    fn status_table_ends_with_one_stacked_bar() {
        let analysis = IncidentStatusAnalysis {
            incident_id: IncidentId::new(12),
            event_count: 3,
            total_duration_seconds: 3600.0,
            status_time: vec![
                duration(1, Some("Abierto"), 2700.0, 75.0),
                duration(4, None, 900.0, 25.0),
            ],
        };
        let text = status_time(&analysis, false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Incident 12: 3 events, 01:00:00 total");
        assert!(lines[3].starts_with("# Abierto (1)"));
        assert!(lines[3].contains("00:45:00"));
        assert!(lines[3].contains("75.0%"));
        assert!(lines[4].starts_with("= status 4"));
        assert_eq!(lines[6], format!("[{}{}]", "#".repeat(30), "=".repeat(10)));
    }

    #[test]
    fn stacked_bar_always_fills_its_width() {
        let rows = [
            duration(1, None, 1.0, 33.333_333),
            duration(2, None, 1.0, 33.333_333),
            duration(3, None, 1.0, 33.333_334),
        ];
        let bar = stacked_bar(&rows);
        assert_eq!(bar.chars().count(), BAR_WIDTH);
        assert_eq!(bar.chars().filter(|c| *c == '#').count(), 13);
        assert_eq!(bar.chars().filter(|c| *c == '=').count(), 14);
        assert_eq!(bar.chars().filter(|c| *c == '+').count(), 13);
    }

    #[test]
    fn zero_length_incident_draws_an_empty_bar() {
        let rows = [duration(1, None, 0.0, 0.0), duration(2, None, 0.0, 0.0)];
        assert_eq!(stacked_bar(&rows), ".".repeat(BAR_WIDTH));
    }

    #[test]
    fn attention_report_sections() {
        let incidents: Vec<Incident> = [("00:10:00", 1), ("00:20:00", 1), ("bad", 2)]
            .iter()
            .enumerate()
            .map(|(index, (attention, zone))| Incident {
                id: IncidentId::new(index as i64 + 1),
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
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
                police_id: Some(PoliceId::new(3)),
                status_id: Some(StatusId::new(1)),
                is_open: true,
                is_verified: false,
                incident_type_id: None,
                vector_id: None,
                zone_id: Some(ZoneId::new(*zone)),
                is_affected: false,
                is_rated: false,
                is_police_arrived: false,
                is_police_confirm: false,
                is_possible_duplicate: false,
                is_read: false,
                is_monitor_open: false,
                is_from_call: false,
                attention_time: (*attention).to_string(),
                social_proximity_id: None,
            })
            .collect();
        let analysis = PoliceAnalysis {
            police_id: PoliceId::new(3),
            officer: OfficerInfo {
                grade: "Cabo".to_string(),
                is_supervisor: true,
                zone_name: Some("Centro".to_string()),
            },
            attention: analyze_attention(&incidents, &[50]),
        };

        let text = attention(&analysis, false).unwrap();
        assert!(text.starts_with("Officer 3 (Cabo, supervisor, Centro)\n"));
        assert!(text.contains("Incidents: 3 (2 with attention time), average 00:15:00"));
        assert!(text.contains("p50 00:15:00"));
        assert!(text.contains("\nZones\n"));
        assert!(text.contains("vector unknown"));
    }
}
