//! Time spent per status for a single incident.
//!
//! Each status event holds until the next one; the chronologically last event
//! has nothing closing it and contributes zero. Durations for the same status
//! are summed even when the visits are not adjacent.

use crate::analysis::timestamps;
use crate::error::AnalysisError;
use crate::types::{
    DurationOrder, RawStatusEvent, StatusDuration, StatusEvent, StatusId, TrackingState,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

struct Accumulator {
    seconds: f64,
    first_seen: DateTime<Utc>,
}

pub fn compute_status_durations(
    events: &[StatusEvent],
    order: DurationOrder,
) -> Result<Vec<StatusDuration>, AnalysisError> {
    if events.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    // `sort_by_key` is stable, so simultaneous events keep their input order.
    let mut sorted: Vec<&StatusEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.occurred_at);

    let mut totals: BTreeMap<StatusId, Accumulator> = BTreeMap::new();
    for (index, event) in sorted.iter().enumerate() {
        let spent = sorted
            .get(index + 1)
            .map_or(0.0, |next| seconds_between(event.occurred_at, next.occurred_at));
        totals
            .entry(event.status_id)
            .or_insert(Accumulator {
                seconds: 0.0,
                first_seen: event.occurred_at,
            })
            .seconds += spent;
    }

    let total: f64 = totals.values().map(|acc| acc.seconds).sum();
    let mut rows: Vec<(DateTime<Utc>, StatusDuration)> = totals
        .into_iter()
        .map(|(status_id, acc)| {
            let percentage = if total > 0.0 {
                acc.seconds / total * 100.0
            } else {
                0.0
            };
            (
                acc.first_seen,
                StatusDuration {
                    status_id,
                    status_name: None,
                    duration_seconds: acc.seconds,
                    percentage,
                },
            )
        })
        .collect();

    if order == DurationOrder::FirstOccurrence {
        rows.sort_by_key(|(first_seen, _)| *first_seen);
    }

    Ok(rows.into_iter().map(|(_, row)| row).collect())
}

/// Keeps microsecond precision; spans too large for that fall back to
/// milliseconds.
#[allow(clippy::cast_precision_loss)]
fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1000.0,
    }
}

/// Validates caller-supplied events: every event needs a status id and a
/// timestamp with an offset.
pub fn events_from_raw(raw: &[RawStatusEvent]) -> Result<Vec<StatusEvent>, AnalysisError> {
    raw.iter()
        .enumerate()
        .map(|(index, event)| {
            let status_id = event
                .status_id
                .map(StatusId::new)
                .ok_or(AnalysisError::MissingStatus { index })?;
            Ok(StatusEvent {
                status_id,
                occurred_at: timestamps::normalize(&event.occurred_at)?,
            })
        })
        .collect()
}

pub fn events_from_tracking(states: &[TrackingState]) -> Result<Vec<StatusEvent>, AnalysisError> {
    states
        .iter()
        .enumerate()
        .map(|(index, state)| {
            let status_id = state
                .status_id
                .ok_or(AnalysisError::MissingStatus { index })?;
            Ok(StatusEvent {
                status_id,
                occurred_at: state.created_at,
            })
        })
        .collect()
}

pub fn total_seconds(durations: &[StatusDuration]) -> f64 {
    durations.iter().map(|row| row.duration_seconds).sum()
}
