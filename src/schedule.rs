//! Converts a finished tour into wall-clock path entries.

use crate::evaluate::round_tenth;
use crate::traits::LocationLookup;
use crate::types::{Coordinates, PathStop, Task};

/// Fallback display name when a device has no known location.
const UNKNOWN_LOCATION: &str = "unknown location";

/// Walks the tour with a running clock and emits one annotated stop per
/// task.
///
/// The clock starts at `start_minutes` past midnight (09:00 for the
/// morning shift). Each later stop first accrues travel time from the
/// previous drain at `speed_kmh`, records the arrival, then accrues its
/// own service time. Deterministic for fixed inputs.
pub fn build_path<L: LocationLookup>(
    route: &[usize],
    tasks: &[Task],
    matrix: &[Vec<f64>],
    lookup: &L,
    start_minutes: u32,
    speed_kmh: f64,
) -> Vec<PathStop> {
    let mut clock = f64::from(start_minutes);

    route
        .iter()
        .enumerate()
        .map(|(position, &task_index)| {
            let task = &tasks[task_index];
            let location = lookup.resolve(&task.device_id);

            let mut distance_from_previous = 0.0;
            if position > 0 {
                distance_from_previous = matrix[route[position - 1]][task_index];
                clock += distance_from_previous / speed_kmh * 60.0;
            }

            let arrival_time = format_clock(clock);
            clock += f64::from(task.estimated_minutes);

            PathStop {
                order: position as u32 + 1,
                task_id: task.id.clone(),
                device_id: task.device_id.clone(),
                location: location
                    .map(|l| l.name.clone())
                    .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
                coordinates: location
                    .map(|l| Coordinates { lat: l.lat, lng: l.lng })
                    .unwrap_or(Coordinates { lat: 0.0, lng: 0.0 }),
                arrival_time,
                duration: task.estimated_minutes,
                distance_from_previous: round_tenth(distance_from_previous),
            }
        })
        .collect()
}

/// Formats minutes past midnight as `HH:MM`, floored to the minute.
fn format_clock(minutes: f64) -> String {
    let total = minutes.floor() as u64;
    format!("{:02}:{:02}", (total / 60) % 24, total % 60)
}
