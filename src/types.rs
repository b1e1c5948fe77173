//! Domain types for storm-drain maintenance routing.
//!
//! Field names serialize in the camelCase shape the dashboard frontend
//! consumes (route tables and map polyline overlays).

use serde::{Deserialize, Serialize};

/// Urgency of a maintenance task. High-priority drains are visited early
/// even when that costs extra travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Work state of a maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// A cleaning work item tied to one storm-drain device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    /// Device identifier used to resolve the drain's location.
    pub device_id: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_team: String,
    /// Estimated on-site service time in minutes. Always positive.
    #[serde(rename = "estimatedTime")]
    pub estimated_minutes: u32,
    /// 1-based visiting order, rewritten on every optimization run.
    pub route_order: u32,
    /// Creation time as unix seconds.
    pub created_at: i64,
}

/// A named geographic point for a storm-drain device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }
}

/// Latitude/longitude pair as emitted in path output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Estimated gains of the optimized tour over visiting tasks in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    /// Distance reduction in percent, one decimal.
    pub distance_reduction: f64,
    /// Time reduction in whole minutes. Negative when priority reordering
    /// costs more than 2-opt saved.
    pub time_reduction: i64,
    /// Fuel cost reduction in rounded thousands of currency units,
    /// as a display string.
    pub fuel_savings: String,
}

impl Savings {
    /// The all-zero savings record used for empty inputs.
    pub fn zero() -> Self {
        Self {
            distance_reduction: 0.0,
            time_reduction: 0,
            fuel_savings: "0".to_string(),
        }
    }
}

/// One stop of the final annotated path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStop {
    /// 1-based sequence number.
    pub order: u32,
    pub task_id: String,
    pub device_id: String,
    /// Display name of the resolved location.
    pub location: String,
    pub coordinates: Coordinates,
    /// Wall-clock arrival time, `HH:MM`.
    pub arrival_time: String,
    /// On-site service time in minutes.
    pub duration: u32,
    /// Distance travelled from the previous stop in km, one decimal.
    /// Zero for the first stop.
    pub distance_from_previous: f64,
}

/// Result of one optimization run for one team's task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    /// Input tasks reordered by the tour, with `route_order` rewritten.
    pub tasks: Vec<Task>,
    /// Total tour distance in km, one decimal.
    pub total_distance: f64,
    /// Total travel plus service time in whole minutes.
    pub total_time: i64,
    pub savings: Savings,
    pub path: Vec<PathStop>,
}

impl OptimizedRoute {
    /// The trivial route for an empty task list.
    pub fn empty() -> Self {
        Self {
            tasks: Vec::new(),
            total_distance: 0.0,
            total_time: 0,
            savings: Savings::zero(),
            path: Vec::new(),
        }
    }
}
