//! The optimization pipeline: matrix → nearest neighbor → 2-opt →
//! priority adjustment → evaluation → schedule.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::evaluate::{round_tenth, savings, tour_distance, tour_minutes, FuelModel};
use crate::haversine::{distance_matrix, UNRESOLVED_SENTINEL_KM};
use crate::schedule::build_path;
use crate::tour::{nearest_neighbor, priority_adjustment, two_opt};
use crate::traits::LocationLookup;
use crate::types::{OptimizedRoute, Task};

/// Tunable knobs of the pipeline. Defaults match the dashboard's
/// operational assumptions.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Maximum full 2-opt passes. The search may stop at a local optimum
    /// earlier; it is not guaranteed to reach one within the cap.
    pub two_opt_passes: usize,
    /// Assumed average urban driving speed in km/h.
    pub avg_speed_kmh: f64,
    /// Shift start in minutes past midnight.
    pub start_minutes: u32,
    /// Fraction of the tour's head reserved for high-priority stops.
    pub priority_front_fraction: f64,
    /// Distance substituted for unresolvable device lookups.
    pub unresolved_sentinel_km: f64,
    pub fuel: FuelModel,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            two_opt_passes: 100,
            avg_speed_kmh: 20.0,
            start_minutes: 9 * 60,
            priority_front_fraction: 0.3,
            unresolved_sentinel_km: UNRESOLVED_SENTINEL_KM,
            fuel: FuelModel::default(),
        }
    }
}

/// Optimizes the visiting order of one team's task list.
///
/// Pure: no I/O, no shared state, completes in bounded time for the tour
/// sizes this dashboard produces. Savings are measured against visiting
/// the tasks in their input order.
pub fn optimize<L: LocationLookup>(
    tasks: &[Task],
    lookup: &L,
    options: &OptimizeOptions,
) -> OptimizedRoute {
    if tasks.is_empty() {
        return OptimizedRoute::empty();
    }

    let matrix = distance_matrix(tasks, lookup, options.unresolved_sentinel_km);

    let route = nearest_neighbor(&matrix);
    let route = two_opt(route, &matrix, options.two_opt_passes);
    let route = priority_adjustment(route, tasks, options.priority_front_fraction);

    let baseline: Vec<usize> = (0..tasks.len()).collect();
    let baseline_km = tour_distance(&baseline, &matrix);
    let baseline_minutes = tour_minutes(&baseline, tasks, &matrix, options.avg_speed_kmh);
    let optimized_km = tour_distance(&route, &matrix);
    let optimized_minutes = tour_minutes(&route, tasks, &matrix, options.avg_speed_kmh);

    debug!(
        stops = tasks.len(),
        baseline_km, optimized_km, "route optimized"
    );

    let path = build_path(
        &route,
        tasks,
        &matrix,
        lookup,
        options.start_minutes,
        options.avg_speed_kmh,
    );

    let ordered_tasks = route
        .iter()
        .enumerate()
        .map(|(position, &task_index)| {
            let mut task = tasks[task_index].clone();
            task.route_order = position as u32 + 1;
            task
        })
        .collect();

    OptimizedRoute {
        tasks: ordered_tasks,
        total_distance: round_tenth(optimized_km),
        total_time: optimized_minutes.round() as i64,
        savings: savings(
            baseline_km,
            baseline_minutes,
            optimized_km,
            optimized_minutes,
            &options.fuel,
        ),
        path,
    }
}

/// Optimizes each team's tasks independently.
///
/// Teams share no state, so they run in parallel. Grouping keeps each
/// team's tasks in their input order, which fixes the savings baseline.
pub fn optimize_teams<L>(
    tasks: &[Task],
    lookup: &L,
    options: &OptimizeOptions,
) -> HashMap<String, OptimizedRoute>
where
    L: LocationLookup + Sync,
{
    let mut teams: Vec<(String, Vec<Task>)> = Vec::new();
    for task in tasks {
        match teams.iter_mut().find(|(team, _)| *team == task.assigned_team) {
            Some((_, group)) => group.push(task.clone()),
            None => teams.push((task.assigned_team.clone(), vec![task.clone()])),
        }
    }

    teams
        .into_par_iter()
        .map(|(team, group)| (team, optimize(&group, lookup, options)))
        .collect()
}
