//! Tour metrics and savings versus the unoptimized baseline.

use serde::{Deserialize, Serialize};

use crate::types::{Savings, Task};

/// Fuel cost assumptions for the savings estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelModel {
    /// Crew vehicle fuel efficiency in km per liter.
    pub km_per_liter: f64,
    /// Fuel price per liter in currency units.
    pub price_per_liter: f64,
}

impl Default for FuelModel {
    fn default() -> Self {
        Self {
            km_per_liter: 10.0,
            price_per_liter: 1700.0,
        }
    }
}

/// Sum of consecutive edge distances along an open tour, in km.
pub fn tour_distance(route: &[usize], matrix: &[Vec<f64>]) -> f64 {
    route.windows(2).map(|leg| matrix[leg[0]][leg[1]]).sum()
}

/// Total travel plus service time along a tour, in minutes.
///
/// Travel is estimated at `speed_kmh` (urban driving); every stop
/// contributes its full service duration.
pub fn tour_minutes(route: &[usize], tasks: &[Task], matrix: &[Vec<f64>], speed_kmh: f64) -> f64 {
    let travel: f64 = route
        .windows(2)
        .map(|leg| matrix[leg[0]][leg[1]] / speed_kmh * 60.0)
        .sum();
    let service: f64 = route
        .iter()
        .map(|&task_index| f64::from(tasks[task_index].estimated_minutes))
        .sum();
    travel + service
}

/// Derives the savings record from baseline and optimized metrics.
///
/// A zero-distance baseline (single task, or all stops co-located) yields
/// a 0% reduction rather than dividing by zero.
pub fn savings(
    baseline_km: f64,
    baseline_minutes: f64,
    optimized_km: f64,
    optimized_minutes: f64,
    fuel: &FuelModel,
) -> Savings {
    let distance_reduction = if baseline_km > 0.0 {
        (baseline_km - optimized_km) / baseline_km * 100.0
    } else {
        0.0
    };

    let fuel_amount = (baseline_km - optimized_km) / fuel.km_per_liter * fuel.price_per_liter;

    Savings {
        distance_reduction: round_tenth(distance_reduction),
        time_reduction: (baseline_minutes - optimized_minutes).round() as i64,
        fuel_savings: format!("{}", (fuel_amount / 1000.0).round() as i64),
    }
}

/// Rounds to one decimal place, matching the dashboard's display precision.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
