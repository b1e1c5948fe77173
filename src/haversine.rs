//! Great-circle distances and the task distance matrix.
//!
//! Straight-line haversine distance stands in for road distance; at the
//! scale of one district (a few km between drains) the error is acceptable
//! for sequencing cleaning visits.

use crate::traits::LocationLookup;
use crate::types::Task;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance substituted when a task's device cannot be resolved to a
/// location. Large enough that nearest-neighbor defers such stops to the
/// end of the tour.
pub const UNRESOLVED_SENTINEL_KM: f64 = 999.0;

/// Haversine distance between two (lat, lng) points in kilometers.
///
/// Pure and symmetric; finite non-negative output for finite inputs.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Builds the n×n pairwise distance matrix for a task list.
///
/// `matrix[i][j]` is the km distance between task i's and task j's drains.
/// The diagonal is zero. If either endpoint fails to resolve, the entry is
/// `sentinel_km` instead of an error.
pub fn distance_matrix<L: LocationLookup>(
    tasks: &[Task],
    lookup: &L,
    sentinel_km: f64,
) -> Vec<Vec<f64>> {
    let n = tasks.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        let from = lookup.resolve(&tasks[i].device_id);
        for j in 0..n {
            if i == j {
                continue;
            }
            let to = lookup.resolve(&tasks[j].device_id);
            matrix[i][j] = match (from, to) {
                (Some(a), Some(b)) => haversine_km((a.lat, a.lng), (b.lat, b.lng)),
                _ => sentinel_km,
            };
        }
    }

    matrix
}
