//! drain-router core
//!
//! Cleaning-crew route optimization for a storm-drain monitoring dashboard:
//! pairwise haversine distances, nearest-neighbor tour construction, 2-opt
//! improvement, priority front-loading, and savings/schedule reporting.

pub mod traits;
pub mod types;
pub mod haversine;
pub mod tour;
pub mod evaluate;
pub mod schedule;
pub mod optimizer;
pub mod refresh;
pub mod weather;
