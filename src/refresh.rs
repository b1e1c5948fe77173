//! Periodic re-optimization loop.
//!
//! The dashboard regenerates its task snapshot every few seconds and wants
//! fresh per-team routes each tick. The loop is plain thread-plus-channel:
//! each optimization run is a pure function, so there is nothing to share
//! between cycles.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::optimizer::{optimize_teams, OptimizeOptions};
use crate::traits::{LocationLookup, TaskSnapshot};
use crate::types::OptimizedRoute;

/// Output of one refresh cycle.
#[derive(Debug, Clone)]
pub struct RouteUpdate {
    /// Optimized route per team, keyed by assigned team name.
    pub routes: HashMap<String, OptimizedRoute>,
    /// Number of tasks in the snapshot the routes were built from.
    pub task_count: usize,
}

/// Spawns a background loop that re-optimizes on a fixed interval.
///
/// Each cycle pulls a fresh snapshot, optimizes every team, and sends a
/// `RouteUpdate` downstream. The loop exits once the receiver is dropped.
pub fn spawn_refresh<S, L>(
    source: S,
    lookup: L,
    options: OptimizeOptions,
    interval: Duration,
) -> (Receiver<RouteUpdate>, JoinHandle<()>)
where
    S: TaskSnapshot + Send + 'static,
    L: LocationLookup + Sync + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            let tasks = source.tasks();
            let routes = optimize_teams(&tasks, &lookup, &options);
            debug!(
                teams = routes.len(),
                tasks = tasks.len(),
                "refresh cycle complete"
            );

            let update = RouteUpdate {
                routes,
                task_count: tasks.len(),
            };
            if tx.send(update).is_err() {
                debug!("route consumer gone, stopping refresh loop");
                break;
            }

            thread::sleep(interval);
        }
    });

    (rx, handle)
}
