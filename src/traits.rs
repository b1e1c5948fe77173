//! Collaborator seams for the route optimizer.
//!
//! These are intentionally minimal. The surrounding application owns the
//! sensor fleet and task generation; the optimizer only needs a way to turn
//! a device id into coordinates and, for the refresh loop, a way to pull
//! the current task snapshot.

use std::collections::HashMap;

use crate::types::{Location, Task};

/// Resolves a task's device id to the drain's location.
///
/// Returning `None` must be tolerated by callers: the matrix builder
/// substitutes a sentinel distance instead of failing, so unresolved
/// devices end up visited last rather than aborting the run.
pub trait LocationLookup {
    fn resolve(&self, device_id: &str) -> Option<&Location>;
}

impl LocationLookup for HashMap<String, Location> {
    fn resolve(&self, device_id: &str) -> Option<&Location> {
        self.get(device_id)
    }
}

impl<T: LocationLookup + ?Sized> LocationLookup for &T {
    fn resolve(&self, device_id: &str) -> Option<&Location> {
        (**self).resolve(device_id)
    }
}

/// Produces the current task list for the periodic refresh loop.
///
/// The dashboard's simulator regenerates tasks every few seconds; it sits
/// behind this trait so the optimizer never depends on how tasks are made.
pub trait TaskSnapshot {
    fn tasks(&self) -> Vec<Task>;
}
