//! Read-only access to a loaded schedule.
//!
//! Queries are written against this trait so they can run over the
//! in-memory model or any other backing store.

use std::sync::Arc;

use crate::models::types::{Station, Trip};

pub trait ScheduleProvider: Send + Sync {
    // ---- Lookups ----
    fn get_station(&self, id: &str) -> Option<Arc<Station>>;
    fn get_trip(&self, id: &str) -> Option<Arc<Trip>>;

    /// Station at its position in the raw dataset
    fn station_at(&self, index: usize) -> Option<Arc<Station>>;

    // ---- Collections ----

    /// Stations in dataset order
    fn all_stations(&self) -> &[Arc<Station>];

    /// Trips in dataset order
    fn all_trips(&self) -> &[Arc<Trip>];
}
