//! In-memory schedule model.
//!
//! Holds every station and trip of one dataset with id-indexed lookup maps.
//! Built once by the loader and never mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};

/// Loaded schedule
///
/// This type is cheap to clone since all entities are stored in `Arc`s.
#[derive(Clone, Debug, Default)]
pub struct ScheduleModel {
    // Core data, in dataset order
    stations: Vec<Arc<Station>>,
    trips: Vec<Arc<Trip>>,

    // Lookup maps
    station_map: HashMap<StationIdentifier, Arc<Station>>,
    trip_map: HashMap<TripIdentifier, Arc<Trip>>,
}

impl ScheduleModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from already decoded entities
    pub fn from_data(stations: Vec<Station>, trips: Vec<Trip>) -> Self {
        let stations: Vec<Arc<Station>> = stations.into_iter().map(Arc::new).collect();
        let trips: Vec<Arc<Trip>> = trips.into_iter().map(Arc::new).collect();

        // Later stations shadow earlier ones with the same id
        let station_map: HashMap<_, _> = stations
            .iter()
            .map(|s| (s.id.clone(), s.clone()))
            .collect();

        // The first trip with a given id wins
        let mut trip_map = HashMap::with_capacity(trips.len());
        for trip in &trips {
            trip_map.entry(trip.id.clone()).or_insert_with(|| trip.clone());
        }

        Self {
            stations,
            trips,
            station_map,
            trip_map,
        }
    }
}

impl ScheduleProvider for ScheduleModel {
    fn get_station(&self, id: &str) -> Option<Arc<Station>> {
        self.station_map.get(id).cloned()
    }

    fn get_trip(&self, id: &str) -> Option<Arc<Trip>> {
        self.trip_map.get(id).cloned()
    }

    fn station_at(&self, index: usize) -> Option<Arc<Station>> {
        self.stations.get(index).cloned()
    }

    fn all_stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    fn all_trips(&self) -> &[Arc<Trip>] {
        &self.trips
    }
}
