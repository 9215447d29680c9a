//! Core data types for the schedule.

use std::fmt;
use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;
use crate::models::calendar::ServiceType;
use crate::models::route::RouteCategory;
use crate::time::parse_time;

// ============================================================================
// Enums
// ============================================================================

/// Travel direction of a trip (0 = northbound, 1 = southbound)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Northbound = 0,
    Southbound = 1,
}

impl Direction {
    /// Decode a raw direction code. Only `0` is northbound; every other
    /// value, including a missing one, is treated as southbound.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(0) => Self::Northbound,
            _ => Self::Southbound,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Northbound => "Northbound",
            Self::Southbound => "Southbound",
        }
    }

    /// SF Symbols name used by the iOS client
    pub fn icon(self) -> &'static str {
        match self {
            Self::Northbound => "arrow.up",
            Self::Southbound => "arrow.down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub location: Point,
    /// Position in the raw dataset, used as display order
    pub order: usize,
}

impl Station {
    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }
}

/// A scheduled call at a station. `time` is the raw "HH:MM" clock string and
/// may exceed 23 hours for service past midnight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripStop {
    pub station_id: StationIdentifier,
    pub time: Arc<str>,
}

impl TripStop {
    pub fn new(station_id: StationIdentifier, time: impl Into<Arc<str>>) -> Self {
        Self {
            station_id,
            time: time.into(),
        }
    }

    pub fn minutes(&self) -> Result<i32> {
        parse_time(&self.time)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub id: TripIdentifier,
    /// Public train number
    pub number: Arc<str>,
    pub headsign: Arc<str>,
    pub direction: Direction,
    pub route_name: Arc<str>,
    pub route_color: Arc<str>,
    pub service_type: ServiceType,
    /// Stops in travel order
    pub stops: Vec<TripStop>,
}

impl Trip {
    pub fn origin(&self) -> Option<&TripStop> {
        self.stops.first()
    }

    pub fn terminus(&self) -> Option<&TripStop> {
        self.stops.last()
    }

    /// First call at `station_id`. A trip is assumed to visit a station at
    /// most once.
    pub fn stop_at(&self, station_id: &str) -> Option<&TripStop> {
        self.stops.iter().find(|s| s.station_id == *station_id)
    }

    pub fn route_category(&self) -> RouteCategory {
        RouteCategory::classify(&self.route_name)
    }

    /// Minutes from origin to terminus. `None` for a trip without stops or
    /// with an unreadable origin/terminus time.
    pub fn duration_minutes(&self) -> Option<i32> {
        let first = self.origin()?.minutes().ok()?;
        let last = self.terminus()?.minutes().ok()?;
        last.checked_sub(first)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Station not found: {0}")]
    StationNotFound(StationIdentifier),

    #[error("Trip not found: {0}")]
    TripNotFound(TripIdentifier),

    #[error("Invalid clock time: {0:?}")]
    InvalidTime(String),

    #[error("Malformed schedule data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
