//! # caltrain-transit
//!
//! Offline commuter-rail schedule lookup.
//!
//! ## Features
//!
//! - **Compact dataset loading**: stations listed once, stops referencing them by index
//! - **Departure boards**: next departures per station with midnight wraparound
//! - **Schedule listings**: trips per service day and direction, with free-text search
//! - **Route classification**: local, limited, express and south-county service
//!
//! ## Example
//!
//! ```
//! use caltrain_transit::prelude::*;
//!
//! let model = ScheduleModel::from_json(r##"{
//!     "stations": [
//!         {"id": "sf", "n": "San Francisco", "lat": 37.7764, "lon": -122.3942},
//!         {"id": "sj", "n": "San Jose Diridon", "lat": 37.3297, "lon": -121.9026}
//!     ],
//!     "trips": [
//!         {"id": "t101", "n": "101", "h": "San Jose Diridon", "d": 1, "r": "Local Weekday",
//!          "c": "#e31837", "s": "w", "st": [[0, "05:58"], [1, "07:05"]]}
//!     ]
//! }"##).unwrap();
//!
//! // Departures from San Francisco at 05:30 service time
//! let query = DepartureQuery::new("sf", ServiceType::Weekday);
//! let departures = departures_at(&model, &query, 330, 60);
//! assert_eq!(departures.len(), 1);
//! assert_eq!(departures[0].minutes_away, 28);
//! assert_eq!(format_time(&departures[0].time).unwrap(), "5:58 AM");
//! assert_eq!(departures[0].trip.route_category().label(), "Local");
//! ```

pub mod config;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod query;
pub mod time;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::ScheduleConfig;
    pub use crate::identifiers::*;
    pub use crate::models::{calendar::*, route::*, traits::*, types::*};
    pub use crate::provider::{load_schedule, load_schedule_with, RawSchedule, ScheduleModel};
    pub use crate::query::*;
    pub use crate::time::{
        format_time, minutes_away, parse_time, Clock, FixedClock, ServiceClock, SystemClock,
    };
}

// Module declarations
pub use prelude::*;
