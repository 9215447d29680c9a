//! Schedule data models, types, and traits.

pub mod calendar;
pub mod route;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use calendar::{ServiceType, WeekdayFlags};
pub use route::{route_color, route_label, RouteCategory};
pub use traits::ScheduleProvider;
pub use types::{Direction, Result, ScheduleError, Station, Trip, TripStop};
