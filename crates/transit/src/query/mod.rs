//! Queries over a loaded schedule.

pub mod departures;
pub mod schedule;

pub use departures::{
    departure_order, departures, departures_at, next_departures, upcoming_count, Departure,
    DepartureQuery, DepartureStatus, StationBoard,
};
pub use schedule::{
    filter_trips, itinerary, schedule, schedule_at, search_stations, ScheduleEntry, StopDetail,
    TripFilter,
};
