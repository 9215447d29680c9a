//! Trip listings, station search and trip itineraries.

use std::sync::Arc;

use tracing::trace;

use crate::identifiers::TripIdentifier;
use crate::models::calendar::ServiceType;
use crate::models::traits::ScheduleProvider;
use crate::models::types::{Direction, Result, ScheduleError, Station, Trip};
use crate::time::{minutes_away, Clock, ServiceClock};

/// Stations whose name contains `query`, ignoring case. An empty query
/// returns every station in dataset order.
pub fn search_stations<P>(provider: &P, query: &str) -> Vec<Arc<Station>>
where
    P: ScheduleProvider + ?Sized,
{
    if query.is_empty() {
        return provider.all_stations().to_vec();
    }

    let needle = query.to_lowercase();
    provider
        .all_stations()
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripFilter<'a> {
    pub service_type: ServiceType,
    pub direction: Option<Direction>,
    /// Free-text search over train number, headsign and route name
    pub search: Option<&'a str>,
}

impl<'a> TripFilter<'a> {
    pub fn new(service_type: ServiceType) -> Self {
        Self {
            service_type,
            direction: None,
            search: None,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn search(mut self, search: &'a str) -> Self {
        self.search = Some(search);
        self
    }

    fn matches(&self, trip: &Trip, needle: Option<&str>) -> bool {
        if trip.service_type != self.service_type {
            return false;
        }
        if self.direction.is_some_and(|d| trip.direction != d) {
            return false;
        }
        match needle {
            // The train number is matched against the lower-cased query as is
            Some(q) => {
                trip.number.contains(q)
                    || trip.headsign.to_lowercase().contains(q)
                    || trip.route_name.to_lowercase().contains(q)
            }
            None => true,
        }
    }
}

// Trips without stops sort after every real clock time.
const NO_ORIGIN: &str = "99:99";

/// Trips matching `filter`, ordered by origin time.
pub fn filter_trips<P>(provider: &P, filter: &TripFilter<'_>) -> Vec<Arc<Trip>>
where
    P: ScheduleProvider + ?Sized,
{
    let needle = filter
        .search
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let mut trips: Vec<Arc<Trip>> = provider
        .all_trips()
        .iter()
        .filter(|t| filter.matches(t, needle.as_deref()))
        .cloned()
        .collect();

    trips.sort_by(|a, b| {
        let a_time = a.origin().map_or(NO_ORIGIN, |s| &*s.time);
        let b_time = b.origin().map_or(NO_ORIGIN, |s| &*s.time);
        a_time.cmp(b_time)
    });
    trips
}

/// One row of the schedule screen: a trip and its origin departure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub trip: Arc<Trip>,
    pub origin_time: Arc<str>,
    pub minutes_away: i32,
}

/// Schedule rows at `now`. Trips without stops, or with an unreadable
/// origin time, are left out.
pub fn schedule_at<P>(
    provider: &P,
    filter: &TripFilter<'_>,
    now: i32,
    past_grace: i32,
) -> Vec<ScheduleEntry>
where
    P: ScheduleProvider + ?Sized,
{
    let entries: Vec<ScheduleEntry> = filter_trips(provider, filter)
        .into_iter()
        .filter_map(|trip| {
            let origin = trip.origin()?;
            let origin_minutes = origin.minutes().ok()?;
            Some(ScheduleEntry {
                origin_time: origin.time.clone(),
                minutes_away: minutes_away(origin_minutes, now, past_grace),
                trip,
            })
        })
        .collect();

    trace!(service = %filter.service_type, count = entries.len(), "built schedule");
    entries
}

pub fn schedule<P, C>(
    provider: &P,
    clock: &ServiceClock<C>,
    filter: &TripFilter<'_>,
) -> Vec<ScheduleEntry>
where
    P: ScheduleProvider + ?Sized,
    C: Clock,
{
    schedule_at(
        provider,
        filter,
        clock.current_minutes(),
        clock.config().past_grace_minutes,
    )
}

/// A stop of a trip with its station resolved
#[derive(Clone, Debug, PartialEq)]
pub struct StopDetail {
    /// `None` when the stop's station id does not resolve
    pub station: Option<Arc<Station>>,
    pub time: Arc<str>,
    pub is_origin: bool,
    pub is_terminus: bool,
}

pub fn itinerary<P>(provider: &P, trip_id: &str) -> Result<Vec<StopDetail>>
where
    P: ScheduleProvider + ?Sized,
{
    let trip = provider
        .get_trip(trip_id)
        .ok_or_else(|| ScheduleError::TripNotFound(TripIdentifier::new(trip_id)))?;

    let last = trip.stops.len().saturating_sub(1);
    Ok(trip
        .stops
        .iter()
        .enumerate()
        .map(|(i, stop)| StopDetail {
            station: provider.get_station(stop.station_id.as_str()),
            time: stop.time.clone(),
            is_origin: i == 0,
            is_terminus: i == last,
        })
        .collect())
}
