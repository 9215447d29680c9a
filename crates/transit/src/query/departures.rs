//! Upcoming departures from a station.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::config::ScheduleConfig;
use crate::identifiers::StationIdentifier;
use crate::models::calendar::ServiceType;
use crate::models::traits::ScheduleProvider;
use crate::models::types::{Direction, Result, ScheduleError, Station, Trip};
use crate::time::{minutes_away, Clock, ServiceClock};

/// A trip calling at the queried station
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Departure {
    pub trip: Arc<Trip>,
    /// Scheduled "HH:MM" at the station
    pub time: Arc<str>,
    /// Negative for departures up to the grace window in the past
    pub minutes_away: i32,
}

impl Departure {
    pub fn is_past(&self) -> bool {
        self.minutes_away < 0
    }

    pub fn status(&self, config: &ScheduleConfig) -> DepartureStatus {
        DepartureStatus::from_minutes(self.minutes_away, config)
    }
}

/// How a departure should be presented relative to now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepartureStatus {
    Past,
    DepartingNow,
    DueIn { minutes: i32, imminent: bool },
    /// Beyond the countdown horizon
    Scheduled,
}

impl DepartureStatus {
    pub fn from_minutes(minutes_away: i32, config: &ScheduleConfig) -> Self {
        match minutes_away {
            m if m < 0 => Self::Past,
            0 => Self::DepartingNow,
            m if m <= config.countdown_horizon_minutes => Self::DueIn {
                minutes: m,
                imminent: m <= config.imminent_minutes,
            },
            _ => Self::Scheduled,
        }
    }

    /// Countdown text, if one should be shown
    pub fn countdown(&self) -> Option<String> {
        match self {
            Self::DepartingNow => Some("Departing now".to_string()),
            Self::DueIn { minutes, .. } => Some(format!("in {minutes} min")),
            Self::Past | Self::Scheduled => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepartureQuery<'a> {
    pub station_id: &'a str,
    pub service_type: ServiceType,
    /// `None` returns both directions
    pub direction: Option<Direction>,
}

impl<'a> DepartureQuery<'a> {
    pub fn new(station_id: &'a str, service_type: ServiceType) -> Self {
        Self {
            station_id,
            service_type,
            direction: None,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    fn matches(&self, trip: &Trip) -> bool {
        trip.service_type == self.service_type
            && self.direction.map_or(true, |d| trip.direction == d)
    }
}

/// Upcoming-first ordering: non-negative values ascending, then negative
/// values ascending.
pub fn departure_order(a: i32, b: i32) -> Ordering {
    (a < 0).cmp(&(b < 0)).then(a.cmp(&b))
}

/// Departures at `now` (service minutes since midnight).
pub fn departures_at<P>(
    provider: &P,
    query: &DepartureQuery<'_>,
    now: i32,
    past_grace: i32,
) -> Vec<Departure>
where
    P: ScheduleProvider + ?Sized,
{
    let mut departures: Vec<Departure> = provider
        .all_trips()
        .iter()
        .filter(|trip| query.matches(trip))
        .filter_map(|trip| {
            let stop = trip.stop_at(query.station_id)?;
            match stop.minutes() {
                Ok(stop_minutes) => Some(Departure {
                    trip: trip.clone(),
                    time: stop.time.clone(),
                    minutes_away: minutes_away(stop_minutes, now, past_grace),
                }),
                Err(err) => {
                    warn!(trip = %trip.id, station = query.station_id, %err, "skipping stop");
                    None
                }
            }
        })
        .collect();

    departures.sort_by(|a, b| departure_order(a.minutes_away, b.minutes_away));

    trace!(
        station = query.station_id,
        service = %query.service_type,
        count = departures.len(),
        "computed departures"
    );
    departures
}

/// Departures as of the clock's current time.
pub fn departures<P, C>(
    provider: &P,
    clock: &ServiceClock<C>,
    query: &DepartureQuery<'_>,
) -> Vec<Departure>
where
    P: ScheduleProvider + ?Sized,
    C: Clock,
{
    departures_at(
        provider,
        query,
        clock.current_minutes(),
        clock.config().past_grace_minutes,
    )
}

/// The first `n` departures, as shown on a station card.
pub fn next_departures<P, C>(
    provider: &P,
    clock: &ServiceClock<C>,
    query: &DepartureQuery<'_>,
    n: usize,
) -> Vec<Departure>
where
    P: ScheduleProvider + ?Sized,
    C: Clock,
{
    let mut list = departures(provider, clock, query);
    list.truncate(n);
    list
}

pub fn upcoming_count(departures: &[Departure]) -> usize {
    departures.iter().filter(|d| !d.is_past()).count()
}

/// Everything a station screen shows
#[derive(Clone, Debug)]
pub struct StationBoard {
    pub station: Arc<Station>,
    pub departures: Vec<Departure>,
    pub upcoming: usize,
}

impl StationBoard {
    pub fn at<P>(
        provider: &P,
        query: &DepartureQuery<'_>,
        now: i32,
        past_grace: i32,
    ) -> Result<Self>
    where
        P: ScheduleProvider + ?Sized,
    {
        let station = provider.get_station(query.station_id).ok_or_else(|| {
            ScheduleError::StationNotFound(StationIdentifier::new(query.station_id))
        })?;
        let departures = departures_at(provider, query, now, past_grace);
        let upcoming = upcoming_count(&departures);

        Ok(Self {
            station,
            departures,
            upcoming,
        })
    }

    pub fn build<P, C>(
        provider: &P,
        clock: &ServiceClock<C>,
        query: &DepartureQuery<'_>,
    ) -> Result<Self>
    where
        P: ScheduleProvider + ?Sized,
        C: Clock,
    {
        Self::at(
            provider,
            query,
            clock.current_minutes(),
            clock.config().past_grace_minutes,
        )
    }
}
