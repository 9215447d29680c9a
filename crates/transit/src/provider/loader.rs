//! Decoding of the compact schedule format.
//!
//! ```json
//! {
//!   "stations": [{"id": "sf", "n": "San Francisco", "lat": 37.77, "lon": -122.39}],
//!   "trips": [{"id": "101", "n": "101", "h": "San Francisco", "d": 0,
//!              "r": "Local Weekday", "c": "#e31837", "s": "w",
//!              "st": [[0, "05:58"]]}]
//! }
//! ```
//!
//! Stops refer to stations by their position in `stations`. Record contents
//! are not validated: missing fields decode as empty values and station
//! indices that do not resolve become placeholder ids.

use geo::Point;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::config::ScheduleConfig;
use crate::identifiers::*;
use crate::models::calendar::ServiceType;
use crate::models::types::{Direction, Result, Station, Trip, TripStop};
use crate::provider::static_provider::ScheduleModel;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSchedule {
    #[serde(deserialize_with = "null_as_default")]
    pub stations: Vec<RawStation>,
    #[serde(deserialize_with = "null_as_default")]
    pub trips: Vec<RawTrip>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawStation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub n: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTrip {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Train number
    #[serde(deserialize_with = "null_as_default")]
    pub n: String,
    /// Headsign
    #[serde(deserialize_with = "null_as_default")]
    pub h: String,
    /// Direction code
    pub d: Option<i64>,
    /// Route name
    #[serde(deserialize_with = "null_as_default")]
    pub r: String,
    /// Route color
    #[serde(deserialize_with = "null_as_default")]
    pub c: String,
    /// Service code
    #[serde(deserialize_with = "null_as_default")]
    pub s: String,
    /// `(station index, "HH:MM")` pairs in travel order
    #[serde(deserialize_with = "null_as_default")]
    pub st: Vec<RawStop>,
}

/// An explicit `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawStop(pub i64, pub String);

impl RawSchedule {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Build a model using the default configuration.
pub fn load_schedule(raw: RawSchedule) -> ScheduleModel {
    load_schedule_with(raw, &ScheduleConfig::default())
}

pub fn load_schedule_with(raw: RawSchedule, config: &ScheduleConfig) -> ScheduleModel {
    let stations: Vec<Station> = raw
        .stations
        .into_iter()
        .enumerate()
        .map(|(order, s)| Station {
            id: StationIdentifier::new(s.id),
            name: s.n.into(),
            location: Point::new(s.lon, s.lat),
            order,
        })
        .collect();

    let mut unresolved = 0usize;
    let trips: Vec<Trip> = raw
        .trips
        .into_iter()
        .map(|t| {
            let stops = t
                .st
                .into_iter()
                .map(|RawStop(index, time)| {
                    let station_id = usize::try_from(index)
                        .ok()
                        .and_then(|i| stations.get(i))
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| {
                            warn!(trip = %t.id, index, "stop references unknown station");
                            unresolved += 1;
                            StationIdentifier::default()
                        });
                    TripStop::new(station_id, time)
                })
                .collect();

            Trip {
                id: TripIdentifier::new(&t.id),
                number: t.n.into(),
                headsign: t.h.into(),
                direction: Direction::from_code(t.d),
                route_name: t.r.into(),
                route_color: t.c.into(),
                service_type: ServiceType::from_code(&t.s, &config.weekday_code),
                stops,
            }
        })
        .collect();

    debug!(
        stations = stations.len(),
        trips = trips.len(),
        unresolved_stops = unresolved,
        "loaded schedule"
    );

    ScheduleModel::from_data(stations, trips)
}

impl ScheduleModel {
    /// Decode and load a JSON schedule.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(load_schedule(RawSchedule::from_json(json)?))
    }

    pub fn from_json_with(json: &str, config: &ScheduleConfig) -> Result<Self> {
        Ok(load_schedule_with(RawSchedule::from_json(json)?, config))
    }
}
