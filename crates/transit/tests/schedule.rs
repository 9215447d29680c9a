use caltrain_transit::prelude::*;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const SAMPLE: &str = include_str!("fixtures/sample_schedule.json");

fn model() -> ScheduleModel {
    ScheduleModel::from_json(SAMPLE).expect("sample schedule should load")
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn clock_at(utc: DateTime<Utc>, local: NaiveDate) -> ServiceClock<FixedClock> {
    ServiceClock::new(FixedClock::new(utc, local), ScheduleConfig::default())
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn numbers(departures: &[Departure]) -> Vec<&str> {
    departures.iter().map(|d| &*d.trip.number).collect()
}

#[test]
fn loads_stations_in_dataset_order() {
    let model = model();

    let names: Vec<&str> = model.all_stations().iter().map(|s| &*s.name).collect();
    assert_eq!(
        names,
        ["San Francisco", "Millbrae", "Palo Alto", "Mountain View", "San Jose Diridon", "Gilroy"]
    );
    assert!(model.all_stations().iter().enumerate().all(|(i, s)| s.order == i));
    assert_eq!(model.all_trips().len(), 8);

    let trip = model.get_trip("403").unwrap();
    let stop_ids: Vec<&str> = trip.stops.iter().map(|s| s.station_id.as_str()).collect();
    assert_eq!(stop_ids, ["sj", "palo_alto", "sf"]);
    assert!(model.get_station("unknown-id").is_none());
}

#[test]
fn weekday_morning_board() {
    let model = model();
    // 13:50 UTC is 06:50 service time
    let clock = clock_at(utc(2024, 6, 3, 13, 50), monday());
    assert_eq!(clock.current_minutes(), 410);
    assert_eq!(clock.current_service_type(), ServiceType::Weekday);

    let query = DepartureQuery::new("palo_alto", clock.current_service_type());
    let board = StationBoard::build(&model, &clock, &query).unwrap();

    assert_eq!(numbers(&board.departures), ["403", "208", "199", "102", "101"]);
    let minutes: Vec<i32> = board.departures.iter().map(|d| d.minutes_away).collect();
    assert_eq!(minutes, [25, 78, 1070, -55, -6]);
    assert_eq!(board.upcoming, 3);

    let config = clock.config();
    let countdowns: Vec<Option<String>> = board
        .departures
        .iter()
        .map(|d| d.status(config).countdown())
        .collect();
    assert_eq!(
        countdowns,
        [Some("in 25 min".to_string()), Some("in 78 min".to_string()), None, None, None]
    );

    let northbound = departures(&model, &clock, &query.clone().direction(Direction::Northbound));
    assert_eq!(numbers(&northbound), ["403", "102"]);
    assert!(northbound.iter().all(|d| d.trip.direction == Direction::Northbound));

    let card = next_departures(&model, &clock, &query, 2);
    assert_eq!(numbers(&card), ["403", "208"]);
}

#[test]
fn late_night_wraps_to_tomorrow() {
    let model = model();
    // 06:50 UTC Tuesday is 23:50 Monday service time
    let clock = clock_at(utc(2024, 6, 4, 6, 50), monday());
    assert_eq!(clock.current_minutes(), 1430);

    let query = DepartureQuery::new("sf", ServiceType::Weekday);
    let list = departures(&model, &clock, &query);

    assert_eq!(numbers(&list), ["199", "101", "102", "208", "403"]);
    assert_eq!(list[0].minutes_away, 5);
    assert_eq!(list[1].minutes_away, 368);
}

#[test]
fn weekend_service() {
    let model = model();
    let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
    let clock = clock_at(utc(2024, 6, 8, 15, 0), saturday);
    assert_eq!(clock.current_service_type(), ServiceType::Weekend);

    let query = DepartureQuery::new("sf", clock.current_service_type());
    let list = departures(&model, &clock, &query);

    assert_eq!(numbers(&list), ["421", "422"]);
    assert!(list.iter().all(|d| d.trip.service_type == ServiceType::Weekend));
    assert_eq!(list[1].status(clock.config()), DepartureStatus::Scheduled);
}

#[test]
fn schedule_listing() {
    let model = model();
    let clock = clock_at(utc(2024, 6, 3, 13, 50), monday());

    let filter = TripFilter::new(ServiceType::Weekday).direction(Direction::Southbound);
    let entries = schedule(&model, &clock, &filter);
    let rows: Vec<(&str, i32)> = entries
        .iter()
        .map(|e| (e.trip.id.as_str(), e.minutes_away))
        .collect();
    assert_eq!(rows, [("101", -52), ("208", 40), ("804", 580), ("199", 1025)]);

    let express = filter_trips(&model, &TripFilter::new(ServiceType::Weekday).search("express"));
    assert_eq!(express.len(), 1);
    assert_eq!(&*express[0].number, "403");
}

#[test]
fn trip_details() {
    let model = model();

    let categories: Vec<RouteCategory> = ["101", "403", "208", "804"]
        .iter()
        .map(|id| model.get_trip(id).unwrap().route_category())
        .collect();
    assert_eq!(
        categories,
        [
            RouteCategory::Local,
            RouteCategory::Express,
            RouteCategory::Limited,
            RouteCategory::SouthCounty
        ]
    );
    assert_eq!(route_label("South County Connector"), "South County");
    assert_eq!(route_color("Express"), "#ce202f");

    let owl = model.get_trip("199").unwrap();
    assert_eq!(owl.duration_minutes(), Some(70));
    assert_eq!(format_time(&owl.origin().unwrap().time).unwrap(), "11:55 PM");
    assert_eq!(owl.direction.label(), "Southbound");

    let stops = itinerary(&model, "804").unwrap();
    let names: Vec<&str> = stops
        .iter()
        .map(|s| s.station.as_deref().map_or("?", |st| &*st.name))
        .collect();
    assert_eq!(names, ["San Jose Diridon", "Gilroy"]);
    assert!(stops[1].is_terminus);
}

#[test]
fn station_search() {
    let model = model();
    let ids: Vec<String> = search_stations(&model, "san")
        .iter()
        .map(|s| s.id.to_string())
        .collect();
    assert_eq!(ids, ["sf", "sj"]);
    assert_eq!(search_stations(&model, "").len(), 6);
}
