//! Sources of "now".
//!
//! Service minutes come from UTC shifted by a fixed offset, while the
//! weekday/weekend choice follows the device's local calendar date. The two
//! can disagree in the hours around local midnight.

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};

use crate::config::ScheduleConfig;
use crate::models::calendar::ServiceType;
use crate::time::MINUTES_PER_DAY;

/// Pluggable time source
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    /// Calendar date on the device's local clock
    fn local_date(&self) -> NaiveDate;
}

/// Wall clock of the running process
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_date(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a given instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    pub utc: DateTime<Utc>,
    pub local_date: NaiveDate,
}

impl FixedClock {
    pub fn new(utc: DateTime<Utc>, local_date: NaiveDate) -> Self {
        Self { utc, local_date }
    }

    /// Local date taken to be the UTC date
    pub fn at(utc: DateTime<Utc>) -> Self {
        Self::new(utc, utc.date_naive())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.utc
    }

    fn local_date(&self) -> NaiveDate {
        self.local_date
    }
}

/// Minutes since midnight of `utc` shifted by `offset_minutes`, in `[0, 1440)`.
pub fn service_minutes_at(utc: DateTime<Utc>, offset_minutes: i32) -> i32 {
    let utc_minutes = i64::from(utc.hour() * 60 + utc.minute());
    // rem_euclid keeps the result in [0, 1440), so the cast is lossless
    (utc_minutes + i64::from(offset_minutes)).rem_euclid(i64::from(MINUTES_PER_DAY)) as i32
}

/// A clock paired with the schedule's time conventions
#[derive(Clone, Debug, Default)]
pub struct ServiceClock<C: Clock = SystemClock> {
    clock: C,
    config: ScheduleConfig,
}

impl ServiceClock<SystemClock> {
    pub fn system() -> Self {
        Self::default()
    }
}

impl<C: Clock> ServiceClock<C> {
    pub fn new(clock: C, config: ScheduleConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Current minutes since midnight, service time
    pub fn current_minutes(&self) -> i32 {
        service_minutes_at(self.clock.now_utc(), self.config.utc_offset_minutes)
    }

    pub fn current_service_type(&self) -> ServiceType {
        ServiceType::for_date(self.clock.local_date())
    }
}
