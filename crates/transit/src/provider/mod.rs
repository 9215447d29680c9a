//! Schedule loading and storage.

pub mod loader;
pub mod static_provider;

pub use loader::{load_schedule, load_schedule_with, RawSchedule, RawStation, RawStop, RawTrip};
pub use static_provider::ScheduleModel;
