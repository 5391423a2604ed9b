use std::sync::Arc;
use chrono_tz::Tz;
use crate::config::Config;
use crate::domain::ports::{BookingRepository, ScheduleRepository, VenueRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Product timezone all "HH:MM" wall-clock inputs are interpreted in.
    pub timezone: Tz,
    pub venue_repo: Arc<dyn VenueRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
}
