use crate::domain::models::{
    booking::Booking,
    schedule::{AvailabilityRule, Blackout},
    venue::{Venue, VenuePackage},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError>;
    async fn list_active(&self) -> Result<Vec<Venue>, AppError>;
    async fn list_by_host(&self, host_id: &str) -> Result<Vec<Venue>, AppError>;
    async fn update(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn delete(&self, host_id: &str, id: &str) -> Result<(), AppError>;

    async fn create_package(&self, package: &VenuePackage) -> Result<VenuePackage, AppError>;
    async fn find_package(&self, venue_id: &str, package_id: &str) -> Result<Option<VenuePackage>, AppError>;
    async fn list_packages(&self, venue_id: &str) -> Result<Vec<VenuePackage>, AppError>;
    async fn delete_package(&self, venue_id: &str, package_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create_rule(&self, rule: &AvailabilityRule) -> Result<AvailabilityRule, AppError>;
    async fn list_rules(&self, venue_id: &str) -> Result<Vec<AvailabilityRule>, AppError>;
    async fn delete_rule(&self, venue_id: &str, rule_id: &str) -> Result<(), AppError>;

    async fn create_blackout(&self, blackout: &Blackout) -> Result<Blackout, AppError>;
    async fn list_blackouts(&self, venue_id: &str) -> Result<Vec<Blackout>, AppError>;
    async fn list_blackouts_in_range(&self, venue_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Blackout>, AppError>;
    async fn delete_blackout(&self, venue_id: &str, blackout_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a validated booking after re-running the buffered overlap
    /// check inside a per-venue serialized transaction. The second line of
    /// defense against concurrent double-booking.
    async fn create_checked(&self, booking: &Booking, buffer_minutes: i64) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_venue(&self, venue_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_by_guest(&self, guest_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_confirmed_in_range(&self, venue_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Booking>, AppError>;
    /// Idempotent: cancelling an already-cancelled booking is a no-op.
    async fn cancel(&self, id: &str) -> Result<Booking, AppError>;
}
