use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::domain::services::validator::BookingRejection;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use chrono::{DateTime, Duration, Utc};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_checked(&self, booking: &Booking, buffer_minutes: i64) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Serializes booking creation per venue; released at commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))").bind(&booking.venue_id).execute(&mut *tx).await.map_err(AppError::Database)?;

        let padded_start = booking.start_time - Duration::minutes(buffer_minutes);
        let padded_end = booking.end_time + Duration::minutes(buffer_minutes);

        let conflict = sqlx::query(
            "SELECT id FROM bookings WHERE venue_id = $1 AND status != 'CANCELLED' AND start_time < $2 AND end_time > $3 LIMIT 1"
        )
            .bind(&booking.venue_id).bind(padded_end).bind(padded_start)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;

        if let Some(row) = conflict {
            return Err(AppError::Rejected(BookingRejection::SchedulingConflict { booking_id: row.get("id") }));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, venue_id, guest_id, package_id, start_time, end_time, status, total_price_egp, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.venue_id).bind(&booking.guest_id).bind(&booking.package_id)
            .bind(booking.start_time).bind(booking.end_time).bind(&booking.status)
            .bind(booking.total_price_egp).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_venue(&self, venue_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE venue_id = $1 ORDER BY start_time ASC").bind(venue_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_guest(&self, guest_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE guest_id = $1 ORDER BY start_time ASC").bind(guest_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_confirmed_in_range(&self, venue_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE venue_id = $1 AND start_time < $2 AND end_time > $3 AND status != 'CANCELLED' ORDER BY start_time ASC").bind(venue_id).bind(end).bind(start).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = 'CANCELLED' WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }
}
