use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::domain::services::validator::BookingRejection;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqliteConnection, SqlitePool};
use chrono::{DateTime, Duration, Utc};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Overlap re-check + insert, run inside an already-open write transaction.
async fn insert_guarded(conn: &mut SqliteConnection, booking: &Booking, buffer_minutes: i64) -> Result<Booking, AppError> {
    let padded_start = booking.start_time - Duration::minutes(buffer_minutes);
    let padded_end = booking.end_time + Duration::minutes(buffer_minutes);

    let conflict = sqlx::query(
        "SELECT id FROM bookings WHERE venue_id = ? AND status != 'CANCELLED' AND start_time < ? AND end_time > ? LIMIT 1"
    )
        .bind(&booking.venue_id).bind(padded_end).bind(padded_start)
        .fetch_optional(&mut *conn).await.map_err(AppError::Database)?;

    if let Some(row) = conflict {
        return Err(AppError::Rejected(BookingRejection::SchedulingConflict { booking_id: row.get("id") }));
    }

    sqlx::query_as::<_, Booking>(
        "INSERT INTO bookings (id, venue_id, guest_id, package_id, start_time, end_time, status, total_price_egp, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING *"
    )
        .bind(&booking.id).bind(&booking.venue_id).bind(&booking.guest_id).bind(&booking.package_id)
        .bind(booking.start_time).bind(booking.end_time).bind(&booking.status)
        .bind(booking.total_price_egp).bind(booking.created_at)
        .fetch_one(&mut *conn).await.map_err(AppError::Database)
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create_checked(&self, booking: &Booking, buffer_minutes: i64) -> Result<Booking, AppError> {
        let mut conn = self.pool.acquire().await.map_err(AppError::Database)?;

        // BEGIN IMMEDIATE takes the write lock up front, so the re-check and
        // the insert observe the same committed state (single SQLite writer).
        sqlx::query("BEGIN IMMEDIATE").execute(&mut *conn).await.map_err(AppError::Database)?;
        match insert_guarded(&mut conn, booking, buffer_minutes).await {
            Ok(created) => {
                sqlx::query("COMMIT").execute(&mut *conn).await.map_err(AppError::Database)?;
                Ok(created)
            }
            Err(e) => {
                let _ = sqlx::query("ROLLBACK").execute(&mut *conn).await;
                Err(e)
            }
        }
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_venue(&self, venue_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE venue_id = ? ORDER BY start_time ASC").bind(venue_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_guest(&self, guest_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE guest_id = ? ORDER BY start_time ASC").bind(guest_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_confirmed_in_range(&self, venue_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE venue_id = ? AND start_time < ? AND end_time > ? AND status != 'CANCELLED' ORDER BY start_time ASC").bind(venue_id).bind(end).bind(start).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = 'CANCELLED' WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }
}
