use crate::domain::{models::venue::{Venue, VenuePackage}, ports::VenueRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresVenueRepo {
    pool: PgPool,
}

impl PostgresVenueRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for PostgresVenueRepo {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError> {
        sqlx::query_as::<_, Venue>(
            "INSERT INTO venues (id, host_id, name, description, address, capacity, min_booking_minutes, max_booking_minutes, buffer_minutes, base_hourly_price_egp, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *"
        )
            .bind(&venue.id).bind(&venue.host_id).bind(&venue.name).bind(&venue.description)
            .bind(&venue.address).bind(venue.capacity).bind(venue.min_booking_minutes)
            .bind(venue.max_booking_minutes).bind(venue.buffer_minutes).bind(venue.base_hourly_price_egp)
            .bind(&venue.status).bind(venue.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_active(&self) -> Result<Vec<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE status = 'ACTIVE' ORDER BY created_at ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_host(&self, host_id: &str) -> Result<Vec<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE host_id = $1 ORDER BY created_at ASC").bind(host_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, venue: &Venue) -> Result<Venue, AppError> {
        sqlx::query_as::<_, Venue>(
            "UPDATE venues SET name=$1, description=$2, address=$3, capacity=$4, min_booking_minutes=$5, max_booking_minutes=$6, buffer_minutes=$7, base_hourly_price_egp=$8, status=$9
             WHERE id=$10
             RETURNING *"
        )
            .bind(&venue.name).bind(&venue.description).bind(&venue.address).bind(venue.capacity)
            .bind(venue.min_booking_minutes).bind(venue.max_booking_minutes).bind(venue.buffer_minutes)
            .bind(venue.base_hourly_price_egp).bind(&venue.status).bind(&venue.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, host_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1 AND host_id = $2").bind(id).bind(host_id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Venue not found".into())); }
        Ok(())
    }

    async fn create_package(&self, package: &VenuePackage) -> Result<VenuePackage, AppError> {
        sqlx::query_as::<_, VenuePackage>(
            "INSERT INTO venue_packages (id, venue_id, name, hourly_price_egp, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING *"
        )
            .bind(&package.id).bind(&package.venue_id).bind(&package.name)
            .bind(package.hourly_price_egp).bind(package.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_package(&self, venue_id: &str, package_id: &str) -> Result<Option<VenuePackage>, AppError> {
        sqlx::query_as::<_, VenuePackage>("SELECT * FROM venue_packages WHERE venue_id = $1 AND id = $2").bind(venue_id).bind(package_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_packages(&self, venue_id: &str) -> Result<Vec<VenuePackage>, AppError> {
        sqlx::query_as::<_, VenuePackage>("SELECT * FROM venue_packages WHERE venue_id = $1 ORDER BY created_at ASC").bind(venue_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete_package(&self, venue_id: &str, package_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM venue_packages WHERE id = $1 AND venue_id = $2").bind(package_id).bind(venue_id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Package not found".into())); }
        Ok(())
    }
}
