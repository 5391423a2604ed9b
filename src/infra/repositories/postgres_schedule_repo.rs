use crate::domain::{models::schedule::{AvailabilityRule, Blackout}, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::{DateTime, Utc};

pub struct PostgresScheduleRepo {
    pool: PgPool,
}

impl PostgresScheduleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepo {
    async fn create_rule(&self, rule: &AvailabilityRule) -> Result<AvailabilityRule, AppError> {
        sqlx::query_as::<_, AvailabilityRule>(
            "INSERT INTO availability_rules (id, venue_id, day_of_week, open_time, close_time, created_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
        )
            .bind(&rule.id).bind(&rule.venue_id).bind(rule.day_of_week)
            .bind(&rule.open_time).bind(&rule.close_time).bind(rule.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_rules(&self, venue_id: &str) -> Result<Vec<AvailabilityRule>, AppError> {
        sqlx::query_as::<_, AvailabilityRule>("SELECT * FROM availability_rules WHERE venue_id = $1 ORDER BY day_of_week ASC, open_time ASC").bind(venue_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete_rule(&self, venue_id: &str, rule_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM availability_rules WHERE id = $1 AND venue_id = $2").bind(rule_id).bind(venue_id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Availability rule not found".into())); }
        Ok(())
    }

    async fn create_blackout(&self, blackout: &Blackout) -> Result<Blackout, AppError> {
        sqlx::query_as::<_, Blackout>(
            "INSERT INTO blackouts (id, venue_id, start_time, end_time, reason, created_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
        )
            .bind(&blackout.id).bind(&blackout.venue_id).bind(blackout.start_time)
            .bind(blackout.end_time).bind(&blackout.reason).bind(blackout.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_blackouts(&self, venue_id: &str) -> Result<Vec<Blackout>, AppError> {
        sqlx::query_as::<_, Blackout>("SELECT * FROM blackouts WHERE venue_id = $1 ORDER BY start_time ASC").bind(venue_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_blackouts_in_range(&self, venue_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Blackout>, AppError> {
        sqlx::query_as::<_, Blackout>("SELECT * FROM blackouts WHERE venue_id = $1 AND start_time < $2 AND end_time > $3").bind(venue_id).bind(end).bind(start).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete_blackout(&self, venue_id: &str, blackout_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blackouts WHERE id = $1 AND venue_id = $2").bind(blackout_id).bind(venue_id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Blackout not found".into())); }
        Ok(())
    }
}
