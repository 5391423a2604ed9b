use venue_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_venue_repo::SqliteVenueRepo,
        sqlite_schedule_repo::SqliteScheduleRepo,
        sqlite_booking_repo::SqliteBookingRepo,
    },
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_timezone("UTC").await
    }

    pub async fn with_timezone(timezone: &str) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            venue_timezone: timezone.to_string(),
        };

        let state = Arc::new(AppState {
            config,
            timezone: timezone.parse().expect("Invalid test timezone"),
            venue_repo: Arc::new(SqliteVenueRepo::new(pool.clone())),
            schedule_repo: Arc::new(SqliteScheduleRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn put_json(&self, uri: &str, body: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn delete(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    /// Creates an active venue for `host-1` and returns its id.
    pub async fn create_venue(&self, payload: Value) -> String {
        let response = self.post_json("/api/v1/hosts/host-1/venues", payload).await;
        assert!(response.status().is_success(), "venue creation failed: {}", response.status());
        parse_body(response).await["id"].as_str().unwrap().to_string()
    }

    /// Adds a weekly availability rule to a venue owned by `host-1`.
    pub async fn add_rule(&self, venue_id: &str, day_of_week: i32, open: &str, close: &str) {
        let response = self.post_json(
            &format!("/api/v1/hosts/host-1/venues/{}/availability-rules", venue_id),
            serde_json::json!({
                "day_of_week": day_of_week,
                "open_time": open,
                "close_time": close
            }),
        ).await;
        assert!(response.status().is_success(), "rule creation failed: {}", response.status());
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
