//! # vaxportal: School Vaccination Portal
//!
//! `vaxportal` is a record-keeping service for school vaccination programmes. It manages the
//! student roster, scheduled vaccination drives, and the links between the two, and exposes a
//! dashboard summary plus a filterable vaccination report over a RESTful JSON API.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses SQLite (through sqlx) for persistence, so a single binary with a database file is a
//! complete deployment. Migrations run automatically on startup.
//!
//! The **API layer** ([`api`]) mounts the resource handlers under `/api`: students (roster,
//! bulk import, vaccination recording), vaccination drives, the dashboard summary, and the
//! report queries. The **database layer** ([`db`]) uses the repository pattern; each table has
//! a repository handling queries and constraint-violation classification. The **view layer**
//! ([`view`]) is a pure in-memory filter/sort/paginate engine for table screens, shared by any
//! frontend driving the API.
//!
//! Schema constraints do the duplicate policing: a UNIQUE index on the drive date and on the
//! (student, drive) link pair means concurrent duplicates lose at the database rather than
//! slipping past an application-level existence check.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use vaxportal::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = vaxportal::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     vaxportal::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;
pub mod view;

use crate::{
    api::handlers::{dashboard, drives, report, students},
    openapi::ApiDoc,
};
use axum::{
    routing::{get, post, put},
    Json, Router,
};
pub use config::Config;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use utoipa::OpenApi;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Get the vaxportal database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

async fn healthz() -> &'static str {
    "ok"
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    // The drive routes answer under both names the screens use
    let drive_routes = Router::new()
        .route("/", get(drives::list_drives).post(drives::create_drive))
        .route("/{id}", put(drives::update_drive));

    let api = Router::new()
        .route("/dashboard/summary", get(dashboard::summary))
        .route("/students", get(students::list_students).post(students::create_student))
        .route("/students/bulk", post(students::bulk_import))
        .route("/students/{id}", put(students::update_student))
        .route("/students/{id}/vaccinate", post(students::vaccinate_student))
        .route(
            "/students/vaccination_status_update/{id}",
            put(students::update_vaccination_status),
        )
        .nest("/vaccines", drive_routes.clone())
        .nest("/vaccination-drives", drive_routes)
        .route("/report/stdsvlvd", get(report::vaccination_level))
        .route("/report/vd", get(report::drives))
        .route("/report/std", get(report::students));

    Router::new()
        .nest("/api", api)
        .route("/healthz", get(healthz))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] opens the pool and runs migrations
/// 2. **Serve**: [`Application::serve`] binds a TCP port and handles requests
/// 3. **Shutdown**: on the shutdown signal, drains connections and closes the pool
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting vaccination portal with configuration: {:#?}", config);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        migrator().run(&pool).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Vaccination portal listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
