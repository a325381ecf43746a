#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the waste dashboard.
//!
//! The dataset is generated once at startup and shared read-only by every
//! worker. Requests carry their own view state (section and date range)
//! as query parameters, so the server holds no per-client state.

mod handlers;
pub mod interactive;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use waste_dashboard_dataset::{DatasetError, Snapshot, build_snapshot, config};

/// Environment variable naming the TOML generation config.
pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";

/// Shared application state.
pub struct AppState {
    /// Dataset and aggregates served by every endpoint.
    pub snapshot: Snapshot,
}

impl AppState {
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_addr: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `PORT`, falling back to the defaults for
    /// missing or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        Self { bind_addr, port }
    }
}

/// Builds the snapshot from the config file named by `DASHBOARD_CONFIG`,
/// or from the default config when it is unset.
///
/// # Errors
///
/// Returns a [`DatasetError`] if the config cannot be loaded or the
/// generated dataset is empty.
pub fn load_snapshot_from_env() -> Result<Snapshot, DatasetError> {
    let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let generation = config::load_config_or_default(path.as_deref())?;
    build_snapshot(&generation)
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handlers::query_error))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health))
                .route("/sections", web::get().to(handlers::sections))
                .route("/aggregates", web::get().to(handlers::aggregates))
                .route("/view", web::get().to(handlers::view))
                .route("/export.csv", web::get().to(handlers::export_csv)),
        );
}

/// Serves `snapshot` until the server is stopped.
///
/// The caller provides the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn serve(snapshot: Snapshot, config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(snapshot));
    let ServerConfig { bind_addr, port } = config;

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

/// Starts the server from environment configuration.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the snapshot cannot be built or
/// the server fails.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    log::info!("Generating dataset...");
    let snapshot = load_snapshot_from_env().map_err(std::io::Error::other)?;
    serve(snapshot, ServerConfig::from_env()).await
}
