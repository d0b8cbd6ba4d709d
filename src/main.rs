//! # Shortify
//!
//! A minimal URL shortener built with Rust, Actix-web, and SQLite.
//!
//! ## Features
//! - Create short redirect tokens for target URLs
//! - Redirect tokens to their target URLs
//! - Password-based user accounts with one-time generated passwords
//! - RESTful API
//! - Rate limiting for abuse protection

mod auth;
mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod metrics;
mod models;
mod queries;
mod services;
mod test_utils;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env();

    // Initialize database connection pool
    let pool = db::init_pool(&config.database_url).expect("Failed to create database pool");

    // Run database migrations
    db::run_migrations(&pool).expect("Failed to run database migrations");

    // Set up Prometheus metrics when enabled
    let metrics_state = if config.metrics_enabled {
        let registry = prometheus::Registry::new();
        let app_metrics =
            metrics::AppMetrics::new(&registry).expect("Failed to register Prometheus metrics");
        info!("Metrics enabled at /metrics");
        Some((registry, app_metrics))
    } else {
        None
    };

    info!(
        "Starting Shortify server at http://{}:{}",
        config.host, config.port
    );
    info!("API Documentation:");
    info!("   POST /users                  - Register, receive a one-time password");
    info!("   GET  /users                  - List users (Basic auth)");
    info!("   POST /users/{{name}}/password  - Reset your own password (Basic auth)");
    info!("   POST /redirects              - Create a redirect (Basic auth)");
    info!("   GET  /{{token}}                - Redirect to the target URL");

    // Capture bind address before moving config into closure
    let bind_addr = format!("{}:{}", config.host, config.port);

    // Configure rate limiting: 60 requests per minute per IP
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(1)
        .burst_size(60)
        .finish()
        .expect("Failed to create rate limiter configuration");

    info!("Rate limiting enabled: 60 requests/minute per IP");

    // Start HTTP server
    HttpServer::new(move || {
        let mut app = App::new()
            // Add database pool to app state
            .app_data(web::Data::new(pool.clone()))
            // Add configuration to app state
            .app_data(web::Data::new(config.clone()));

        // Install the metrics registry and counters when enabled
        if let Some((registry, app_metrics)) = metrics_state.clone() {
            app = app
                .app_data(web::Data::new(registry))
                .app_data(web::Data::new(app_metrics));
        }

        app
            // Enable rate limiting middleware
            .wrap(Governor::new(&governor_conf))
            // Log every request with its matched route name and timing
            .wrap(
                Logger::new("%{method}xi %U %{route}xo %Dms")
                    .custom_request_replace("method", |req| req.method().to_string())
                    .custom_response_replace("route", |res| {
                        res.request().match_name().unwrap_or("-").to_owned()
                    }),
            )
            // Configure routes
            .configure(handlers::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
