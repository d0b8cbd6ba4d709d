//! HTTP request handlers for the shortening service API.
//!
//! Defines all route handlers and configures the routing table.

mod health;
mod metrics;
mod redirects;
mod users;

use actix_web::web;

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // User routes (registration is public)
        .service(users::register)
        .service(users::list_users)
        .service(users::reset_password)
        // Redirect creation (protected)
        .service(redirects::create_redirect)
        .service(health::health_check)
        .service(metrics::export_metrics)
        // Register specific routes before the catch-all token route
        .service(redirects::redirect_to_url);
}
