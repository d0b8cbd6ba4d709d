//! Prometheus metrics module for the shortening service.
//!
//! Defines custom business metrics for monitoring redirect traffic,
//! redirect creations, and user registrations.

use prometheus::{Counter, Opts, Registry};

/// Application metrics for Prometheus monitoring
#[derive(Clone)]
pub struct AppMetrics {
    /// Total redirects served
    pub redirects_total: Counter,
    /// Total redirects created
    pub redirects_created_total: Counter,
    /// Total users registered
    pub users_registered_total: Counter,
}

impl AppMetrics {
    /// Create and register all custom metrics with the given Prometheus registry
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let redirects_total = Counter::with_opts(
            Opts::new("redirects_total", "Total redirects served").namespace("shortify"),
        )?;
        registry.register(Box::new(redirects_total.clone()))?;

        let redirects_created_total = Counter::with_opts(
            Opts::new("redirects_created_total", "Total redirects created")
                .namespace("shortify"),
        )?;
        registry.register(Box::new(redirects_created_total.clone()))?;

        let users_registered_total = Counter::with_opts(
            Opts::new("users_registered_total", "Total users registered")
                .namespace("shortify"),
        )?;
        registry.register(Box::new(users_registered_total.clone()))?;

        Ok(Self {
            redirects_total,
            redirects_created_total,
            users_registered_total,
        })
    }

    /// Record a served redirect
    pub fn record_redirect(&self) {
        self.redirects_total.inc();
    }

    /// Record a created redirect
    pub fn record_redirect_created(&self) {
        self.redirects_created_total.inc();
    }

    /// Record a user registration
    pub fn record_user_registered(&self) {
        self.users_registered_total.inc();
    }
}
