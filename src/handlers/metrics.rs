//! Prometheus exposition endpoint handler.

use actix_web::{get, web, HttpResponse};
use prometheus::{Encoder, Registry, TextEncoder};

use crate::errors::AppError;

/// Render all registered metrics in the Prometheus text format
///
/// The registry is only installed when metrics are enabled; without it
/// this endpoint reports 404.
#[get("/metrics")]
pub(super) async fn export_metrics(
    registry: Option<web::Data<Registry>>,
) -> Result<HttpResponse, AppError> {
    let registry = match registry {
        Some(registry) => registry,
        None => return Err(AppError::NotFound("Metrics are not enabled".into())),
    };

    let encoder = TextEncoder::new();
    let metric_families = registry.gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| AppError::internal(format!("Failed to encode metrics: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}
