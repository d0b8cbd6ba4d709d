//! Redirect endpoint handlers: creation and the token catch-all.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::config::Config;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::metrics::AppMetrics;
use crate::models::{CreateRedirectRequest, CreateRedirectResponse};
use crate::services;

/// Create a new redirect
#[post("/redirects")]
pub(super) async fn create_redirect(
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    metrics: Option<web::Data<AppMetrics>>,
    body: web::Json<CreateRedirectRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {}", e)))?;

    url::Url::parse(&body.url)
        .map_err(|_| AppError::validation("Invalid URL format"))?;

    let redirect = services::create_redirect(&pool, &body.url, config.token_length)?;

    if let Some(ref m) = metrics {
        m.record_redirect_created();
    }

    let response = CreateRedirectResponse {
        token: redirect.token.clone(),
        short_url: format!("{}/{}", config.base_url, redirect.token),
        url: redirect.url,
        created_at: redirect.created_at,
    };

    Ok(HttpResponse::Created().json(response))
}

/// Redirect to the target URL
///
/// This is the main functionality - when someone visits /{token},
/// they get redirected to the stored target URL.
#[get("/{token}")]
pub(super) async fn redirect_to_url(
    pool: web::Data<DbPool>,
    metrics: Option<web::Data<AppMetrics>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = path.into_inner();

    // Don't redirect for common paths
    if token == "favicon.ico" || token == "robots.txt" {
        return Err(AppError::NotFound("Resource not found".into()));
    }

    let redirect = services::get_redirect(&pool, &token)?;

    // Record the hit; a failure never blocks the redirect
    let _ = services::record_hit(&pool, &token);

    if let Some(ref m) = metrics {
        m.record_redirect();
    }

    log::info!(
        "Redirecting {} -> {} (hits: {})",
        redirect.token,
        redirect.url,
        redirect.hits + 1
    );

    // Return 301 Moved Permanently redirect
    Ok(HttpResponse::MovedPermanently()
        .append_header(("Location", redirect.url))
        .finish())
}
