//! Health check endpoint handler.

use actix_web::{get, web, HttpResponse};

use crate::db::{self, DbPool};
use crate::errors::AppError;

/// Health check endpoint
///
/// Reports healthy only when a database connection can be checked out.
#[get("/health")]
pub(super) async fn health_check(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    db::get_conn(&pool)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    })))
}
