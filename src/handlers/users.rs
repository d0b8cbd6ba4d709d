//! User endpoint handlers: registration, listing, password reset.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::metrics::AppMetrics;
use crate::models::{
    NewUserRequest, RegisterResponse, ResetPasswordResponse, UserListResponse, UserResponse,
};
use crate::services;

/// Register a new user
///
/// The generated password is returned in the response exactly once; only
/// its hash is stored.
#[post("/users")]
pub(super) async fn register(
    pool: web::Data<DbPool>,
    metrics: Option<web::Data<AppMetrics>>,
    body: web::Json<NewUserRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {}", e)))?;

    let (user, password) = services::register_user(&pool, &body.name)?;

    if let Some(ref m) = metrics {
        m.record_user_registered();
    }

    let response = RegisterResponse {
        user_id: user.id,
        name: user.name,
        password,
    };

    Ok(HttpResponse::Created().json(response))
}

/// List all users
#[get("/users")]
pub(super) async fn list_users(
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    let users = services::get_users(&pool)?;

    let user_responses: Vec<UserResponse> = users.iter().map(UserResponse::from_user).collect();

    let response = UserListResponse {
        total: user_responses.len(),
        users: user_responses,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Reset a user's password
///
/// Users may only reset their own password; the new one replaces the old
/// immediately.
#[post("/users/{name}/password")]
pub(super) async fn reset_password(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();

    if name != user.name {
        return Err(AppError::Forbidden(
            "You may only reset your own password".into(),
        ));
    }

    let mut target = services::get_user(&pool, &name)?;
    let password = services::reset_password(&pool, &mut target)?;

    let response = ResetPasswordResponse {
        user_id: target.id,
        name: target.name,
        password,
    };

    Ok(HttpResponse::Ok().json(response))
}
