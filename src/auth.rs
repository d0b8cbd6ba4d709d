//! HTTP Basic authentication module.
//!
//! Provides an extractor for validating user credentials on protected
//! endpoints.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::future::{ready, Ready};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::services;

/// Authenticated user extractor for protecting endpoints.
///
/// Add this to handler parameters to require authentication. Credentials
/// are provided via the `Authorization: Basic <credentials>` header, where
/// `<credentials>` is the base64 encoding of `name:password`.
///
/// On successful authentication, provides the user's id and name for
/// ownership checks.
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub name: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Get the database pool from app data
        let pool = match req.app_data::<web::Data<DbPool>>() {
            Some(pool) => pool,
            None => {
                return ready(Err(AppError::InternalError(
                    "Database pool not available".into(),
                )));
            }
        };

        // Extract and decode the Basic credentials
        let (name, password) = match extract_credentials(req) {
            Some(credentials) => credentials,
            None => return ready(Err(AppError::missing_credentials())),
        };

        // Validate the credentials against the database
        match services::is_valid_user(pool, &name, &password) {
            Ok(true) => {}
            Ok(false) => return ready(Err(AppError::invalid_credentials())),
            Err(e) => return ready(Err(e)),
        }

        match services::get_user(pool, &name) {
            Ok(user) => ready(Ok(AuthenticatedUser {
                user_id: user.id,
                name: user.name,
            })),
            Err(e) => ready(Err(e)),
        }
    }
}

/// Extract name and password from the `Authorization: Basic` header.
///
/// Returns `None` when the header is absent, not Basic, not valid base64,
/// or the decoded payload carries no `:` separator.
fn extract_credentials(req: &HttpRequest) -> Option<(String, String)> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (name, password) = decoded.split_once(':')?;

    Some((name.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{basic_auth_header, setup_test_db};
    use actix_web::{test, web, App, HttpResponse};

    async fn protected_endpoint(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({
            "user_id": user.user_id,
            "name": user.name
        }))
    }

    #[actix_rt::test]
    async fn test_missing_credentials_returns_401() {
        let pool = setup_test_db();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .route("/protected", web::get().to(protected_endpoint)),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        assert_eq!(
            resp.headers().get("WWW-Authenticate").unwrap(),
            "Basic realm=\"shortify\""
        );
    }

    #[actix_rt::test]
    async fn test_malformed_header_returns_401() {
        let pool = setup_test_db();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .route("/protected", web::get().to(protected_endpoint)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Basic %%%not-base64%%%"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_rt::test]
    async fn test_wrong_password_returns_401() {
        let pool = setup_test_db();

        services::register_user(&pool, "alice").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .route("/protected", web::get().to(protected_endpoint)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(basic_auth_header("alice", "someOtherPassword"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_rt::test]
    async fn test_unknown_user_returns_401() {
        let pool = setup_test_db();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .route("/protected", web::get().to(protected_endpoint)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(basic_auth_header("nobody", "password"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_rt::test]
    async fn test_valid_credentials() {
        let pool = setup_test_db();

        let (user, password) = services::register_user(&pool, "alice").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .route("/protected", web::get().to(protected_endpoint)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(basic_auth_header("alice", &password))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], user.id);
        assert_eq!(body["name"], "alice");
    }
}
