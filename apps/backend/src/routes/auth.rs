//! User registration, login and identity routes.
//!
//! The "token" handed out here is the user's storage id, carried back in
//! the `x-auth-token` header. That contract is inherited from the original
//! API and is deliberately kept behind the `CurrentUser` extractor seam.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::users;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

async fn register(
    req: HttpRequest,
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CredentialsRequest { username, password } = body.into_inner();

    let user = with_txn(Some(&req), &app_state, |txn| {
        let (username, password) = (username.clone(), password.clone());
        Box::pin(async move { Ok(users::register(txn, &username, &password).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token: user.id.to_string(),
        user: UserResponse {
            id: user.id,
            username: user.username,
        },
    }))
}

async fn login(
    req: HttpRequest,
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CredentialsRequest { username, password } = body.into_inner();

    let user = with_txn(Some(&req), &app_state, |txn| {
        let (username, password) = (username.clone(), password.clone());
        Box::pin(async move { Ok(users::login(txn, &username, &password).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token: user.id.to_string(),
        user: UserResponse {
            id: user.id,
            username: user.username,
        },
    }))
}

/// Informational: the token is client-held, there is nothing to revoke.
async fn logout(_user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "msg": "Logout successful. Please clear the token on the client."
    })))
}

async fn me(
    req: HttpRequest,
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    // Re-read inside the request transaction so the credential field can be
    // excluded from a consistent snapshot.
    let record = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(crate::repos::users::require_user(txn, user.id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MeResponse {
        id: record.id,
        username: record.username,
        created_at: record.created_at,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)));
    cfg.service(web::resource("/login").route(web::post().to(login)));
    cfg.service(web::resource("/logout").route(web::post().to(logout)));
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
