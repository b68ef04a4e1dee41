//! Authenticated caller extractor.
//!
//! The caller supplies their user id in the `x-auth-token` header; the
//! extractor resolves it against the user directory and rejects unknown
//! ids. The id acts as an unsigned bearer credential; everything
//! auth-shaped stays behind this one seam.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::repos::users;
use crate::state::app_state::AppState;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// The resolved caller. Downstream code treats the id as trusted input.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = req
                .headers()
                .get(AUTH_TOKEN_HEADER)
                .ok_or_else(AppError::unauthorized_missing_token)?;

            let user_id = token
                .to_str()
                .ok()
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .filter(|id| *id > 0)
                .ok_or_else(AppError::unauthorized_invalid_token)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            // Resolve inside the shared test transaction when one is
            // injected, otherwise against the pooled connection.
            let user = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                users::find_by_id(shared_txn.transaction(), user_id).await?
            } else {
                let db = require_db(app_state)?;
                users::find_by_id(db, user_id).await?
            };

            let user = user.ok_or_else(AppError::forbidden_user_not_found)?;

            Ok(CurrentUser {
                id: user.id,
                username: user.username,
            })
        })
    }
}
