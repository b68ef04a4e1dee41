use actix_web::{web, HttpResponse};
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Liveness probe.
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("API Running"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations_applied: usize,
    time: String,
}

pub async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    // Check database connectivity with a lightweight query, then report how
    // many migrations have been applied.
    let (db_status, db_error, migrations_applied) = match require_db(&app_state) {
        Ok(db) => {
            let probe = db
                .query_one(sea_orm::Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1 as health_check".to_string(),
                ))
                .await;
            match probe {
                Ok(_) => {
                    let applied = migration::count_applied_migrations(db).await.unwrap_or(0);
                    ("ok".to_string(), None, applied)
                }
                Err(e) => ("error".to_string(), Some(format!("DB query failed: {e}")), 0),
            }
        }
        Err(e) => ("error".to_string(), Some(format!("DB unavailable: {e}")), 0),
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version,
        db: db_status,
        db_error,
        migrations_applied,
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}
