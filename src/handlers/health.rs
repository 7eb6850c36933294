// src/handlers/health.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "OK")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now(),
        }
    }
}

// GET /health (processo vivo, não toca no banco)
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Servidor no ar", body = HealthStatus))
)]
pub async fn liveness() -> impl IntoResponse {
    Json(HealthStatus::ok())
}

// GET /api/health (ida e volta no Postgres)
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Banco respondendo", body = HealthStatus),
        (status = 503, description = "Banco indisponível")
    )
)]
pub async fn readiness(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&app_state.db_pool)
        .await
        .map_err(|e| {
            AppError::DatabaseUnavailable(e.to_string()).to_api_error(&locale, &app_state.i18n_store)
        })?;

    Ok((StatusCode::OK, Json(HealthStatus::ok())))
}
