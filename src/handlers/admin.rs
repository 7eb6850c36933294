// src/handlers/admin.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        response::ApiResponse,
    },
    config::AppState,
    middleware::{auth::AdminSession, i18n::Locale, payload::ApiJson},
    models::admin::{AdminSessionView, AdminToken, CrmOverview, LoginPayload},
};

// POST /api/admin/login
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Passcode aceito, token emitido", body = AdminToken),
        (status = 401, description = "Passcode inválido ou login desativado")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let token = app_state
        .auth_service
        .login(&payload.passcode)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("🔑 Login no back office");

    Ok((StatusCode::OK, Json(ApiResponse::new(token))))
}

// GET /api/admin/me
#[utoipa::path(
    get,
    path = "/api/admin/me",
    tag = "Admin",
    responses(
        (status = 200, description = "Sessão atual do back office", body = AdminSessionView),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("admin_jwt" = []))
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    session: Option<AdminSession>,
) -> impl IntoResponse {
    let view = AdminSessionView {
        login_enabled: app_state.auth_service.is_enabled(),
        claims: session.map(|AdminSession(claims)| claims),
    };

    (StatusCode::OK, Json(ApiResponse::new(view)))
}

// GET /api/admin/crm
#[utoipa::path(
    get,
    path = "/api/admin/crm",
    tag = "Admin",
    responses(
        (status = 200, description = "Todos os leads, mais novos primeiro", body = CrmOverview),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("admin_jwt" = []))
)]
pub async fn get_crm_overview(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let overview = app_state
        .lead_service
        .crm_overview(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(overview))))
}
