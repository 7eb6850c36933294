// src/handlers/corporate_requests.rs
//
// Pedidos de frota. O status é texto livre editado pelo admin.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError, Resource},
        response::{ApiMessage, ApiResponse},
    },
    config::AppState,
    middleware::{i18n::Locale, payload::ApiJson, record_id::RecordId},
    models::leads::{CorporateRequestChanges, NewCorporateRequest, CorporateRequest},
};

// POST /api/corporate-requests
#[utoipa::path(
    post,
    path = "/api/corporate-requests",
    tag = "Corporate Requests",
    request_body = NewCorporateRequest,
    responses(
        (status = 201, description = "Pedido corporativo registrado", body = CorporateRequest),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_corporate_request(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<NewCorporateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .submit_corporate_request(&app_state.db_pool, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(lead))))
}

// GET /api/corporate-requests
#[utoipa::path(
    get,
    path = "/api/corporate-requests",
    tag = "Corporate Requests",
    responses(
        (status = 200, description = "Pedidos corporativos, mais novos primeiro", body = [CorporateRequest]),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("admin_jwt" = []))
)]
pub async fn list_corporate_requests(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let leads = app_state
        .lead_service
        .list_corporate_requests(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::list(leads))))
}

// GET /api/corporate-requests/{id}
#[utoipa::path(
    get,
    path = "/api/corporate-requests/{id}",
    tag = "Corporate Requests",
    params(("id" = Uuid, Path, description = "ID do pedido corporativo")),
    responses(
        (status = 200, description = "Pedido corporativo encontrado", body = CorporateRequest),
        (status = 404, description = "Pedido corporativo não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn get_corporate_request(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let lead = app_state
        .lead_service
        .get_corporate_request(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// PUT /api/corporate-requests/{id}
#[utoipa::path(
    put,
    path = "/api/corporate-requests/{id}",
    tag = "Corporate Requests",
    params(("id" = Uuid, Path, description = "ID do pedido corporativo")),
    request_body = CorporateRequestChanges,
    responses(
        (status = 200, description = "Pedido corporativo atualizado", body = CorporateRequest),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Pedido corporativo não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn update_corporate_request(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<CorporateRequestChanges>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .update_corporate_request(&app_state.db_pool, id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// DELETE /api/corporate-requests/{id}
#[utoipa::path(
    delete,
    path = "/api/corporate-requests/{id}",
    tag = "Corporate Requests",
    params(("id" = Uuid, Path, description = "ID do pedido corporativo")),
    responses(
        (status = 200, description = "Pedido corporativo removido"),
        (status = 404, description = "Pedido corporativo não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn delete_corporate_request(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .delete_corporate_request(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::deleted(Resource::CorporateRequest, &locale, &app_state.i18n_store)),
    ))
}
