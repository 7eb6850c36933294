// src/handlers/preorders.rs
//
// Reserva de modelo em pré-venda (formulário público).

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError, Resource},
        response::{ApiMessage, ApiResponse},
    },
    config::AppState,
    middleware::{i18n::Locale, payload::ApiJson, record_id::RecordId},
    models::leads::{PreorderChanges, NewPreorder, Preorder},
};

// POST /api/preorders
#[utoipa::path(
    post,
    path = "/api/preorders",
    tag = "Preorders",
    request_body = NewPreorder,
    responses(
        (status = 201, description = "Pré-venda registrada", body = Preorder),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_preorder(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<NewPreorder>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .submit_preorder(&app_state.db_pool, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(lead))))
}

// GET /api/preorders
#[utoipa::path(
    get,
    path = "/api/preorders",
    tag = "Preorders",
    responses(
        (status = 200, description = "Pré-vendas, mais novos primeiro", body = [Preorder]),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("admin_jwt" = []))
)]
pub async fn list_preorders(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let leads = app_state
        .lead_service
        .list_preorders(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::list(leads))))
}

// GET /api/preorders/{id}
#[utoipa::path(
    get,
    path = "/api/preorders/{id}",
    tag = "Preorders",
    params(("id" = Uuid, Path, description = "ID da pré-venda")),
    responses(
        (status = 200, description = "Pré-venda encontrada", body = Preorder),
        (status = 404, description = "Pré-venda não encontrada")
    ),
    security(("admin_jwt" = []))
)]
pub async fn get_preorder(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let lead = app_state
        .lead_service
        .get_preorder(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// PUT /api/preorders/{id}
#[utoipa::path(
    put,
    path = "/api/preorders/{id}",
    tag = "Preorders",
    params(("id" = Uuid, Path, description = "ID da pré-venda")),
    request_body = PreorderChanges,
    responses(
        (status = 200, description = "Pré-venda atualizada", body = Preorder),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Pré-venda não encontrada")
    ),
    security(("admin_jwt" = []))
)]
pub async fn update_preorder(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<PreorderChanges>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .update_preorder(&app_state.db_pool, id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// DELETE /api/preorders/{id}
#[utoipa::path(
    delete,
    path = "/api/preorders/{id}",
    tag = "Preorders",
    params(("id" = Uuid, Path, description = "ID da pré-venda")),
    responses(
        (status = 200, description = "Pré-venda removida"),
        (status = 404, description = "Pré-venda não encontrada")
    ),
    security(("admin_jwt" = []))
)]
pub async fn delete_preorder(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .delete_preorder(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::deleted(Resource::Preorder, &locale, &app_state.i18n_store)),
    ))
}
