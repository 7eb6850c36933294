// src/handlers/inquiries.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError, Resource},
        response::{ApiMessage, ApiResponse},
    },
    config::AppState,
    middleware::{i18n::Locale, payload::ApiJson, record_id::RecordId},
    models::leads::{InquiryChanges, NewInquiry, Inquiry},
};

// POST /api/inquiries
#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = "Inquiries",
    request_body = NewInquiry,
    responses(
        (status = 201, description = "Contato registrado", body = Inquiry),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_inquiry(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<NewInquiry>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .submit_inquiry(&app_state.db_pool, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(lead))))
}

// GET /api/inquiries
#[utoipa::path(
    get,
    path = "/api/inquiries",
    tag = "Inquiries",
    responses(
        (status = 200, description = "Contatos, mais novos primeiro", body = [Inquiry]),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("admin_jwt" = []))
)]
pub async fn list_inquiries(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let leads = app_state
        .lead_service
        .list_inquiries(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::list(leads))))
}

// GET /api/inquiries/{id}
#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    tag = "Inquiries",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Contato encontrado", body = Inquiry),
        (status = 404, description = "Contato não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn get_inquiry(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let lead = app_state
        .lead_service
        .get_inquiry(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// PUT /api/inquiries/{id}
#[utoipa::path(
    put,
    path = "/api/inquiries/{id}",
    tag = "Inquiries",
    params(("id" = Uuid, Path, description = "ID do contato")),
    request_body = InquiryChanges,
    responses(
        (status = 200, description = "Contato atualizado", body = Inquiry),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Contato não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn update_inquiry(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<InquiryChanges>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .update_inquiry(&app_state.db_pool, id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// DELETE /api/inquiries/{id}
#[utoipa::path(
    delete,
    path = "/api/inquiries/{id}",
    tag = "Inquiries",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Contato removido"),
        (status = 404, description = "Contato não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn delete_inquiry(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .delete_inquiry(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::deleted(Resource::Inquiry, &locale, &app_state.i18n_store)),
    ))
}
