// src/handlers/testimonials.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError, Resource},
        response::{ApiMessage, ApiResponse},
    },
    config::AppState,
    middleware::{i18n::Locale, payload::{ApiJson, ApiQuery}, record_id::RecordId},
    models::content::{TestimonialQuery, Testimonial, TestimonialChanges, NewTestimonial},
};

// GET /api/testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "Testimonials",
    params(TestimonialQuery),
    responses(
        (status = 200, description = "Depoimentos, mais novos primeiro", body = [Testimonial]),
        (status = 400, description = "Limite fora do intervalo 1..=100")
    )
)]
pub async fn list_testimonials(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiQuery(query): ApiQuery<TestimonialQuery>,
) -> Result<impl IntoResponse, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let testimonials = app_state
        .content_service
        .list_testimonials(&app_state.db_pool, query.limit)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::list(testimonials))))
}

// GET /api/testimonials/{id}
#[utoipa::path(
    get,
    path = "/api/testimonials/{id}",
    tag = "Testimonials",
    params(("id" = Uuid, Path, description = "ID do depoimento")),
    responses(
        (status = 200, description = "Depoimento encontrado", body = Testimonial),
        (status = 404, description = "Depoimento não encontrado")
    )
)]
pub async fn get_testimonial(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let testimonial = app_state
        .content_service
        .get_testimonial(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(testimonial))))
}

// POST /api/testimonials
#[utoipa::path(
    post,
    path = "/api/testimonials",
    tag = "Testimonials",
    request_body = NewTestimonial,
    responses(
        (status = 201, description = "Depoimento criado", body = Testimonial),
        (status = 400, description = "Dados inválidos")
    ),
    security(("admin_jwt" = []))
)]
pub async fn create_testimonial(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<NewTestimonial>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let testimonial = app_state
        .content_service
        .create_testimonial(&app_state.db_pool, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(testimonial))))
}

// PUT /api/testimonials/{id}
#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    tag = "Testimonials",
    params(("id" = Uuid, Path, description = "ID do depoimento")),
    request_body = TestimonialChanges,
    responses(
        (status = 200, description = "Depoimento atualizado", body = Testimonial),
        (status = 404, description = "Depoimento não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn update_testimonial(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<TestimonialChanges>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let testimonial = app_state
        .content_service
        .update_testimonial(&app_state.db_pool, id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(testimonial))))
}

// DELETE /api/testimonials/{id}
#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    tag = "Testimonials",
    params(("id" = Uuid, Path, description = "ID do depoimento")),
    responses(
        (status = 200, description = "Depoimento removido"),
        (status = 404, description = "Depoimento não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn delete_testimonial(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .content_service
        .delete_testimonial(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::deleted(Resource::Testimonial, &locale, &app_state.i18n_store)),
    ))
}
