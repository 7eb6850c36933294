// src/handlers/hero_media.rs

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
    models::content::{HeroMediaQuery, HeroSlide, HeroSlideChanges, NewHeroSlide},
};

// GET /api/hero-media
#[utoipa::path(
    get,
    path = "/api/hero-media",
    tag = "Hero",
    params(HeroMediaQuery),
    responses(
        (status = 200, description = "Slides em ordem de exibição", body = [HeroSlide])
    )
)]
pub async fn list_hero_slides(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiQuery(query): ApiQuery<HeroMediaQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let slides = app_state
        .content_service
        .list_hero_slides(&app_state.db_pool, query.active)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::list(slides))))
}

// GET /api/hero-media/{id}
#[utoipa::path(
    get,
    path = "/api/hero-media/{id}",
    tag = "Hero",
    params(("id" = Uuid, Path, description = "ID do slide")),
    responses(
        (status = 200, description = "Slide encontrado", body = HeroSlide),
        (status = 404, description = "Slide não encontrado")
    )
)]
pub async fn get_hero_slide(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let slide = app_state
        .content_service
        .get_hero_slide(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(slide))))
}

// POST /api/hero-media
#[utoipa::path(
    post,
    path = "/api/hero-media",
    tag = "Hero",
    request_body = NewHeroSlide,
    responses(
        (status = 201, description = "Slide criado", body = HeroSlide),
        (status = 400, description = "Dados inválidos")
    ),
    security(("admin_jwt" = []))
)]
pub async fn create_hero_slide(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<NewHeroSlide>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let slide = app_state
        .content_service
        .create_hero_slide(&app_state.db_pool, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(slide))))
}

// PUT /api/hero-media/{id}
#[utoipa::path(
    put,
    path = "/api/hero-media/{id}",
    tag = "Hero",
    params(("id" = Uuid, Path, description = "ID do slide")),
    request_body = HeroSlideChanges,
    responses(
        (status = 200, description = "Slide atualizado", body = HeroSlide),
        (status = 404, description = "Slide não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn update_hero_slide(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<HeroSlideChanges>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let slide = app_state
        .content_service
        .update_hero_slide(&app_state.db_pool, id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(slide))))
}

// DELETE /api/hero-media/{id}
#[utoipa::path(
    delete,
    path = "/api/hero-media/{id}",
    tag = "Hero",
    params(("id" = Uuid, Path, description = "ID do slide")),
    responses(
        (status = 200, description = "Slide removido"),
        (status = 404, description = "Slide não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn delete_hero_slide(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .content_service
        .delete_hero_slide(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::deleted(Resource::HeroSlide, &locale, &app_state.i18n_store)),
    ))
}
