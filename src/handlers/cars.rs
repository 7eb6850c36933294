// src/handlers/cars.rs

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
    models::{
        car::{Car, CarChanges, NewCar},
        car_filter::{CarFilter, CarFilterQuery},
    },
};

// GET /api/cars
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = "Cars",
    params(CarFilterQuery),
    responses(
        (status = 200, description = "Catálogo filtrado, mais novos primeiro", body = [Car]),
        (status = 400, description = "Filtro inválido")
    )
)]
pub async fn list_cars(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiQuery(query): ApiQuery<CarFilterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = CarFilter::try_from(query)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let cars = app_state
        .car_service
        .list_cars(&app_state.db_pool, &filter)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::list(cars))))
}

// GET /api/cars/{id}
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = "Cars",
    params(("id" = Uuid, Path, description = "ID do carro")),
    responses(
        (status = 200, description = "Carro encontrado", body = Car),
        (status = 404, description = "Carro não encontrado")
    )
)]
pub async fn get_car(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let car = app_state
        .car_service
        .get_car(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(car))))
}

// POST /api/cars
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = "Cars",
    request_body = NewCar,
    responses(
        (status = 201, description = "Carro cadastrado", body = Car),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("admin_jwt" = []))
)]
pub async fn create_car(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<NewCar>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let car = app_state
        .car_service
        .create_car(&app_state.db_pool, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(car))))
}

// PUT /api/cars/{id}
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    tag = "Cars",
    params(("id" = Uuid, Path, description = "ID do carro")),
    request_body = CarChanges,
    responses(
        (status = 200, description = "Carro atualizado", body = Car),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Carro não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn update_car(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<CarChanges>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let car = app_state
        .car_service
        .update_car(&app_state.db_pool, id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(car))))
}

// DELETE /api/cars/{id}
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    tag = "Cars",
    params(("id" = Uuid, Path, description = "ID do carro")),
    responses(
        (status = 200, description = "Carro removido"),
        (status = 404, description = "Carro não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn delete_car(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .car_service
        .delete_car(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::deleted(Resource::Car, &locale, &app_state.i18n_store)),
    ))
}
