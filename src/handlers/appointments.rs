// src/handlers/appointments.rs
//
// Agendamento de visita ao showroom (formulário público).

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError, Resource},
        response::{ApiMessage, ApiResponse},
    },
    config::AppState,
    middleware::{i18n::Locale, payload::ApiJson, record_id::RecordId},
    models::leads::{AppointmentChanges, NewAppointment, Appointment},
};

// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = NewAppointment,
    responses(
        (status = 201, description = "Agendamento registrado", body = Appointment),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiJson(payload): ApiJson<NewAppointment>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .submit_appointment(&app_state.db_pool, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(lead))))
}

// GET /api/appointments
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "Agendamentos, mais novos primeiro", body = [Appointment]),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("admin_jwt" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let leads = app_state
        .lead_service
        .list_appointments(&app_state.db_pool)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::list(leads))))
}

// GET /api/appointments/{id}
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento encontrado", body = Appointment),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn get_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let lead = app_state
        .lead_service
        .get_appointment(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// PUT /api/appointments/{id}
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    request_body = AppointmentChanges,
    responses(
        (status = 200, description = "Agendamento atualizado", body = Appointment),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn update_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<AppointmentChanges>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .update_appointment(&app_state.db_pool, id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(lead))))
}

// DELETE /api/appointments/{id}
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento removido"),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("admin_jwt" = []))
)]
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .delete_appointment(&app_state.db_pool, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::deleted(Resource::Appointment, &locale, &app_state.i18n_store)),
    ))
}
