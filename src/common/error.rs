// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use std::fmt;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Recursos expostos pela API. Usado nas mensagens de "não encontrado" e "removido".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Car,
    HeroSlide,
    Testimonial,
    Appointment,
    Preorder,
    Inquiry,
    CorporateRequest,
}

impl Resource {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Resource::Car => "resource.car",
            Resource::HeroSlide => "resource.hero_slide",
            Resource::Testimonial => "resource.testimonial",
            Resource::Appointment => "resource.appointment",
            Resource::Preorder => "resource.preorder",
            Resource::Inquiry => "resource.inquiry",
            Resource::CorporateRequest => "resource.corporate_request",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Car => "car",
            Resource::HeroSlide => "hero slide",
            Resource::Testimonial => "testimonial",
            Resource::Appointment => "appointment",
            Resource::Preorder => "preorder",
            Resource::Inquiry => "inquiry",
            Resource::CorporateRequest => "corporate request",
        };
        f.write_str(name)
    }
}

// Erro interno das camadas de serviço e repositório.
// Os handlers convertem para `ApiError` (com idioma) na fronteira HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid query parameter '{0}'")]
    InvalidQuery(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query string: {0}")]
    InvalidQueryString(String),

    #[error("{0} not found")]
    NotFound(Resource),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid admin passcode")]
    InvalidCredentials,

    #[error("Admin login is not configured")]
    AdminLoginDisabled,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

// Erro já pronto para o cliente: status + mensagem traduzida + detalhes opcionais.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "error": self.error,
        });
        if let Some(details) = self.details {
            body["details"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidQuery(_)
            | AppError::InvalidBody(_)
            | AppError::InvalidQueryString(_)
            | AppError::ConstraintViolation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials
            | AppError::AdminLoginDisabled
            | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::DatabaseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_api_error(self, locale: &Locale, store: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();
        let status = self.status_code();

        match self {
            AppError::ValidationError(errors) => {
                let mut details = Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<Value> = field_errors
                        .iter()
                        .map(|e| {
                            let key = e.message.as_deref().unwrap_or(&*e.code);
                            Value::String(store.translate(lang, &format!("validation.{key}")))
                        })
                        .collect();
                    details.insert(field.to_string(), Value::Array(messages));
                }
                ApiError {
                    status,
                    error: store.translate(lang, "error.validation"),
                    details: Some(Value::Object(details)),
                }
            }
            AppError::InvalidQuery(param) => ApiError::new(
                status,
                store.translate_with(lang, "error.invalid_query", &[("param", param)]),
            ),
            AppError::InvalidBody(reason) => ApiError {
                status,
                error: store.translate(lang, "error.invalid_body"),
                details: Some(json!({ "body": [reason] })),
            },
            AppError::InvalidQueryString(reason) => ApiError {
                status,
                error: store.translate(lang, "error.invalid_query_string"),
                details: Some(json!({ "query": [reason] })),
            },
            AppError::NotFound(resource) => {
                let name = store.translate(lang, resource.i18n_key());
                ApiError::new(
                    status,
                    store.translate_with(lang, "error.not_found", &[("resource", &name)]),
                )
            }
            AppError::ConstraintViolation(detail) => ApiError::new(
                status,
                store.translate_with(lang, "error.constraint", &[("detail", &detail)]),
            ),
            AppError::InvalidCredentials => {
                ApiError::new(status, store.translate(lang, "error.invalid_credentials"))
            }
            AppError::AdminLoginDisabled => {
                ApiError::new(status, store.translate(lang, "error.admin_disabled"))
            }
            AppError::InvalidToken => {
                ApiError::new(status, store.translate(lang, "error.invalid_token"))
            }
            AppError::DatabaseUnavailable(reason) => {
                tracing::warn!("Banco de dados indisponível: {}", reason);
                ApiError::new(status, store.translate(lang, "error.database_unavailable"))
            }
            // Banco, JWT e erros inesperados viram 500 com mensagem genérica.
            // O detalhe fica só no log.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError::new(status, store.translate(lang, "error.internal"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    fn store() -> I18nStore {
        I18nStore::load_embedded().unwrap()
    }

    fn en() -> Locale {
        Locale("en".to_string())
    }

    #[test]
    fn status_codes_follow_the_error_kind() {
        assert_eq!(AppError::NotFound(Resource::Car).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::InvalidQuery("min_price").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ConstraintViolation("price".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::DatabaseUnavailable("down".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::DatabaseError(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_resource() {
        let api = AppError::NotFound(Resource::Testimonial).to_api_error(&en(), &store());
        assert_eq!(api.error, "Testimonial not found.");

        let pt = Locale("pt".to_string());
        let api = AppError::NotFound(Resource::Car).to_api_error(&pt, &store());
        assert_eq!(api.error, "Veículo não encontrado(a).");
    }

    #[test]
    fn validation_errors_are_reported_per_field() {
        let mut errors = ValidationErrors::new();
        let mut email = ValidationError::new("email");
        email.message = Some("invalid_email".into());
        errors.add("email", email);

        let api = AppError::ValidationError(errors).to_api_error(&en(), &store());
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        let details = api.details.expect("validation errors carry details");
        assert_eq!(details["email"][0], "The e-mail address is invalid.");
    }

    #[test]
    fn malformed_body_and_query_are_bad_requests_with_details() {
        let api = AppError::InvalidBody("missing field `email`".into()).to_api_error(&en(), &store());
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.error, "The request body is invalid.");
        assert_eq!(api.details, Some(json!({ "body": ["missing field `email`"] })));

        let pt = Locale("pt".to_string());
        let api = AppError::InvalidQueryString("invalid digit".into()).to_api_error(&pt, &store());
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.error, "A query string é inválida.");
        assert_eq!(api.details, Some(json!({ "query": ["invalid digit"] })));
    }

    #[test]
    fn internal_errors_hide_the_cause() {
        let api = AppError::InternalServerError(anyhow::anyhow!("secret stack trace"))
            .to_api_error(&en(), &store());
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.error.contains("secret"));
    }

    #[tokio::test]
    async fn api_error_renders_the_failure_envelope() {
        let response = ApiError::new(StatusCode::NOT_FOUND, "Car not found.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "success": false, "error": "Car not found." }));
    }
}
