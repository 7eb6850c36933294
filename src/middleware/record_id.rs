// src/middleware/record_id.rs

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
};

// Id do recurso em `/{id}`. UUID malformado vira 400 no envelope padrão.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub Uuid);

impl FromRequestParts<AppState> for RecordId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(&parts.headers);
        let invalid = || AppError::InvalidQuery("id").to_api_error(&locale, &state.i18n_store);

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        Uuid::parse_str(&raw).map(RecordId).map_err(|_| invalid())
    }
}
