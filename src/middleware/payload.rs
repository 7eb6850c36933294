// src/middleware/payload.rs
//
// Versões de `Json` e `Query` que respondem no envelope padrão.
// Sem isso, um corpo ou query malformado volta como texto puro do axum.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
};

/// Corpo JSON. Campo ausente, tipo errado ou enum com grafia errada vira 400 localizado.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T> FromRequest<AppState> for ApiJson<T>
where
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(req.headers());

        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(|rejection: JsonRejection| {
                tracing::debug!("Corpo JSON rejeitado: {}", rejection.body_text());
                AppError::InvalidBody(rejection.body_text()).to_api_error(&locale, &state.i18n_store)
            })
    }
}

/// Query string tipada. `limit=abc` ou `active=yes` vira 400 localizado.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T> FromRequestParts<AppState> for ApiQuery<T>
where
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(&parts.headers);

        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| ApiQuery(value))
            .map_err(|rejection: QueryRejection| {
                AppError::InvalidQueryString(rejection.body_text())
                    .to_api_error(&locale, &state.i18n_store)
            })
    }
}
