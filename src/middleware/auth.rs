// src/middleware/auth.rs

use axum::{
    extract::{OptionalFromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use std::convert::Infallible;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::admin::AdminClaims,
};

// Guarda das rotas administrativas (escritas no catálogo e leitura dos leads).
// Sem ADMIN_PASSCODE configurado, deixa tudo passar.
pub async fn admin_guard(
    State(app_state): State<AppState>,
    locale: Locale,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !app_state.auth_service.is_enabled() {
        return Ok(next.run(request).await);
    }

    let claims = bearer
        .map_err(|_| AppError::InvalidToken)
        .and_then(|TypedHeader(auth)| app_state.auth_service.validate_token(auth.token()))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    // Insere as claims nos "extensions" da requisição
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

// Sessão do admin já validada pelo `admin_guard`.
// Opcional: com o guard aberto não há claims.
pub struct AdminSession(pub AdminClaims);

impl<S> OptionalFromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<AdminClaims>().cloned().map(AdminSession))
    }
}
