// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};

use crate::common::i18n::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

// Extrator de idioma, resolvido a partir do Accept-Language.
// Sempre devolve um idioma com catálogo ("pt-BR" -> "pt", "de" -> "en").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Locale {
    pub fn negotiate(header: Option<&str>) -> Self {
        let lang = header
            .map(accept_language::parse)
            .unwrap_or_default()
            .into_iter()
            .map(|tag| {
                let primary = tag.split('-').next().unwrap_or(&tag);
                primary.to_ascii_lowercase()
            })
            .find(|primary| SUPPORTED_LANGUAGES.contains(&primary.as_str()))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Locale(lang)
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::negotiate(
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok()),
        )
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_headers(&parts.headers))
    }
}
