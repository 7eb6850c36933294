// src/common/response.rs

use serde::Serialize;

use crate::{common::{error::Resource, i18n::I18nStore}, middleware::i18n::Locale};

// Envelope de sucesso: { "success": true, "count"?: n, "data": ... }
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data,
        }
    }
}

// Resposta de DELETE: { "success": true, "message": "Car deleted" }
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn deleted(resource: Resource, locale: &Locale, store: &I18nStore) -> Self {
        let lang = locale.0.as_str();
        let name = store.translate(lang, resource.i18n_key());
        Self::new(store.translate_with(lang, "message.deleted", &[("resource", &name)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_records_omit_the_count() {
        let body = serde_json::to_value(ApiResponse::new(json!({ "id": 1 }))).unwrap();
        assert_eq!(body, json!({ "success": true, "data": { "id": 1 } }));
    }

    #[test]
    fn lists_carry_their_length() {
        let body = serde_json::to_value(ApiResponse::list(vec!["a", "b"])).unwrap();
        assert_eq!(body, json!({ "success": true, "count": 2, "data": ["a", "b"] }));
    }

    #[test]
    fn delete_message_names_the_resource() {
        let store = I18nStore::load_embedded().unwrap();
        let message = ApiMessage::deleted(Resource::Car, &Locale("en".to_string()), &store);
        assert_eq!(message.message, "Car deleted");
    }
}
