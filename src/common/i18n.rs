// src/common/i18n.rs

use anyhow::Context;
use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Idiomas com catálogo embutido. O `Locale` sempre resolve para um destes.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "pt"];

const EMBEDDED_CATALOGUES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("pt", include_str!("../../locales/pt.json")),
];

// Catálogo de mensagens por idioma: { "en": { "error.not_found": "..." } }
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogues: HashMap<String, HashMap<String, String>>,
}

impl I18nStore {
    pub fn load_embedded() -> anyhow::Result<Self> {
        let mut catalogues = HashMap::new();

        for (lang, raw) in EMBEDDED_CATALOGUES {
            let messages: HashMap<String, String> = serde_json::from_str(raw)
                .with_context(|| format!("invalid message catalogue for '{lang}'"))?;
            catalogues.insert(lang.to_string(), messages);
        }

        Ok(Self { catalogues })
    }

    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.translate_with(lang, key, &[])
    }

    /// Procura a chave em `lang`, depois no idioma padrão e, por fim, devolve a própria chave.
    /// Placeholders `{nome}` são trocados pelo argumento correspondente.
    pub fn translate_with(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> String {
        let template = self
            .lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .unwrap_or(key);

        args.iter().fold(template.to_string(), |message, (name, value)| {
            message.replace(&format!("{{{name}}}"), value)
        })
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.catalogues
            .get(lang)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}
