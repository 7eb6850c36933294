// src/config.rs

use anyhow::{bail, Context};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, sync::Arc, time::Duration};

use crate::{
    common::i18n::I18nStore,
    db::{CarRepository, ContentRepository, LeadRepository},
    services::{AuthService, CarService, ContentService, LeadService},
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Passcode do back office + segredo para assinar o JWT.
#[derive(Clone)]
pub struct AdminAuthConfig {
    pub passcode: String,
    pub jwt_secret: String,
}

// Manual para não vazar o passcode em logs.
impl std::fmt::Debug for AdminAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuthConfig").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_addr: String,
    pub admin: Option<AdminAuthConfig>,
}

impl Config {
    /// Lê o ambiente (e o `.env`, se existir).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Variável definida mas vazia conta como ausente.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: '{raw}'"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let server_addr = get("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        let admin = match (get("ADMIN_PASSCODE"), get("JWT_SECRET")) {
            (Some(passcode), Some(jwt_secret)) => Some(AdminAuthConfig { passcode, jwt_secret }),
            (Some(_), None) => bail!("JWT_SECRET deve ser definido quando ADMIN_PASSCODE está ativo"),
            (None, _) => None,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            server_addr,
            admin,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub i18n_store: Arc<I18nStore>,
    pub auth_service: AuthService,
    pub car_service: CarService,
    pub content_service: ContentService,
    pub lead_service: LeadService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Self::with_pool(db_pool, config)
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(db_pool: PgPool, config: &Config) -> anyhow::Result<Self> {
        let i18n_store = Arc::new(I18nStore::load_embedded()?);

        Ok(Self {
            db_pool,
            i18n_store,
            auth_service: AuthService::new(config.admin.clone()),
            car_service: CarService::new(CarRepository::new()),
            content_service: ContentService::new(ContentRepository::new()),
            lead_service: LeadService::new(LeadRepository::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_the_database_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/showroom")]).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:3000");
        assert_eq!(config.database_max_connections, 5);
        assert!(config.admin.is_none());
    }

    #[test]
    fn database_url_is_required() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn passcode_without_a_jwt_secret_is_rejected() {
        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/showroom"),
            ("ADMIN_PASSCODE", "velvet-garage"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn admin_login_is_enabled_by_passcode_and_secret() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/showroom"),
            ("ADMIN_PASSCODE", "velvet-garage"),
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.admin.unwrap().passcode, "velvet-garage");
    }

    #[test]
    fn invalid_pool_size_is_rejected() {
        for raw in ["zero", "0", "-3"] {
            let result = config_from(&[
                ("DATABASE_URL", "postgres://localhost/showroom"),
                ("DATABASE_MAX_CONNECTIONS", raw),
            ]);
            assert!(result.is_err(), "{raw} should be rejected");
        }
    }
}
