// src/services/auth.rs

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    config::AdminAuthConfig,
    models::admin::{AdminClaims, AdminToken, ADMIN_SUBJECT},
};

const TOKEN_TTL_HOURS: i64 = 12;

// Compara sempre o comprimento inteiro do passcode esperado, sem parar no primeiro byte diferente.
fn constant_time_eq(given: &[u8], expected: &[u8]) -> bool {
    let mut diff = u8::from(given.len() != expected.len());
    for (i, byte) in expected.iter().enumerate() {
        diff |= given.get(i).copied().unwrap_or(0) ^ byte;
    }
    std::hint::black_box(diff) == 0
}

// Login do back office: um único passcode configurado no servidor, trocado por um JWT.
#[derive(Clone)]
pub struct AuthService {
    admin: Option<AdminAuthConfig>,
}

impl AuthService {
    pub fn new(admin: Option<AdminAuthConfig>) -> Self {
        Self { admin }
    }

    /// Sem ADMIN_PASSCODE o back office fica aberto e o login é recusado.
    pub fn is_enabled(&self) -> bool {
        self.admin.is_some()
    }

    pub fn login(&self, passcode: &str) -> Result<AdminToken, AppError> {
        let admin = self.admin.as_ref().ok_or(AppError::AdminLoginDisabled)?;

        if !constant_time_eq(passcode.as_bytes(), admin.passcode.as_bytes()) {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(&admin.jwt_secret)
    }

    pub fn validate_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let admin = self.admin.as_ref().ok_or(AppError::InvalidToken)?;

        let token_data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(admin.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        if token_data.claims.sub != ADMIN_SUBJECT {
            return Err(AppError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    fn create_token(&self, jwt_secret: &str) -> Result<AdminToken, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(TOKEN_TTL_HOURS);

        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt_secret.as_bytes()),
        )?;

        Ok(AdminToken { token, expires_at })
    }
}
