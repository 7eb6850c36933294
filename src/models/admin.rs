// src/models/admin.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::leads::{Appointment, CorporateRequest, Inquiry, Preorder};

pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "required"))]
    pub passcode: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// Claims do JWT do back office. Só existe um papel, então `sub` é fixo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminClaims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

/// Visão do CRM: todos os leads, do mais novo para o mais antigo.
#[derive(Debug, Serialize, ToSchema)]
pub struct CrmOverview {
    pub appointments: Vec<Appointment>,
    pub preorders: Vec<Preorder>,
    pub inquiries: Vec<Inquiry>,
    pub corporate_requests: Vec<CorporateRequest>,
}

/// Resposta de GET /api/admin/me
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSessionView {
    /// `false` quando o servidor roda sem ADMIN_PASSCODE (back office aberto)
    pub login_enabled: bool,
    pub claims: Option<AdminClaims>,
}
