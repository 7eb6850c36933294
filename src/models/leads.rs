// src/models/leads.rs
//
// Formulários públicos do site. O admin lê tudo pela tela de CRM.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::car::BuyerType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "visit_type")]
pub enum VisitType {
    #[default]
    #[sqlx(rename = "Walk-in")]
    #[serde(rename = "Walk-in")]
    WalkIn,
    #[sqlx(rename = "Pre-Order")]
    #[serde(rename = "Pre-Order")]
    PreOrder,
}

// =============================================================================
//  AGENDAMENTOS (visita ao showroom)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    #[schema(example = "Charlotte Hale")]
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub appointment_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub visit_type: VisitType,
    pub buyer_type: BuyerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewAppointment {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Charlotte Hale")]
    pub full_name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "charlotte@example.com")]
    pub email: String,

    pub phone: Option<String>,

    #[schema(example = "2026-11-04")]
    pub appointment_date: Option<NaiveDate>,

    pub message: Option<String>,

    #[serde(default)]
    pub visit_type: VisitType,

    #[serde(default)]
    pub buyer_type: BuyerType,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AppointmentChanges {
    #[validate(length(min = 1, message = "required"))]
    pub full_name: Option<String>,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub appointment_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub visit_type: Option<VisitType>,
    pub buyer_type: Option<BuyerType>,
}

// =============================================================================
//  PRÉ-VENDAS (reserva de um modelo ainda não disponível)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Preorder {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Ferrari")]
    pub brand: String,
    #[schema(example = "SF90 Stradale")]
    pub model: Option<String>,
    pub color: Option<String>,
    pub expected_delivery: Option<NaiveDate>,
    pub notes: Option<String>,
    pub buyer_type: BuyerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewPreorder {
    #[validate(length(min = 1, message = "required"))]
    pub full_name: String,

    #[validate(email(message = "invalid_email"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ferrari")]
    pub brand: String,

    pub model: Option<String>,
    pub color: Option<String>,
    pub expected_delivery: Option<NaiveDate>,
    pub notes: Option<String>,

    #[serde(default)]
    pub buyer_type: BuyerType,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PreorderChanges {
    #[validate(length(min = 1, message = "required"))]
    pub full_name: Option<String>,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub expected_delivery: Option<NaiveDate>,
    pub notes: Option<String>,
    pub buyer_type: Option<BuyerType>,
}

// =============================================================================
//  CONTATO GERAL
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    #[schema(example = "New")]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewInquiry {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    pub email: String,

    pub phone: Option<String>,
    pub subject: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct InquiryChanges {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub message: Option<String>,
    // Texto livre ("New", "Contacted", ...). Sem máquina de estados.
    #[validate(length(min = 1, message = "required"))]
    pub status: Option<String>,
}

// =============================================================================
//  FROTAS CORPORATIVAS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CorporateRequest {
    pub id: Uuid,
    #[schema(example = "TechCorp Ltd.")]
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = 12)]
    pub fleet_size_interest: Option<i32>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewCorporateRequest {
    #[validate(length(min = 1, message = "required"))]
    pub company_name: String,

    #[validate(length(min = 1, message = "required"))]
    pub contact_person: String,

    #[validate(email(message = "invalid_email"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(range(min = 1, message = "out_of_range"))]
    pub fleet_size_interest: Option<i32>,

    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CorporateRequestChanges {
    #[validate(length(min = 1, message = "required"))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub contact_person: Option<String>,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 1, message = "out_of_range"))]
    pub fleet_size_interest: Option<i32>,
    pub message: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reservation_form_accepts_the_client_payload() {
        let preorder: NewPreorder = serde_json::from_value(json!({
            "full_name": "Jonathan Reed",
            "email": "jonathan@example.com",
            "phone": "+1 555 0100",
            "brand": "Porsche",
            "model": "911 Turbo S",
            "buyer_type": "Corporate"
        }))
        .unwrap();

        assert!(preorder.validate().is_ok());
        assert_eq!(preorder.buyer_type, BuyerType::Corporate);
    }

    #[test]
    fn leads_require_a_valid_email() {
        let inquiry: NewInquiry = serde_json::from_value(json!({
            "name": "Amelia",
            "email": "not-an-email",
            "message": "Is the Cullinan still available?"
        }))
        .unwrap();

        let errors = inquiry.validate().unwrap_err();
        let email_errors = &errors.field_errors()["email"];
        assert_eq!(email_errors[0].message.as_deref(), Some("invalid_email"));
    }

    #[test]
    fn visit_type_uses_display_spelling_and_defaults_to_walk_in() {
        let appointment: NewAppointment = serde_json::from_value(json!({
            "full_name": "Marcus Lee",
            "email": "marcus@example.com",
            "appointment_date": "2026-11-04"
        }))
        .unwrap();
        assert_eq!(appointment.visit_type, VisitType::WalkIn);
        assert_eq!(
            appointment.appointment_date,
            NaiveDate::from_ymd_opt(2026, 11, 4)
        );
        assert_eq!(serde_json::to_value(VisitType::PreOrder).unwrap(), json!("Pre-Order"));
    }

    #[test]
    fn fleet_size_must_be_positive() {
        let request: NewCorporateRequest = serde_json::from_value(json!({
            "company_name": "TechCorp",
            "contact_person": "Dana Wright",
            "email": "fleet@techcorp.example",
            "fleet_size_interest": 0
        }))
        .unwrap();
        assert!(request.validate().unwrap_err().field_errors().contains_key("fleet_size_interest"));
    }
}
