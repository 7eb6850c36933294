// src/models/car.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- ENUMS (espelham os CREATE TYPE da migração) ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "car_status")]
pub enum CarStatus {
    #[default]
    Available,
    Reserved,
    #[sqlx(rename = "Pre-Order")]
    #[serde(rename = "Pre-Order")]
    PreOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "car_condition")]
pub enum CarCondition {
    New,
    Used,
    #[sqlx(rename = "Certified Pre-Owned")]
    #[serde(rename = "Certified Pre-Owned")]
    CertifiedPreOwned,
}

/// Segmento de demanda. Um carro pode servir aos dois ao mesmo tempo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "buyer_type")]
pub enum BuyerType {
    #[default]
    Individual,
    Corporate,
}

// --- CARRO (linha da tabela 'cars') ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Car {
    pub id: Uuid,
    #[schema(example = "Rolls-Royce")]
    pub brand: String,
    #[schema(example = "Phantom Extended")]
    pub model: String,
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(value_type = f64, example = 650000)]
    pub price: Decimal,
    #[schema(example = 450)]
    pub mileage: i32,
    #[schema(example = "Automatic")]
    pub transmission: String,
    #[schema(example = "Petrol")]
    pub fuel_type: String,
    pub status: CarStatus,
    pub buyer_type: Vec<BuyerType>,
    pub image_url: Option<String>,
    pub condition: Option<CarCondition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---
// Validação Customizada
// ---
pub(crate) fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("negative_value".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: NewCar (POST /api/cars)
// ---
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewCar {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Bentley")]
    pub brand: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Continental GT Speed")]
    pub model: String,

    #[validate(range(min = 1886, max = 2100, message = "out_of_range"))]
    #[schema(example = 2024)]
    pub year: i32,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = f64, example = 340000)]
    pub price: Decimal,

    #[serde(default)]
    #[validate(range(min = 0, message = "negative_value"))]
    pub mileage: i32,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Automatic")]
    pub transmission: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Petrol")]
    pub fuel_type: String,

    #[serde(default)]
    pub status: CarStatus,

    // Precisa servir a pelo menos um segmento.
    #[validate(length(min = 1, message = "empty_set"))]
    #[schema(example = json!(["Corporate", "Individual"]))]
    pub buyer_type: Vec<BuyerType>,

    #[validate(url(message = "invalid_url"))]
    pub image_url: Option<String>,

    pub condition: Option<CarCondition>,
}

// ---
// Payload: CarChanges (PUT /api/cars/{id}). Campos ausentes mantêm o valor salvo
// ---
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CarChanges {
    #[validate(length(min = 1, message = "required"))]
    pub brand: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub model: Option<String>,

    #[validate(range(min = 1886, max = 2100, message = "out_of_range"))]
    pub year: Option<i32>,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,

    #[validate(range(min = 0, message = "negative_value"))]
    pub mileage: Option<i32>,

    #[validate(length(min = 1, message = "required"))]
    pub transmission: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub fuel_type: Option<String>,

    pub status: Option<CarStatus>,

    #[validate(length(min = 1, message = "empty_set"))]
    pub buyer_type: Option<Vec<BuyerType>>,

    #[validate(url(message = "invalid_url"))]
    pub image_url: Option<String>,

    pub condition: Option<CarCondition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_car() -> serde_json::Value {
        json!({
            "brand": "Rolls-Royce",
            "model": "Phantom Extended",
            "year": 2024,
            "price": 650000,
            "mileage": 450,
            "transmission": "Automatic",
            "fuel_type": "Petrol",
            "status": "Pre-Order",
            "buyer_type": ["Corporate", "Individual"],
            "condition": "Certified Pre-Owned"
        })
    }

    #[test]
    fn enums_use_their_display_spelling() {
        let car: NewCar = serde_json::from_value(valid_car()).unwrap();
        assert_eq!(car.status, CarStatus::PreOrder);
        assert_eq!(car.condition, Some(CarCondition::CertifiedPreOwned));
        assert_eq!(serde_json::to_value(CarStatus::PreOrder).unwrap(), json!("Pre-Order"));
    }

    #[test]
    fn a_complete_car_is_valid() {
        let car: NewCar = serde_json::from_value(valid_car()).unwrap();
        assert!(car.validate().is_ok());
    }

    #[test]
    fn status_defaults_to_available() {
        let mut raw = valid_car();
        raw.as_object_mut().unwrap().remove("status");
        let car: NewCar = serde_json::from_value(raw).unwrap();
        assert_eq!(car.status, CarStatus::Available);
    }

    #[test]
    fn negative_price_and_empty_buyer_types_are_rejected() {
        let mut raw = valid_car();
        raw["price"] = json!(-1);
        raw["buyer_type"] = json!([]);
        let car: NewCar = serde_json::from_value(raw).unwrap();

        let errors = car.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("buyer_type"));
    }

    #[test]
    fn implausible_years_are_rejected() {
        let mut raw = valid_car();
        raw["year"] = json!(1700);
        let car: NewCar = serde_json::from_value(raw).unwrap();
        assert!(car.validate().unwrap_err().field_errors().contains_key("year"));
    }

    #[test]
    fn partial_changes_only_validate_present_fields() {
        let changes: CarChanges = serde_json::from_value(json!({ "status": "Reserved" })).unwrap();
        assert!(changes.validate().is_ok());

        let changes: CarChanges = serde_json::from_value(json!({ "brand": "" })).unwrap();
        assert!(changes.validate().unwrap_err().field_errors().contains_key("brand"));
    }
}
