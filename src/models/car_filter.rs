// src/models/car_filter.rs

use rust_decimal::Decimal;
use serde::{de::IntoDeserializer, Deserialize};
use sqlx::{Postgres, QueryBuilder};
use std::str::FromStr;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    models::car::{BuyerType, Car, CarCondition, CarStatus},
};

// Query string crua de GET /api/cars. Tudo chega como texto; a conversão
// (e o erro 400) acontece no TryFrom abaixo.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarFilterQuery {
    /// Marca exata (ex: "Bentley")
    pub brand: Option<String>,
    /// Preço mínimo (inclusive)
    pub min_price: Option<String>,
    /// Preço máximo (inclusive)
    pub max_price: Option<String>,
    /// "Individual" ou "Corporate"
    pub buyer_type: Option<String>,
    /// "Available", "Reserved" ou "Pre-Order"
    pub status: Option<String>,
    /// "true" mostra apenas carros em pré-venda
    pub preorder: Option<String>,
    /// "New", "Used" ou "Certified Pre-Owned"
    pub condition: Option<String>,
}

/// Filtro do catálogo: uma conjunção (AND) de checagens independentes.
/// Campo `None` não restringe nada.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarFilter {
    pub brand: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub buyer_type: Option<BuyerType>,
    pub status: Option<CarStatus>,
    pub preorder_only: bool,
    pub condition: Option<CarCondition>,
}

// Strings vazias (ou só espaços) contam como parâmetro ausente.
// O valor segue intacto: "Bentley " não é a marca "Bentley".
fn present(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

// Reaproveita os `rename` do serde, então "Pre-Order" funciona igual no JSON e na query.
fn parse_enum<T>(raw: Option<String>, param: &'static str) -> Result<Option<T>, AppError>
where
    T: for<'de> Deserialize<'de>,
{
    present(raw)
        .map(|value| {
            T::deserialize(IntoDeserializer::<serde::de::value::Error>::into_deserializer(
                value.as_str(),
            ))
            .map_err(|_| AppError::InvalidQuery(param))
        })
        .transpose()
}

// Preço zero não filtra nada, então é tratado como ausente.
fn parse_price(raw: Option<String>, param: &'static str) -> Result<Option<Decimal>, AppError> {
    let Some(value) = present(raw) else {
        return Ok(None);
    };
    // Aceita a mesma forma numérica do cliente, inclusive notação científica ("1e5").
    let value = value.trim();
    let price = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| AppError::InvalidQuery(param))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::InvalidQuery(param));
    }
    Ok((!price.is_zero()).then_some(price))
}

impl TryFrom<CarFilterQuery> for CarFilter {
    type Error = AppError;

    fn try_from(query: CarFilterQuery) -> Result<Self, Self::Error> {
        let min_price = parse_price(query.min_price, "min_price")?;
        let max_price = parse_price(query.max_price, "max_price")?;

        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                return Err(AppError::InvalidQuery("min_price"));
            }
        }

        Ok(Self {
            brand: present(query.brand),
            min_price,
            max_price,
            buyer_type: parse_enum(query.buyer_type, "buyer_type")?,
            status: parse_enum(query.status, "status")?,
            preorder_only: present(query.preorder).as_deref() == Some("true"),
            condition: parse_enum(query.condition, "condition")?,
        })
    }
}

impl CarFilter {
    /// Avaliação em memória. Tem que concordar com `push_predicates`.
    pub fn matches(&self, car: &Car) -> bool {
        self.brand.as_deref().is_none_or(|brand| car.brand == brand)
            && self.min_price.is_none_or(|min| car.price >= min)
            && self.max_price.is_none_or(|max| car.price <= max)
            && self
                .buyer_type
                .is_none_or(|buyer| car.buyer_type.contains(&buyer))
            && self.status.is_none_or(|status| car.status == status)
            && (!self.preorder_only || car.status == CarStatus::PreOrder)
            && self
                .condition
                .is_none_or(|condition| car.condition == Some(condition))
    }

    /// Acrescenta o mesmo predicado como cláusulas WHERE, sempre com parâmetros ligados.
    pub fn push_predicates(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut clauses = 0;

        if let Some(brand) = &self.brand {
            push_keyword(qb, &mut clauses);
            qb.push("brand = ").push_bind(brand.clone());
        }
        if let Some(min) = self.min_price {
            push_keyword(qb, &mut clauses);
            qb.push("price >= ").push_bind(min);
        }
        if let Some(max) = self.max_price {
            push_keyword(qb, &mut clauses);
            qb.push("price <= ").push_bind(max);
        }
        if let Some(buyer) = self.buyer_type {
            push_keyword(qb, &mut clauses);
            qb.push_bind(buyer).push(" = ANY(buyer_type)");
        }
        if let Some(status) = self.status {
            push_keyword(qb, &mut clauses);
            qb.push("status = ").push_bind(status);
        }
        if self.preorder_only {
            push_keyword(qb, &mut clauses);
            qb.push("status = ").push_bind(CarStatus::PreOrder);
        }
        if let Some(condition) = self.condition {
            push_keyword(qb, &mut clauses);
            qb.push("condition = ").push_bind(condition);
        }
    }
}

fn push_keyword(qb: &mut QueryBuilder<'_, Postgres>, clauses: &mut usize) {
    qb.push(if *clauses == 0 { " WHERE " } else { " AND " });
    *clauses += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn car(brand: &str, price: i64, status: CarStatus, buyers: &[BuyerType]) -> Car {
        Car {
            id: Uuid::new_v4(),
            brand: brand.to_string(),
            model: "Test".to_string(),
            year: 2024,
            price: Decimal::from(price),
            mileage: 0,
            transmission: "Automatic".to_string(),
            fuel_type: "Petrol".to_string(),
            status,
            buyer_type: buyers.to_vec(),
            image_url: None,
            condition: Some(CarCondition::New),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn query(pairs: &[(&str, &str)]) -> CarFilterQuery {
        let mut q = CarFilterQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "brand" => q.brand = value,
                "min_price" => q.min_price = value,
                "max_price" => q.max_price = value,
                "buyer_type" => q.buyer_type = value,
                "status" => q.status = value,
                "preorder" => q.preorder = value,
                "condition" => q.condition = value,
                other => panic!("unknown param {other}"),
            }
        }
        q
    }

    fn parse(pairs: &[(&str, &str)]) -> CarFilter {
        CarFilter::try_from(query(pairs)).expect("valid filter")
    }

    #[test]
    fn empty_query_matches_everything() {
        let filter = parse(&[]);
        assert_eq!(filter, CarFilter::default());
        assert!(filter.matches(&car("Bentley", 1, CarStatus::Reserved, &[])));
    }

    #[test]
    fn blank_values_and_zero_prices_are_ignored() {
        let filter = parse(&[("brand", ""), ("min_price", "0"), ("status", "  ")]);
        assert_eq!(filter, CarFilter::default());
    }

    #[test]
    fn brand_is_compared_verbatim() {
        let filter = parse(&[("brand", "Bentley ")]);
        assert_eq!(filter.brand.as_deref(), Some("Bentley "));
        assert!(!filter.matches(&car("Bentley", 1, CarStatus::Available, &[])));
        assert!(filter.matches(&car("Bentley ", 1, CarStatus::Available, &[])));
    }

    #[test]
    fn prices_accept_scientific_notation_and_padding() {
        let filter = parse(&[("min_price", "1e5"), ("max_price", " 2.5E5 ")]);
        assert_eq!(filter.min_price, Some(Decimal::from(100_000)));
        assert_eq!(filter.max_price, Some(Decimal::from(250_000)));
    }

    #[test]
    fn parses_display_spellings() {
        let filter = parse(&[
            ("status", "Pre-Order"),
            ("buyer_type", "Corporate"),
            ("condition", "Certified Pre-Owned"),
            ("min_price", "100000.50"),
        ]);
        assert_eq!(filter.status, Some(CarStatus::PreOrder));
        assert_eq!(filter.buyer_type, Some(BuyerType::Corporate));
        assert_eq!(filter.condition, Some(CarCondition::CertifiedPreOwned));
        assert_eq!(filter.min_price, Some(Decimal::from_str("100000.50").unwrap()));
    }

    #[test]
    fn preorder_flag_requires_the_literal_true() {
        assert!(parse(&[("preorder", "true")]).preorder_only);
        assert!(!parse(&[("preorder", "1")]).preorder_only);
        assert!(!parse(&[("preorder", "false")]).preorder_only);
    }

    #[test]
    fn bad_values_name_the_offending_parameter() {
        let cases = [
            (("status", "Sold"), "status"),
            (("buyer_type", "Government"), "buyer_type"),
            (("min_price", "cheap"), "min_price"),
            (("max_price", "-5"), "max_price"),
            (("max_price", "-1e3"), "max_price"),
            (("condition", " Used"), "condition"),
        ];
        for ((key, value), expected) in cases {
            match CarFilter::try_from(query(&[(key, value)])) {
                Err(AppError::InvalidQuery(param)) => assert_eq!(param, expected),
                other => panic!("expected InvalidQuery({expected}), got {other:?}"),
            }
        }
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let result = CarFilter::try_from(query(&[("min_price", "500"), ("max_price", "100")]));
        assert!(matches!(result, Err(AppError::InvalidQuery("min_price"))));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let filter = parse(&[("brand", "Bentley"), ("max_price", "400000")]);

        assert!(filter.matches(&car("Bentley", 340_000, CarStatus::Available, &[])));
        // Marca certa, preço errado.
        assert!(!filter.matches(&car("Bentley", 500_000, CarStatus::Available, &[])));
        // Preço certo, marca errada.
        assert!(!filter.matches(&car("Porsche", 200_000, CarStatus::Available, &[])));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filter = parse(&[("min_price", "100"), ("max_price", "200")]);
        assert!(filter.matches(&car("X", 100, CarStatus::Available, &[])));
        assert!(filter.matches(&car("X", 200, CarStatus::Available, &[])));
        assert!(!filter.matches(&car("X", 201, CarStatus::Available, &[])));
    }

    #[test]
    fn buyer_type_is_set_membership() {
        let filter = parse(&[("buyer_type", "Corporate")]);
        let both = [BuyerType::Individual, BuyerType::Corporate];
        assert!(filter.matches(&car("X", 1, CarStatus::Available, &both)));
        assert!(!filter.matches(&car("X", 1, CarStatus::Available, &[BuyerType::Individual])));
    }

    #[test]
    fn preorder_with_a_different_status_matches_nothing() {
        let filter = parse(&[("preorder", "true"), ("status", "Available")]);
        assert!(!filter.matches(&car("X", 1, CarStatus::Available, &[])));
        assert!(!filter.matches(&car("X", 1, CarStatus::PreOrder, &[])));
    }

    #[test]
    fn condition_must_match_when_requested() {
        let filter = parse(&[("condition", "Used")]);
        let mut unknown = car("X", 1, CarStatus::Available, &[]);
        unknown.condition = None;
        assert!(!filter.matches(&unknown));
    }

    #[test]
    fn sql_has_no_where_clause_without_filters() {
        let mut qb = QueryBuilder::new("SELECT * FROM cars");
        CarFilter::default().push_predicates(&mut qb);
        assert_eq!(qb.sql(), "SELECT * FROM cars");
    }

    #[test]
    fn sql_joins_every_predicate_with_and() {
        let filter = parse(&[
            ("brand", "Porsche"),
            ("min_price", "1"),
            ("max_price", "2"),
            ("buyer_type", "Individual"),
            ("status", "Available"),
            ("preorder", "true"),
            ("condition", "New"),
        ]);
        let mut qb = QueryBuilder::new("SELECT * FROM cars");
        filter.push_predicates(&mut qb);

        assert_eq!(
            qb.sql(),
            "SELECT * FROM cars WHERE brand = $1 AND price >= $2 AND price <= $3 \
             AND $4 = ANY(buyer_type) AND status = $5 AND status = $6 AND condition = $7"
        );
        assert!(!qb.sql().contains("OR"));
    }

    #[test]
    fn sql_never_inlines_values() {
        let filter = parse(&[("brand", "Rolls-Royce'; DROP TABLE cars; --")]);
        let mut qb = QueryBuilder::new("SELECT * FROM cars");
        filter.push_predicates(&mut qb);
        assert_eq!(qb.sql(), "SELECT * FROM cars WHERE brand = $1");
    }
}
