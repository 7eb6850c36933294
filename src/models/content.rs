// src/models/content.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::car::BuyerType;

// --- 1. Slides do carrossel (tabela 'hero_media') ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HeroSlide {
    pub id: Uuid,
    #[schema(example = "The Executive Phantom")]
    pub title: String,
    #[schema(example = "Uncompromising silence. Unparalleled presence.")]
    pub subtitle: String,
    pub image_url: String,
    // O front usa "Learn More" / "Contact Us" quando vier nulo.
    #[schema(example = "Visit Showroom")]
    pub cta_primary_text: Option<String>,
    #[schema(example = "Reserve Now")]
    pub cta_secondary_text: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewHeroSlide {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[validate(url(message = "invalid_url"))]
    pub image_url: String,

    pub cta_primary_text: Option<String>,
    pub cta_secondary_text: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "out_of_range"))]
    pub display_order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct HeroSlideChanges {
    #[validate(length(min = 1, message = "required"))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[validate(url(message = "invalid_url"))]
    pub image_url: Option<String>,
    pub cta_primary_text: Option<String>,
    pub cta_secondary_text: Option<String>,
    #[validate(range(min = 0, message = "out_of_range"))]
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HeroMediaQuery {
    /// `true` esconde os rascunhos (is_active = false)
    #[serde(default)]
    pub active: bool,
}

// --- 2. Depoimentos ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    #[schema(example = "Alexander V.")]
    pub client_name: String,
    #[schema(example = "Procurement Director, TechCorp")]
    pub role: Option<String>,
    pub client_type: BuyerType,
    pub content: String,
    #[schema(example = 5)]
    pub rating: i16,
    pub avatar_url: Option<String>,
    pub car_purchased_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewTestimonial {
    #[validate(length(min = 1, message = "required"))]
    pub client_name: String,

    pub role: Option<String>,

    #[serde(default)]
    pub client_type: BuyerType,

    #[validate(length(min = 1, message = "required"))]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "out_of_range"))]
    pub rating: i16,

    #[validate(url(message = "invalid_url"))]
    pub avatar_url: Option<String>,

    #[validate(url(message = "invalid_url"))]
    pub car_purchased_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct TestimonialChanges {
    #[validate(length(min = 1, message = "required"))]
    pub client_name: Option<String>,
    pub role: Option<String>,
    pub client_type: Option<BuyerType>,
    #[validate(length(min = 1, message = "required"))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "out_of_range"))]
    pub rating: Option<i16>,
    #[validate(url(message = "invalid_url"))]
    pub avatar_url: Option<String>,
    #[validate(url(message = "invalid_url"))]
    pub car_purchased_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TestimonialQuery {
    /// Máximo de depoimentos (a home mostra 3)
    #[validate(range(min = 1, max = 100, message = "out_of_range"))]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_slides_are_active_by_default() {
        let slide: NewHeroSlide = serde_json::from_value(json!({
            "title": "Velocity GT Series",
            "image_url": "https://images.example.com/gt.jpg"
        }))
        .unwrap();
        assert!(slide.is_active);
        assert_eq!(slide.display_order, 0);
        assert!(slide.validate().is_ok());
    }

    #[test]
    fn slide_image_must_be_a_url() {
        let slide: NewHeroSlide = serde_json::from_value(json!({
            "title": "Broken",
            "image_url": "linear-gradient(red, blue)"
        }))
        .unwrap();
        assert!(slide.validate().unwrap_err().field_errors().contains_key("image_url"));
    }

    #[test]
    fn rating_is_one_to_five() {
        for (rating, ok) in [(0, false), (1, true), (5, true), (6, false)] {
            let testimonial: NewTestimonial = serde_json::from_value(json!({
                "client_name": "Sarah J.",
                "client_type": "Individual",
                "content": "Flawless delivery.",
                "rating": rating
            }))
            .unwrap();
            assert_eq!(testimonial.validate().is_ok(), ok, "rating {rating}");
        }
    }

    #[test]
    fn testimonial_limit_is_bounded() {
        assert!(TestimonialQuery { limit: Some(3) }.validate().is_ok());
        assert!(TestimonialQuery { limit: None }.validate().is_ok());
        assert!(TestimonialQuery { limit: Some(0) }.validate().is_err());
        assert!(TestimonialQuery { limit: Some(1000) }.validate().is_err());
    }
}
