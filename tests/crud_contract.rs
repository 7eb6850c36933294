// tests/crud_contract.rs
//
// Contrato do CRUD contra um Postgres de verdade.
// Roda só com DATABASE_URL definida; sem ela cada teste retorna cedo.
// Cada teste usa uma marca única, então podem rodar em paralelo no mesmo banco.

use rust_decimal::Decimal;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use showroom::{
    common::error::{AppError, Resource},
    db::{CarRepository, ContentRepository, LeadRepository},
    models::{
        car::{BuyerType, CarChanges, CarCondition, CarStatus, NewCar},
        car_filter::{CarFilter, CarFilterQuery},
        content::{HeroSlide, NewHeroSlide, NewTestimonial},
        leads::{
            AppointmentChanges, CorporateRequestChanges, InquiryChanges, NewInquiry, NewPreorder,
            PreorderChanges,
        },
    },
    services::{CarService, ContentService, LeadService},
    MIGRATOR,
};

async fn pool() -> Option<PgPool> {
    let _ = dotenvy::dotenv();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL não definida, pulando teste de banco");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect to DATABASE_URL");
    MIGRATOR.run(&pool).await.expect("run migrations");
    Some(pool)
}

fn unique_brand() -> String {
    format!("Test-{}", Uuid::new_v4())
}

fn new_car(brand: &str, price: i64, buyers: &[BuyerType], status: CarStatus) -> NewCar {
    NewCar {
        brand: brand.to_string(),
        model: "Phantom".to_string(),
        year: 2024,
        price: Decimal::from(price),
        mileage: 0,
        transmission: "Automatic".to_string(),
        fuel_type: "Petrol".to_string(),
        status,
        buyer_type: buyers.to_vec(),
        image_url: None,
        condition: Some(CarCondition::New),
    }
}

fn filter(pairs: &[(&str, &str)]) -> CarFilter {
    let mut query = CarFilterQuery::default();
    for (key, value) in pairs {
        let value = Some(value.to_string());
        match *key {
            "brand" => query.brand = value,
            "min_price" => query.min_price = value,
            "max_price" => query.max_price = value,
            "buyer_type" => query.buyer_type = value,
            "status" => query.status = value,
            "preorder" => query.preorder = value,
            "condition" => query.condition = value,
            other => panic!("unknown filter {other}"),
        }
    }
    CarFilter::try_from(query).expect("valid filter")
}

fn cars() -> CarService {
    CarService::new(CarRepository::new())
}

fn content() -> ContentService {
    ContentService::new(ContentRepository::new())
}

fn leads() -> LeadService {
    LeadService::new(LeadRepository::new())
}

fn slide(title: String, display_order: i32, is_active: bool) -> NewHeroSlide {
    NewHeroSlide {
        title,
        subtitle: String::new(),
        image_url: "https://images.example.com/slide.jpg".to_string(),
        cta_primary_text: None,
        cta_secondary_text: None,
        display_order,
        is_active,
    }
}

fn testimonial(client_name: &str, rating: i16) -> NewTestimonial {
    NewTestimonial {
        client_name: client_name.to_string(),
        role: None,
        client_type: BuyerType::Individual,
        content: "Flawless delivery.".to_string(),
        rating,
        avatar_url: None,
        car_purchased_image_url: None,
    }
}

#[tokio::test]
async fn created_car_is_listed_by_matching_filters() {
    let Some(pool) = pool().await else { return };
    let brand = unique_brand();

    let car = cars()
        .create_car(&pool, &new_car(&brand, 340_000, &[BuyerType::Corporate], CarStatus::Available))
        .await
        .unwrap();

    let listed = cars()
        .list_cars(
            &pool,
            &filter(&[("brand", brand.as_str()), ("buyer_type", "Corporate"), ("max_price", "340000")]),
        )
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, car.id);

    let too_expensive = cars()
        .list_cars(&pool, &filter(&[("brand", brand.as_str()), ("min_price", "340000.01")]))
        .await
        .unwrap();
    assert!(too_expensive.is_empty());
}

#[tokio::test]
async fn deleted_car_disappears_from_listings() {
    let Some(pool) = pool().await else { return };
    let brand = unique_brand();

    let car = cars()
        .create_car(&pool, &new_car(&brand, 90_000, &[BuyerType::Individual], CarStatus::Available))
        .await
        .unwrap();

    cars().delete_car(&pool, car.id).await.unwrap();

    let listed = cars().list_cars(&pool, &filter(&[("brand", brand.as_str())])).await.unwrap();
    assert!(listed.is_empty());

    assert!(matches!(
        cars().get_car(&pool, car.id).await,
        Err(AppError::NotFound(Resource::Car))
    ));
    assert!(matches!(
        cars().delete_car(&pool, car.id).await,
        Err(AppError::NotFound(Resource::Car))
    ));
}

#[tokio::test]
async fn filters_are_conjunctive_and_agree_with_the_in_memory_predicate() {
    let Some(pool) = pool().await else { return };
    let brand = unique_brand();

    let individual = cars()
        .create_car(&pool, &new_car(&brand, 100_000, &[BuyerType::Individual], CarStatus::Available))
        .await
        .unwrap();
    let corporate = cars()
        .create_car(
            &pool,
            &new_car(&brand, 300_000, &[BuyerType::Corporate, BuyerType::Individual], CarStatus::PreOrder),
        )
        .await
        .unwrap();

    // Mais novo primeiro.
    let all = cars().list_cars(&pool, &filter(&[("brand", brand.as_str())])).await.unwrap();
    assert_eq!(
        all.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![corporate.id, individual.id]
    );

    let cases: Vec<(Vec<(&str, &str)>, Vec<Uuid>)> = vec![
        (vec![("buyer_type", "Corporate"), ("max_price", "200000")], vec![]),
        (vec![("buyer_type", "Individual")], vec![corporate.id, individual.id]),
        (vec![("preorder", "true")], vec![corporate.id]),
        (vec![("preorder", "true"), ("status", "Available")], vec![]),
        (vec![("min_price", "100000"), ("max_price", "100000")], vec![individual.id]),
        (vec![("condition", "Used")], vec![]),
    ];

    for (pairs, expected) in cases {
        let mut with_brand = vec![("brand", brand.as_str())];
        with_brand.extend(pairs.iter().copied());
        let car_filter = filter(&with_brand);

        let listed = cars().list_cars(&pool, &car_filter).await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|c| c.id).collect();
        assert_eq!(ids, expected, "filter {pairs:?}");

        let in_memory: Vec<Uuid> = all
            .iter()
            .filter(|c| car_filter.matches(c))
            .map(|c| c.id)
            .collect();
        assert_eq!(in_memory, ids, "in-memory disagrees for {pairs:?}");
    }
}

#[tokio::test]
async fn partial_update_keeps_absent_fields() {
    let Some(pool) = pool().await else { return };
    let brand = unique_brand();

    let car = cars()
        .create_car(&pool, &new_car(&brand, 250_000, &[BuyerType::Individual], CarStatus::Available))
        .await
        .unwrap();

    let changes = CarChanges {
        status: Some(CarStatus::Reserved),
        ..Default::default()
    };
    let updated = cars().update_car(&pool, car.id, &changes).await.unwrap();

    assert_eq!(updated.status, CarStatus::Reserved);
    assert_eq!(updated.price, car.price);
    assert_eq!(updated.buyer_type, car.buyer_type);
    assert!(updated.updated_at >= car.updated_at);

    assert!(matches!(
        cars().update_car(&pool, Uuid::new_v4(), &changes).await,
        Err(AppError::NotFound(Resource::Car))
    ));
}

#[tokio::test]
async fn valid_reservation_persists_exactly_one_preorder() {
    let Some(pool) = pool().await else { return };
    let email = format!("{}@example.com", Uuid::new_v4());

    let count = |pool: PgPool, email: String| async move {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM preorders WHERE email = $1")
            .bind(email)
            .fetch_one(&pool)
            .await
            .unwrap()
    };
    assert_eq!(count(pool.clone(), email.clone()).await, 0);

    let payload = NewPreorder {
        full_name: "Jonathan Reed".to_string(),
        email: email.clone(),
        phone: None,
        brand: "Porsche".to_string(),
        model: Some("911 Turbo S".to_string()),
        color: None,
        expected_delivery: None,
        notes: None,
        buyer_type: BuyerType::Corporate,
    };
    let preorder = leads().submit_preorder(&pool, &payload).await.unwrap();

    assert_eq!(count(pool.clone(), email.clone()).await, 1);
    assert_eq!(leads().get_preorder(&pool, preorder.id).await.unwrap().email, email);

    let overview = leads().crm_overview(&pool).await.unwrap();
    assert!(overview.preorders.iter().any(|p| p.id == preorder.id));
}

#[tokio::test]
async fn database_checks_surface_as_constraint_violations() {
    let Some(pool) = pool().await else { return };

    // Pula a validação do payload de propósito para bater no CHECK da tabela.
    let mut car = new_car(&unique_brand(), 1, &[BuyerType::Individual], CarStatus::Available);
    car.mileage = -5;

    assert!(matches!(
        cars().create_car(&pool, &car).await,
        Err(AppError::ConstraintViolation(_))
    ));
}

#[tokio::test]
async fn hero_slides_follow_display_order_and_hide_drafts() {
    let Some(pool) = pool().await else { return };
    let marker = Uuid::new_v4().to_string();
    let title = |n: &str| format!("{marker} {n}");

    // Criados fora de ordem de propósito.
    let second = content().create_hero_slide(&pool, &slide(title("second"), 2, true)).await.unwrap();
    let first = content().create_hero_slide(&pool, &slide(title("first"), 1, true)).await.unwrap();
    let draft = content().create_hero_slide(&pool, &slide(title("draft"), 0, false)).await.unwrap();

    let ours = |slides: Vec<HeroSlide>| -> Vec<Uuid> {
        slides
            .into_iter()
            .filter(|s| s.title.starts_with(&marker))
            .map(|s| s.id)
            .collect()
    };

    let everything = content().list_hero_slides(&pool, false).await.unwrap();
    assert_eq!(ours(everything), vec![draft.id, first.id, second.id]);

    let active = content().list_hero_slides(&pool, true).await.unwrap();
    assert_eq!(ours(active), vec![first.id, second.id]);

    for id in [first.id, second.id, draft.id] {
        content().delete_hero_slide(&pool, id).await.unwrap();
    }
}

#[tokio::test]
async fn testimonial_limit_is_optional() {
    let Some(pool) = pool().await else { return };
    let name = format!("Client {}", Uuid::new_v4());

    let older = content().create_testimonial(&pool, &testimonial(&name, 5)).await.unwrap();
    let newer = content().create_testimonial(&pool, &testimonial(&name, 4)).await.unwrap();

    // Sem limite volta tudo (LIMIT NULL).
    let all = content().list_testimonials(&pool, None).await.unwrap();
    assert!(all.len() >= 2);
    assert!(all.iter().any(|t| t.id == older.id));
    assert!(all.iter().any(|t| t.id == newer.id));

    let one = content().list_testimonials(&pool, Some(1)).await.unwrap();
    assert_eq!(one.len(), 1);

    content().delete_testimonial(&pool, older.id).await.unwrap();
    content().delete_testimonial(&pool, newer.id).await.unwrap();
}

#[tokio::test]
async fn testimonial_rating_is_checked_by_the_database() {
    let Some(pool) = pool().await else { return };

    // Sem `validate()`: o CHECK da coluna também recusa.
    for rating in [0, 7] {
        assert!(matches!(
            content().create_testimonial(&pool, &testimonial("Out of range", rating)).await,
            Err(AppError::ConstraintViolation(_))
        ));
    }
}

#[tokio::test]
async fn inquiry_status_update_keeps_the_rest_of_the_lead() {
    let Some(pool) = pool().await else { return };
    let email = format!("{}@example.com", Uuid::new_v4());

    let inquiry = leads()
        .submit_inquiry(
            &pool,
            &NewInquiry {
                name: "Amelia".to_string(),
                email: email.clone(),
                phone: Some("+44 20 0000 0000".to_string()),
                subject: Some("Cullinan".to_string()),
                message: "Is the Cullinan still available?".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(inquiry.status, "New");

    let changes = InquiryChanges {
        status: Some("Contacted".to_string()),
        ..Default::default()
    };
    let updated = leads().update_inquiry(&pool, inquiry.id, &changes).await.unwrap();

    assert_eq!(updated.status, "Contacted");
    assert_eq!(updated.name, inquiry.name);
    assert_eq!(updated.email, email);
    assert_eq!(updated.phone, inquiry.phone);
    assert_eq!(updated.subject, inquiry.subject);
    assert_eq!(updated.message, inquiry.message);
    assert!(updated.updated_at >= inquiry.updated_at);

    leads().delete_inquiry(&pool, inquiry.id).await.unwrap();
    assert!(matches!(
        leads().get_inquiry(&pool, inquiry.id).await,
        Err(AppError::NotFound(Resource::Inquiry))
    ));
}

#[tokio::test]
async fn missing_leads_are_not_found_on_update_and_delete() {
    let Some(pool) = pool().await else { return };
    let missing = Uuid::new_v4();

    assert!(matches!(
        leads().update_appointment(&pool, missing, &AppointmentChanges::default()).await,
        Err(AppError::NotFound(Resource::Appointment))
    ));
    assert!(matches!(
        leads().delete_appointment(&pool, missing).await,
        Err(AppError::NotFound(Resource::Appointment))
    ));
    assert!(matches!(
        leads().update_preorder(&pool, missing, &PreorderChanges::default()).await,
        Err(AppError::NotFound(Resource::Preorder))
    ));
    assert!(matches!(
        leads().delete_preorder(&pool, missing).await,
        Err(AppError::NotFound(Resource::Preorder))
    ));
    assert!(matches!(
        leads().update_inquiry(&pool, missing, &InquiryChanges::default()).await,
        Err(AppError::NotFound(Resource::Inquiry))
    ));
    assert!(matches!(
        leads().delete_inquiry(&pool, missing).await,
        Err(AppError::NotFound(Resource::Inquiry))
    ));
    assert!(matches!(
        leads()
            .update_corporate_request(&pool, missing, &CorporateRequestChanges::default())
            .await,
        Err(AppError::NotFound(Resource::CorporateRequest))
    ));
    assert!(matches!(
        leads().delete_corporate_request(&pool, missing).await,
        Err(AppError::NotFound(Resource::CorporateRequest))
    ));
}
