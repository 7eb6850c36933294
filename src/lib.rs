// src/lib.rs

use axum::{
    http::{
        header::{
            ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
        HeaderValue, Method,
    },
    middleware as axum_middleware,
    routing::{get, post, put, MethodRouter},
    Router,
};
use sqlx::migrate::Migrator;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::admin_guard;

pub static MIGRATOR: Migrator = sqlx::migrate!();

// Aplica o `admin_guard` só aos métodos deste MethodRouter.
fn guarded(app_state: &AppState, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(axum_middleware::from_fn_with_state(
        app_state.clone(),
        admin_guard,
    ))
}

pub fn build_router(app_state: AppState) -> Router {
    let state = &app_state;

    // Catálogo e conteúdo: leitura pública, escrita do admin
    let catalogue_routes = Router::new()
        .route(
            "/cars",
            get(handlers::cars::list_cars).merge(guarded(state, post(handlers::cars::create_car))),
        )
        .route(
            "/cars/{id}",
            get(handlers::cars::get_car).merge(guarded(
                state,
                put(handlers::cars::update_car).delete(handlers::cars::delete_car),
            )),
        )
        .route(
            "/hero-media",
            get(handlers::hero_media::list_hero_slides)
                .merge(guarded(state, post(handlers::hero_media::create_hero_slide))),
        )
        .route(
            "/hero-media/{id}",
            get(handlers::hero_media::get_hero_slide).merge(guarded(
                state,
                put(handlers::hero_media::update_hero_slide)
                    .delete(handlers::hero_media::delete_hero_slide),
            )),
        )
        .route(
            "/testimonials",
            get(handlers::testimonials::list_testimonials)
                .merge(guarded(state, post(handlers::testimonials::create_testimonial))),
        )
        .route(
            "/testimonials/{id}",
            get(handlers::testimonials::get_testimonial).merge(guarded(
                state,
                put(handlers::testimonials::update_testimonial)
                    .delete(handlers::testimonials::delete_testimonial),
            )),
        );

    // Leads: envio público, todo o resto só no back office
    let lead_routes = Router::new()
        .route(
            "/appointments",
            post(handlers::appointments::create_appointment)
                .merge(guarded(state, get(handlers::appointments::list_appointments))),
        )
        .route(
            "/appointments/{id}",
            guarded(
                state,
                get(handlers::appointments::get_appointment)
                    .put(handlers::appointments::update_appointment)
                    .delete(handlers::appointments::delete_appointment),
            ),
        )
        .route(
            "/preorders",
            post(handlers::preorders::create_preorder)
                .merge(guarded(state, get(handlers::preorders::list_preorders))),
        )
        .route(
            "/preorders/{id}",
            guarded(
                state,
                get(handlers::preorders::get_preorder)
                    .put(handlers::preorders::update_preorder)
                    .delete(handlers::preorders::delete_preorder),
            ),
        )
        .route(
            "/inquiries",
            post(handlers::inquiries::create_inquiry)
                .merge(guarded(state, get(handlers::inquiries::list_inquiries))),
        )
        .route(
            "/inquiries/{id}",
            guarded(
                state,
                get(handlers::inquiries::get_inquiry)
                    .put(handlers::inquiries::update_inquiry)
                    .delete(handlers::inquiries::delete_inquiry),
            ),
        )
        .route(
            "/corporate-requests",
            post(handlers::corporate_requests::create_corporate_request).merge(guarded(
                state,
                get(handlers::corporate_requests::list_corporate_requests),
            )),
        )
        .route(
            "/corporate-requests/{id}",
            guarded(
                state,
                get(handlers::corporate_requests::get_corporate_request)
                    .put(handlers::corporate_requests::update_corporate_request)
                    .delete(handlers::corporate_requests::delete_corporate_request),
            ),
        );

    let admin_routes = Router::new()
        .route("/login", post(handlers::admin::login))
        .route("/me", guarded(state, get(handlers::admin::get_me)))
        .route("/crm", guarded(state, get(handlers::admin::get_crm_overview)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT_LANGUAGE])
        .max_age(Duration::from_secs(60 * 60));

    let api_routes = Router::new()
        .route("/health", get(handlers::health::readiness))
        .merge(catalogue_routes)
        .merge(lead_routes)
        .nest("/admin", admin_routes);

    Router::new()
        .route("/health", get(handlers::health::liveness))
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        // Cabeçalhos de segurança no estilo do helmet. Não sobrescreve o que a rota já definiu.
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .with_state(app_state)
}
