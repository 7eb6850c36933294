// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Health ---
        handlers::health::liveness,
        handlers::health::readiness,

        // --- Cars ---
        handlers::cars::list_cars,
        handlers::cars::get_car,
        handlers::cars::create_car,
        handlers::cars::update_car,
        handlers::cars::delete_car,

        // --- Hero ---
        handlers::hero_media::list_hero_slides,
        handlers::hero_media::get_hero_slide,
        handlers::hero_media::create_hero_slide,
        handlers::hero_media::update_hero_slide,
        handlers::hero_media::delete_hero_slide,

        // --- Testimonials ---
        handlers::testimonials::list_testimonials,
        handlers::testimonials::get_testimonial,
        handlers::testimonials::create_testimonial,
        handlers::testimonials::update_testimonial,
        handlers::testimonials::delete_testimonial,

        // --- Leads ---
        handlers::appointments::create_appointment,
        handlers::appointments::list_appointments,
        handlers::appointments::get_appointment,
        handlers::appointments::update_appointment,
        handlers::appointments::delete_appointment,
        handlers::preorders::create_preorder,
        handlers::preorders::list_preorders,
        handlers::preorders::get_preorder,
        handlers::preorders::update_preorder,
        handlers::preorders::delete_preorder,
        handlers::inquiries::create_inquiry,
        handlers::inquiries::list_inquiries,
        handlers::inquiries::get_inquiry,
        handlers::inquiries::update_inquiry,
        handlers::inquiries::delete_inquiry,
        handlers::corporate_requests::create_corporate_request,
        handlers::corporate_requests::list_corporate_requests,
        handlers::corporate_requests::get_corporate_request,
        handlers::corporate_requests::update_corporate_request,
        handlers::corporate_requests::delete_corporate_request,

        // --- Admin ---
        handlers::admin::login,
        handlers::admin::get_me,
        handlers::admin::get_crm_overview,
    ),
    components(
        schemas(
            handlers::health::HealthStatus,

            // --- Catálogo ---
            models::car::CarStatus,
            models::car::CarCondition,
            models::car::BuyerType,
            models::car::Car,
            models::car::NewCar,
            models::car::CarChanges,

            // --- Conteúdo ---
            models::content::HeroSlide,
            models::content::NewHeroSlide,
            models::content::HeroSlideChanges,
            models::content::Testimonial,
            models::content::NewTestimonial,
            models::content::TestimonialChanges,

            // --- Leads ---
            models::leads::VisitType,
            models::leads::Appointment,
            models::leads::NewAppointment,
            models::leads::AppointmentChanges,
            models::leads::Preorder,
            models::leads::NewPreorder,
            models::leads::PreorderChanges,
            models::leads::Inquiry,
            models::leads::NewInquiry,
            models::leads::InquiryChanges,
            models::leads::CorporateRequest,
            models::leads::NewCorporateRequest,
            models::leads::CorporateRequestChanges,

            // --- Admin ---
            models::admin::LoginPayload,
            models::admin::AdminToken,
            models::admin::AdminClaims,
            models::admin::AdminSessionView,
            models::admin::CrmOverview,
        )
    ),
    tags(
        (name = "Health", description = "Status do servidor e do banco"),
        (name = "Cars", description = "Catálogo de veículos"),
        (name = "Hero", description = "Carrossel da página inicial"),
        (name = "Testimonials", description = "Depoimentos de clientes"),
        (name = "Appointments", description = "Agendamentos de visita"),
        (name = "Preorders", description = "Reservas em pré-venda"),
        (name = "Inquiries", description = "Contato geral"),
        (name = "Corporate Requests", description = "Pedidos de frota corporativa"),
        (name = "Admin", description = "Login e CRM do back office")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
