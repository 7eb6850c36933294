pub mod auth;
pub use auth::AuthService;
pub mod car_service;
pub use car_service::CarService;
pub mod content_service;
pub use content_service::ContentService;
pub mod lead_service;
pub use lead_service::LeadService;
