pub mod car_repo;
pub use car_repo::CarRepository;
pub mod content_repo;
pub use content_repo::ContentRepository;
pub mod lead_repo;
pub use lead_repo::LeadRepository;
