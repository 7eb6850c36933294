pub mod admin;
pub mod appointments;
pub mod cars;
pub mod corporate_requests;
pub mod health;
pub mod hero_media;
pub mod inquiries;
pub mod preorders;
pub mod testimonials;
