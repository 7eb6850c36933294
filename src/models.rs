pub mod admin;
pub mod car;
pub mod car_filter;
pub mod content;
pub mod leads;
