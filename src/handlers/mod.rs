pub mod admin;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod portal;
pub mod profile_handler;
pub mod registration_handler;
