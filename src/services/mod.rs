pub mod booking_service;
pub mod provider_service;
pub mod user_service;
