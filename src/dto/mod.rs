pub mod bookings;
pub mod providers;
pub mod users;
