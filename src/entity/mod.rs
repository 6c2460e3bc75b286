pub mod providers;
pub mod users;

pub use providers::Entity as Providers;
pub use users::Entity as Users;
