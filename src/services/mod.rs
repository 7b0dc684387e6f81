pub mod auth_service;
pub mod site_service;
pub mod user_store;

pub use user_store::UserStore;
