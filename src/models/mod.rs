pub mod auth;
pub mod site;
pub mod user;

pub use auth::*;
pub use site::*;
pub use user::*;
