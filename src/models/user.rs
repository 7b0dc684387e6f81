use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const USERS_COLLECTION: &str = "users";

/// Stored user document. The password is kept as given (no hashing).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Validated signup payload, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        Self {
            id: None,
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
        }
    }
}

/// Validated login payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
