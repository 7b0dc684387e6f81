use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::database::MongoDB;
use crate::models::{Credentials, NewUser, User, USERS_COLLECTION};
use crate::utils::AppError;

/// Access to stored user records. Handlers receive it as shared app data.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact match on both fields.
    async fn find_by_credentials(&self, credentials: &Credentials) -> Result<Option<User>, AppError>;

    /// Inserts `new_user` unless a record with the same email exists, as a
    /// single conditional write. Returns `false` when the email was taken.
    async fn insert_if_absent(&self, new_user: &NewUser) -> Result<bool, AppError>;

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn users(db: &MongoDB) -> Collection<User> {
    db.collection::<User>(USERS_COLLECTION)
}

#[async_trait]
impl UserStore for MongoDB {
    async fn find_by_credentials(&self, credentials: &Credentials) -> Result<Option<User>, AppError> {
        let filter = doc! {
            "email": &credentials.email,
            "password": &credentials.password,
        };
        Ok(users(self).find_one(filter).await?)
    }

    // One upsert: the filter matches on email and $setOnInsert only applies
    // when no document matched. The pre-image tells us which case happened.
    // Without a unique index on `email` the server can still race two
    // upserts into two documents, but the window is a single round trip.
    async fn insert_if_absent(&self, new_user: &NewUser) -> Result<bool, AppError> {
        let filter = doc! { "email": &new_user.email };
        let update = doc! {
            "$setOnInsert": {
                "name": &new_user.name,
                "password": &new_user.password,
            }
        };

        let previous = users(self)
            .find_one_and_update(filter, update)
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .await?;

        Ok(previous.is_none())
    }

    async fn ping(&self) -> Result<(), AppError> {
        MongoDB::ping(self).await?;
        Ok(())
    }
}
