use bson::{to_bson, Document};

use atheneum_models::v0;
use atheneum_result::Result;

use crate::MongoDb;
use crate::User;

use super::AbstractUsers;

static COL: &str = "users";

#[async_trait]
impl AbstractUsers for MongoDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        query!(self, insert_one, COL, user).map(|_| ())
    }

    /// Fetch a user by their id
    async fn fetch_user(&self, user_id: &str) -> Result<User> {
        query!(self, find_one_by_id, COL, user_id)?.ok_or_else(|| create_error!(UnknownUser))
    }

    /// Update a user's account standing
    async fn user_set_status(&self, user_id: &str, status: v0::UserAccountStatus) -> Result<()> {
        let result = self
            .col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": user_id
                },
                doc! {
                    "$set": {
                        "status": to_bson(&status)
                            .map_err(|_| create_database_error!("to_bson", COL))?
                    }
                },
            )
            .await
            .map_err(|_| create_database_error!("update_one", COL))?;

        if result.matched_count == 0 {
            Err(create_error!(UnknownUser))
        } else {
            Ok(())
        }
    }
}
