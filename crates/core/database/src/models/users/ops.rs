use atheneum_models::v0;
use atheneum_result::Result;

use crate::User;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractUsers: Sync + Send {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// Fetch a user by their id
    async fn fetch_user(&self, user_id: &str) -> Result<User>;

    /// Update a user's account standing
    ///
    /// Adapter for the generic suspension intents: the caller decides
    /// between suspended and banned, this maps it onto the account.
    async fn user_set_status(&self, user_id: &str, status: v0::UserAccountStatus) -> Result<()>;
}
