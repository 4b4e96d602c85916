use atheneum_models::v0;
use atheneum_result::Result;

use crate::ReferenceDb;
use crate::User;

use super::AbstractUsers;

#[async_trait]
impl AbstractUsers for ReferenceDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id) {
            Err(create_database_error!("insert", "users"))
        } else {
            users.insert(user.id.to_string(), user.clone());
            Ok(())
        }
    }

    /// Fetch a user by their id
    async fn fetch_user(&self, user_id: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .get(user_id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownUser))
    }

    /// Update a user's account standing
    async fn user_set_status(&self, user_id: &str, status: v0::UserAccountStatus) -> Result<()> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(user_id) {
            user.status = status;
            Ok(())
        } else {
            Err(create_error!(UnknownUser))
        }
    }
}
