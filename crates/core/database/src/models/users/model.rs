use atheneum_models::v0;

auto_derived!(
    /// Platform account
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Display name
        pub username: String,
        /// Role used to gate moderation routes
        pub role: v0::UserRole,
        /// Account standing
        pub status: v0::UserAccountStatus,
    }
);

impl User {
    pub fn new(username: &str, role: v0::UserRole) -> User {
        User {
            id: ulid::Ulid::new().to_string(),
            username: username.to_string(),
            role,
            status: v0::UserAccountStatus::Active,
        }
    }

    /// Whether this user may view and resolve the moderation queue
    pub fn is_privileged(&self) -> bool {
        matches!(self.role, v0::UserRole::Moderator | v0::UserRole::Admin)
    }

    /// Account standing in the vocabulary shown to moderators
    pub fn status_label(&self) -> &'static str {
        match self.status {
            v0::UserAccountStatus::Active => "active",
            v0::UserAccountStatus::Suspended => "suspended",
            v0::UserAccountStatus::Banned => "banned",
        }
    }
}

impl From<User> for v0::User {
    fn from(value: User) -> Self {
        v0::User {
            id: value.id,
            username: value.username,
            role: value.role,
            status: value.status,
        }
    }
}
