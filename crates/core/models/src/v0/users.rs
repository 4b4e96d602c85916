auto_derived!(
    /// Role of a platform account
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum UserRole {
        Member,
        Moderator,
        Admin,
    }

    /// Account standing of a platform user
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum UserAccountStatus {
        Active,
        Suspended,
        Banned,
    }

    /// Platform account
    pub struct User {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Display name
        pub username: String,
        /// Role used to gate moderation routes
        pub role: UserRole,
        /// Account standing
        pub status: UserAccountStatus,
    }
);

impl User {
    /// Whether this user may view and resolve the moderation queue
    pub fn is_privileged(&self) -> bool {
        matches!(self.role, UserRole::Moderator | UserRole::Admin)
    }
}
