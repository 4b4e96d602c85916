auto_derived!(
    /// Publication state of a craft entry
    #[serde(rename_all = "snake_case")]
    pub enum CraftStatus {
        Published,
        Archived,
    }

    /// Traditional craft documented on the platform
    pub struct Craft {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Name of the craft
        pub name: String,
        /// Id of the user who documented it
        pub artisan_id: String,
        /// Publication state
        pub status: CraftStatus,
    }
);

impl Craft {
    pub fn new(name: &str, artisan_id: &str) -> Craft {
        Craft {
            id: ulid::Ulid::new().to_string(),
            name: name.to_string(),
            artisan_id: artisan_id.to_string(),
            status: CraftStatus::Published,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            CraftStatus::Published => "published",
            CraftStatus::Archived => "archived",
        }
    }
}
