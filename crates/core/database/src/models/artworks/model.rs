auto_derived!(
    /// Publication state of an artwork
    #[serde(rename_all = "snake_case")]
    pub enum ArtworkStatus {
        Draft,
        Published,
        Hidden,
    }

    /// Artwork catalogued on the platform
    pub struct Artwork {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Title of the artwork
        pub title: String,
        /// Id of the user who catalogued it
        pub artist_id: String,
        /// Publication state
        pub status: ArtworkStatus,
    }
);

impl Artwork {
    pub fn new(title: &str, artist_id: &str) -> Artwork {
        Artwork {
            id: ulid::Ulid::new().to_string(),
            title: title.to_string(),
            artist_id: artist_id.to_string(),
            status: ArtworkStatus::Published,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            ArtworkStatus::Draft => "draft",
            ArtworkStatus::Published => "published",
            ArtworkStatus::Hidden => "hidden",
        }
    }
}
