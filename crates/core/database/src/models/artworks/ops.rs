use atheneum_result::Result;

use crate::Artwork;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractArtworks: Sync + Send {
    /// Insert a new artwork into the database
    async fn insert_artwork(&self, artwork: &Artwork) -> Result<()>;

    /// Fetch an artwork by its id
    async fn fetch_artwork(&self, artwork_id: &str) -> Result<Artwork>;
}
