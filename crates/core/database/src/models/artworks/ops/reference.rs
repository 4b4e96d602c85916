use atheneum_result::Result;

use crate::Artwork;
use crate::ReferenceDb;

use super::AbstractArtworks;

#[async_trait]
impl AbstractArtworks for ReferenceDb {
    /// Insert a new artwork into the database
    async fn insert_artwork(&self, artwork: &Artwork) -> Result<()> {
        let mut artworks = self.artworks.lock().await;
        if artworks.contains_key(&artwork.id) {
            Err(create_database_error!("insert", "artworks"))
        } else {
            artworks.insert(artwork.id.to_string(), artwork.clone());
            Ok(())
        }
    }

    /// Fetch an artwork by its id
    async fn fetch_artwork(&self, artwork_id: &str) -> Result<Artwork> {
        let artworks = self.artworks.lock().await;
        artworks
            .get(artwork_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }
}
