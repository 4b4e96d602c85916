use atheneum_result::Result;

use crate::Artwork;
use crate::MongoDb;

use super::AbstractArtworks;

static COL: &str = "artworks";

#[async_trait]
impl AbstractArtworks for MongoDb {
    /// Insert a new artwork into the database
    async fn insert_artwork(&self, artwork: &Artwork) -> Result<()> {
        query!(self, insert_one, COL, artwork).map(|_| ())
    }

    /// Fetch an artwork by its id
    async fn fetch_artwork(&self, artwork_id: &str) -> Result<Artwork> {
        query!(self, find_one_by_id, COL, artwork_id)?.ok_or_else(|| create_error!(NotFound))
    }
}
