use atheneum_result::Result;

use crate::Craft;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractCrafts: Sync + Send {
    /// Insert a new craft into the database
    async fn insert_craft(&self, craft: &Craft) -> Result<()>;

    /// Fetch a craft by its id
    async fn fetch_craft(&self, craft_id: &str) -> Result<Craft>;
}
