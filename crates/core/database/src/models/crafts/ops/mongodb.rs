use atheneum_result::Result;

use crate::Craft;
use crate::MongoDb;

use super::AbstractCrafts;

static COL: &str = "crafts";

#[async_trait]
impl AbstractCrafts for MongoDb {
    /// Insert a new craft into the database
    async fn insert_craft(&self, craft: &Craft) -> Result<()> {
        query!(self, insert_one, COL, craft).map(|_| ())
    }

    /// Fetch a craft by its id
    async fn fetch_craft(&self, craft_id: &str) -> Result<Craft> {
        query!(self, find_one_by_id, COL, craft_id)?.ok_or_else(|| create_error!(NotFound))
    }
}
