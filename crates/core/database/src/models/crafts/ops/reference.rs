use atheneum_result::Result;

use crate::Craft;
use crate::ReferenceDb;

use super::AbstractCrafts;

#[async_trait]
impl AbstractCrafts for ReferenceDb {
    /// Insert a new craft into the database
    async fn insert_craft(&self, craft: &Craft) -> Result<()> {
        let mut crafts = self.crafts.lock().await;
        if crafts.contains_key(&craft.id) {
            Err(create_database_error!("insert", "crafts"))
        } else {
            crafts.insert(craft.id.to_string(), craft.clone());
            Ok(())
        }
    }

    /// Fetch a craft by its id
    async fn fetch_craft(&self, craft_id: &str) -> Result<Craft> {
        let crafts = self.crafts.lock().await;
        crafts
            .get(craft_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }
}
