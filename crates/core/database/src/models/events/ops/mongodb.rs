use atheneum_result::Result;

use crate::CulturalEvent;
use crate::MongoDb;

use super::AbstractEvents;

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &CulturalEvent) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, event_id: &str) -> Result<CulturalEvent> {
        query!(self, find_one_by_id, COL, event_id)?.ok_or_else(|| create_error!(NotFound))
    }
}
