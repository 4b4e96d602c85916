use atheneum_result::Result;

use crate::CulturalEvent;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &CulturalEvent) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, event_id: &str) -> Result<CulturalEvent>;
}
