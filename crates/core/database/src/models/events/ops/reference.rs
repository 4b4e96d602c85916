use atheneum_result::Result;

use crate::CulturalEvent;
use crate::ReferenceDb;

use super::AbstractEvents;

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &CulturalEvent) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert", "events"))
        } else {
            events.insert(event.id.to_string(), event.clone());
            Ok(())
        }
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, event_id: &str) -> Result<CulturalEvent> {
        let events = self.events.lock().await;
        events
            .get(event_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }
}
