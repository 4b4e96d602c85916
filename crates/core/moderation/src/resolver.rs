use atheneum_database::{Artwork, Comment, Craft, CulturalEvent, Database, User};
use atheneum_models::v0;
use atheneum_result::{Error, ErrorType, Result};

/// Resolves a polymorphic (entity type, entity id) reference against
/// the content stores.
///
/// Lookups never retain their own copies of content; they return a
/// transient snapshot which the caller projects into a summary.
pub struct EntityResolver<'a> {
    db: &'a Database,
}

/// Transient snapshot of a piece of reportable content
pub enum ResolvedEntity {
    Comment(Comment),
    Artwork(Artwork),
    Event(CulturalEvent),
    User(User),
    Craft(Craft),
}

impl ResolvedEntity {
    /// Project this entity into the summary shown to moderators
    pub fn summary(&self) -> v0::ReportedEntitySummary {
        match self {
            ResolvedEntity::Comment(comment) => v0::ReportedEntitySummary {
                title: comment.excerpt(),
                status: comment.status_label().to_string(),
            },
            ResolvedEntity::Artwork(artwork) => v0::ReportedEntitySummary {
                title: artwork.title.to_string(),
                status: artwork.status_label().to_string(),
            },
            ResolvedEntity::Event(event) => v0::ReportedEntitySummary {
                title: event.title.to_string(),
                status: event.status_label().to_string(),
            },
            ResolvedEntity::User(user) => v0::ReportedEntitySummary {
                title: user.username.to_string(),
                status: user.status_label().to_string(),
            },
            ResolvedEntity::Craft(craft) => v0::ReportedEntitySummary {
                title: craft.name.to_string(),
                status: craft.status_label().to_string(),
            },
        }
    }

    /// Id of the user who owns this content
    pub fn owner_id(&self) -> &str {
        match self {
            ResolvedEntity::Comment(comment) => &comment.author_id,
            ResolvedEntity::Artwork(artwork) => &artwork.artist_id,
            ResolvedEntity::Event(event) => &event.organizer_id,
            ResolvedEntity::User(user) => &user.id,
            ResolvedEntity::Craft(craft) => &craft.artisan_id,
        }
    }
}

fn absent(error: &Error) -> bool {
    matches!(
        error.error_type,
        ErrorType::NotFound | ErrorType::UnknownUser
    )
}

impl<'a> EntityResolver<'a> {
    pub fn new(db: &'a Database) -> EntityResolver<'a> {
        EntityResolver { db }
    }

    /// Fetch the referenced content, returning None when it does
    /// not exist
    pub async fn fetch(
        &self,
        entity_type: &v0::ReportEntityType,
        entity_id: &str,
    ) -> Result<Option<ResolvedEntity>> {
        let entity = match entity_type {
            v0::ReportEntityType::Comment => self
                .db
                .fetch_comment(entity_id)
                .await
                .map(ResolvedEntity::Comment),
            v0::ReportEntityType::Artwork => self
                .db
                .fetch_artwork(entity_id)
                .await
                .map(ResolvedEntity::Artwork),
            v0::ReportEntityType::Event => self
                .db
                .fetch_event(entity_id)
                .await
                .map(ResolvedEntity::Event),
            v0::ReportEntityType::User => self
                .db
                .fetch_user(entity_id)
                .await
                .map(ResolvedEntity::User),
            v0::ReportEntityType::Craft => self
                .db
                .fetch_craft(entity_id)
                .await
                .map(ResolvedEntity::Craft),
        };

        match entity {
            Ok(entity) => Ok(Some(entity)),
            Err(error) if absent(&error) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Summary projection for queue display
    ///
    /// Returns None rather than an error when the content has since
    /// been deleted, so queue enrichment can degrade gracefully.
    pub async fn summarize(
        &self,
        entity_type: &v0::ReportEntityType,
        entity_id: &str,
    ) -> Result<Option<v0::ReportedEntitySummary>> {
        Ok(self
            .fetch(entity_type, entity_id)
            .await?
            .map(|entity| entity.summary()))
    }
}
