use atheneum_database::Database;
use atheneum_models::v0;
use atheneum_result::{Error, ErrorType, Result};

/// Applies the coded side effect of a resolution action to the
/// referenced content.
pub struct ActionExecutor<'a> {
    db: &'a Database,
}

impl<'a> ActionExecutor<'a> {
    pub fn new(db: &'a Database) -> ActionExecutor<'a> {
        ActionExecutor { db }
    }

    /// Apply an action to a piece of content
    ///
    /// Total over the declared domain: only comments have a coded
    /// removal effect and only users have coded suspension effects.
    /// Every other combination is a safe no-op, since moderators may
    /// legitimately pick any action for any entity type.
    pub async fn apply(
        &self,
        entity_type: &v0::ReportEntityType,
        entity_id: &str,
        action: &v0::ModerationAction,
    ) -> Result<()> {
        let effect = match (entity_type, action) {
            (v0::ReportEntityType::Comment, v0::ModerationAction::ContentRemoval) => {
                self.db.comment_set_removed(entity_id).await
            }
            (v0::ReportEntityType::User, v0::ModerationAction::TemporarySuspension) => {
                self.db
                    .user_set_status(entity_id, v0::UserAccountStatus::Suspended)
                    .await
            }
            (v0::ReportEntityType::User, v0::ModerationAction::PermanentSuspension) => {
                self.db
                    .user_set_status(entity_id, v0::UserAccountStatus::Banned)
                    .await
            }
            _ => Ok(()),
        };

        match effect {
            Ok(()) => Ok(()),
            // Content deleted since the report was filed; the intent
            // of a removal or suspension is already satisfied
            Err(error) if gone(&error) => {
                info!(
                    "Skipping {:?} on deleted {:?} {}.",
                    action, entity_type, entity_id
                );
                Ok(())
            }
            Err(error) => Err(error),
        }
    }
}

fn gone(error: &Error) -> bool {
    matches!(
        error.error_type,
        ErrorType::NotFound | ErrorType::UnknownUser
    )
}
