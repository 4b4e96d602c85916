use atheneum_database::{Database, Report, ReportQuery, ReportResolution, User};
use atheneum_models::v0;
use atheneum_result::{create_error, Result};

use crate::{ActionExecutor, EntityResolver};

/// Orchestrates creation, queue retrieval and resolution of reports.
///
/// Every operation takes the acting user explicitly; nothing is read
/// from ambient state. All state lives in the backing store, so the
/// engine itself is cheap to clone into request handlers.
#[derive(Clone)]
pub struct ModerationEngine {
    db: Database,
}

/// Filters and pagination accepted by the queue operation
#[derive(Debug, Clone, Default)]
pub struct QueueOptions {
    /// Status filter, defaults to pending
    pub status: Option<v0::ReportStatusString>,
    /// Only include reports with this exact priority
    pub priority: Option<u8>,
    /// Page to fetch, starting at 1
    pub page: Option<i64>,
    /// Number of reports per page
    pub page_size: Option<i64>,
}

impl ModerationEngine {
    pub fn new(db: Database) -> ModerationEngine {
        ModerationEngine { db }
    }

    /// File a new report against a piece of content
    ///
    /// The referenced entity must exist at creation time and the
    /// author may not already have a pending report against it.
    pub async fn create_report(
        &self,
        author: &User,
        data: v0::DataCreateReport,
    ) -> Result<v0::ReportOut> {
        let config = atheneum_config::config().await;
        let limits = config.features.reports;

        // Wire strings are parsed against the closed enums before
        // anything else happens
        let entity_type: v0::ReportEntityType = data.entity_type.parse()?;
        let reason: v0::ReportReason = data.reason.parse()?;

        if reason == v0::ReportReason::Other && data.description.trim().is_empty() {
            return Err(create_error!(FailedValidation {
                error: "A description is required when the reason is `other`.".to_string()
            }));
        }

        let priority = data
            .priority
            .unwrap_or(limits.baseline_priority)
            .min(limits.max_priority);

        let resolver = EntityResolver::new(&self.db);
        let entity = resolver
            .fetch(&entity_type, &data.entity_id)
            .await?
            .ok_or_else(|| create_error!(EntityNotFound))?;

        // Users cannot report their own account or content
        if entity.owner_id() == author.id {
            return Err(create_error!(CannotReportYourself));
        }

        let report = Report::new(
            author.id.to_string(),
            entity_type,
            data.entity_id,
            reason,
            data.description,
            data.attachment_url,
            priority,
        );

        // The store enforces the single-pending-report invariant
        self.db.insert_report(&report).await?;

        info!("User {} filed report {}.", author.id, report.id);

        Ok(v0::ReportOut {
            report: report.into(),
            entity: Some(entity.summary()),
            author_name: Some(author.username.to_string()),
        })
    }

    /// Fetch a page of the moderation queue
    ///
    /// Ordered by priority descending, then oldest first within a
    /// band. Enrichment failures degrade to empty summaries rather
    /// than failing the page.
    pub async fn queue(&self, moderator: &User, options: QueueOptions) -> Result<v0::ReportQueue> {
        if !moderator.is_privileged() {
            return Err(create_error!(NotPrivileged));
        }

        let config = atheneum_config::config().await;
        let limits = config.features.reports;

        let page = options.page.unwrap_or(1).max(1);
        let page_size = options
            .page_size
            .unwrap_or(20)
            .clamp(1, limits.max_page_size as i64);

        let query = ReportQuery {
            status: options.status.or(Some(v0::ReportStatusString::Pending)),
            priority: options.priority,
            page,
            page_size,
        };

        let (rows, total) = self.db.query_reports(&query).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(self.enrich(row).await);
        }

        Ok(v0::ReportQueue {
            items,
            total,
            page,
            page_size,
        })
    }

    /// Fetch a single report with display context
    pub async fn fetch_report(&self, moderator: &User, report_id: &str) -> Result<v0::ReportOut> {
        if !moderator.is_privileged() {
            return Err(create_error!(NotPrivileged));
        }

        let report = self.db.fetch_report(report_id).await?;
        Ok(self.enrich(report).await)
    }

    /// Resolve a report, applying the chosen action to the content
    ///
    /// If applying a side-effecting action fails, no status transition
    /// is committed and the report stays pending.
    pub async fn resolve(
        &self,
        moderator: &User,
        report_id: &str,
        data: v0::DataResolveReport,
    ) -> Result<v0::Report> {
        if !moderator.is_privileged() {
            return Err(create_error!(NotPrivileged));
        }

        let action: v0::ModerationAction = data.action.parse()?;

        let report = self.db.fetch_report(report_id).await?;
        if !report.is_pending() {
            return Err(create_error!(AlreadyResolved));
        }

        let executor = ActionExecutor::new(&self.db);
        if let Err(error) = executor
            .apply(&report.entity_type, &report.entity_id, &action)
            .await
        {
            if action.is_audit_only() {
                // Audit-only actions have no side effect to fail;
                // record the report as resolved regardless
                warn!(
                    "Ignoring failed audit-only action on report {}: {:?}",
                    report_id, error
                );
            } else {
                error!(
                    "Failed to apply action to report {}: {:?}",
                    report_id, error
                );
                return Err(create_error!(ActionExecutionFailed {
                    action: format!("{:?}", action)
                }));
            }
        }

        let resolution = ReportResolution {
            resolver_id: moderator.id.to_string(),
            action,
            notes: data.notes,
        };

        // Conditional write; a concurrent resolver loses here
        let report = self
            .db
            .update_report_resolution(report_id, &resolution)
            .await?;

        info!(
            "Moderator {} resolved report {} with {:?}.",
            moderator.id, report_id, resolution.action
        );

        Ok(report.into())
    }

    async fn enrich(&self, report: Report) -> v0::ReportOut {
        let resolver = EntityResolver::new(&self.db);

        let entity = resolver
            .summarize(&report.entity_type, &report.entity_id)
            .await
            .unwrap_or(None);

        let author_name = self
            .db
            .fetch_user(&report.author_id)
            .await
            .ok()
            .map(|user| user.username);

        v0::ReportOut {
            report: report.into(),
            entity,
            author_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use atheneum_database::{
        Artwork, Comment, CommentStatus, Database, DatabaseInfo, User,
    };
    use atheneum_models::v0;
    use atheneum_result::ErrorType;
    use futures::future::join_all;

    use crate::{ModerationEngine, QueueOptions};

    async fn db() -> Database {
        DatabaseInfo::Reference.connect().await.unwrap()
    }

    async fn seed_users(db: &Database) -> (User, User) {
        let member = User::new("margot", v0::UserRole::Member);
        let moderator = User::new("anton", v0::UserRole::Moderator);
        db.insert_user(&member).await.unwrap();
        db.insert_user(&moderator).await.unwrap();
        (member, moderator)
    }

    async fn seed_comment(db: &Database, author: &str) -> Comment {
        let comment = Comment::new(author, "artwork_subject", "this artefact is mislabelled");
        db.insert_comment(&comment).await.unwrap();
        comment
    }

    fn report_on(entity_type: &str, entity_id: &str) -> v0::DataCreateReport {
        v0::DataCreateReport {
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            reason: "spam".to_string(),
            description: String::new(),
            attachment_url: None,
            priority: None,
        }
    }

    fn resolve_with(action: &str) -> v0::DataResolveReport {
        v0::DataResolveReport {
            action: action.to_string(),
            notes: None,
        }
    }

    #[async_std::test]
    async fn create_report_enriches_and_queues() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let created = engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap();

        assert_eq!(created.author_name.as_deref(), Some("margot"));
        let entity = created.entity.unwrap();
        assert_eq!(entity.status, "visible");

        let queue = engine
            .queue(&moderator, QueueOptions::default())
            .await
            .unwrap();
        assert_eq!(queue.total, 1);
        assert_eq!(queue.items[0].report.id, created.report.id);
        assert_eq!(queue.items[0].author_name.as_deref(), Some("margot"));

        let fetched = engine
            .fetch_report(&moderator, &created.report.id)
            .await
            .unwrap();
        assert_eq!(fetched.report.id, created.report.id);
    }

    #[async_std::test]
    async fn unknown_wire_values_are_rejected() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let error = engine
            .create_report(&member, report_on("thread", &comment.id))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::InvalidEntityType));

        let mut data = report_on("comment", &comment.id);
        data.reason = "boring".to_string();
        let error = engine.create_report(&member, data).await.unwrap_err();
        assert!(matches!(error.error_type, ErrorType::InvalidReason));

        let created = engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap();
        let error = engine
            .resolve(&moderator, &created.report.id, resolve_with("shadow_ban"))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::InvalidAction));

        // The report is untouched by the rejected action
        let stored = engine
            .fetch_report(&moderator, &created.report.id)
            .await
            .unwrap();
        assert!(matches!(
            stored.report.status,
            v0::ReportStatus::Pending {}
        ));
    }

    #[async_std::test]
    async fn duplicate_pending_report_is_rejected() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, _) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap();

        let error = engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::DuplicateReport));
    }

    #[async_std::test]
    async fn concurrent_duplicate_reports_admit_exactly_one() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let attempts =
            (0..5).map(|_| engine.create_report(&member, report_on("comment", &comment.id)));

        let outcomes = join_all(attempts).await;
        let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
        assert_eq!(successes, 1);

        for outcome in outcomes {
            if let Err(error) = outcome {
                assert!(matches!(error.error_type, ErrorType::DuplicateReport));
            }
        }

        let queue = engine
            .queue(&moderator, QueueOptions::default())
            .await
            .unwrap();
        assert_eq!(queue.total, 1);
    }

    #[async_std::test]
    async fn unknown_entity_is_rejected_without_persisting() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;

        let error = engine
            .create_report(&member, report_on("comment", "999999"))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::EntityNotFound));

        let queue = engine
            .queue(&moderator, QueueOptions::default())
            .await
            .unwrap();
        assert_eq!(queue.total, 0);
    }

    #[async_std::test]
    async fn reporting_your_own_content_is_rejected() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, _) = seed_users(&db).await;
        let own_comment = seed_comment(&db, &member.id).await;

        let error = engine
            .create_report(&member, report_on("comment", &own_comment.id))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::CannotReportYourself));

        let error = engine
            .create_report(&member, report_on("user", &member.id))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::CannotReportYourself));
    }

    #[async_std::test]
    async fn reason_other_requires_a_description() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, _) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let mut data = report_on("comment", &comment.id);
        data.reason = "other".to_string();

        let error = engine.create_report(&member, data).await.unwrap_err();
        assert!(matches!(error.error_type, ErrorType::FailedValidation { .. }));
    }

    #[async_std::test]
    async fn priority_is_clamped_to_the_configured_range() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, _) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let mut data = report_on("comment", &comment.id);
        data.priority = Some(99);

        let created = engine.create_report(&member, data).await.unwrap();
        assert_eq!(created.report.priority, 10);
    }

    #[async_std::test]
    async fn queue_and_resolution_require_privilege() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, _) = seed_users(&db).await;

        let error = engine
            .queue(&member, QueueOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::NotPrivileged));

        let error = engine
            .resolve(&member, "some_report", resolve_with("none"))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::NotPrivileged));
    }

    #[async_std::test]
    async fn queue_orders_by_priority_then_creation() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;

        let mut ids = Vec::new();
        for (index, priority) in [1_u8, 3, 1].iter().enumerate() {
            let comment = Comment::new("someone_else", "subject", &format!("comment {index}"));
            db.insert_comment(&comment).await.unwrap();

            let mut data = report_on("comment", &comment.id);
            data.priority = Some(*priority);
            ids.push(engine.create_report(&member, data).await.unwrap().report.id);

            // Keep creation timestamps strictly increasing
            async_std::task::sleep(std::time::Duration::from_millis(5)).await;
        }

        let queue = engine
            .queue(&moderator, QueueOptions::default())
            .await
            .unwrap();

        let order = queue
            .items
            .iter()
            .map(|item| item.report.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, vec![ids[1].as_str(), ids[0].as_str(), ids[2].as_str()]);
    }

    #[async_std::test]
    async fn content_removal_soft_deletes_the_comment() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let created = engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap();

        let resolved = engine
            .resolve(
                &moderator,
                &created.report.id,
                resolve_with("content_removal"),
            )
            .await
            .unwrap();

        match resolved.status {
            v0::ReportStatus::Resolved {
                resolver_id,
                action_taken,
                ..
            } => {
                assert_eq!(resolver_id, moderator.id);
                assert_eq!(action_taken, v0::ModerationAction::ContentRemoval);
            }
            v0::ReportStatus::Pending {} => unreachable!(),
        }

        let stored = db.fetch_comment(&comment.id).await.unwrap();
        assert_eq!(stored.status, CommentStatus::Removed);
    }

    #[async_std::test]
    async fn content_removal_on_an_artwork_is_a_noop() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;

        let artwork = Artwork::new("Tapestry of Bayeux", "someone_else");
        db.insert_artwork(&artwork).await.unwrap();

        let created = engine
            .create_report(&member, report_on("artwork", &artwork.id))
            .await
            .unwrap();

        engine
            .resolve(
                &moderator,
                &created.report.id,
                resolve_with("content_removal"),
            )
            .await
            .unwrap();

        let stored = db.fetch_artwork(&artwork.id).await.unwrap();
        assert_eq!(stored.status, artwork.status);
    }

    #[async_std::test]
    async fn suspensions_update_the_account_standing() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;

        let first_offender = User::new("first_offender", v0::UserRole::Member);
        let repeat_offender = User::new("repeat_offender", v0::UserRole::Member);
        db.insert_user(&first_offender).await.unwrap();
        db.insert_user(&repeat_offender).await.unwrap();

        let report = engine
            .create_report(&member, report_on("user", &first_offender.id))
            .await
            .unwrap();
        engine
            .resolve(
                &moderator,
                &report.report.id,
                resolve_with("temporary_suspension"),
            )
            .await
            .unwrap();
        let stored = db.fetch_user(&first_offender.id).await.unwrap();
        assert_eq!(stored.status, v0::UserAccountStatus::Suspended);

        let report = engine
            .create_report(&member, report_on("user", &repeat_offender.id))
            .await
            .unwrap();
        engine
            .resolve(
                &moderator,
                &report.report.id,
                resolve_with("permanent_suspension"),
            )
            .await
            .unwrap();
        let stored = db.fetch_user(&repeat_offender.id).await.unwrap();
        assert_eq!(stored.status, v0::UserAccountStatus::Banned);
    }

    #[async_std::test]
    async fn second_resolution_is_rejected_and_audit_fields_kept() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let other_moderator = User::new("beatrice", v0::UserRole::Admin);
        db.insert_user(&other_moderator).await.unwrap();

        let created = engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap();

        engine
            .resolve(&moderator, &created.report.id, resolve_with("warning"))
            .await
            .unwrap();

        let error = engine
            .resolve(
                &other_moderator,
                &created.report.id,
                resolve_with("content_removal"),
            )
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::AlreadyResolved));

        let stored = engine
            .fetch_report(&moderator, &created.report.id)
            .await
            .unwrap();
        match stored.report.status {
            v0::ReportStatus::Resolved {
                resolver_id,
                action_taken,
                ..
            } => {
                assert_eq!(resolver_id, moderator.id);
                assert_eq!(action_taken, v0::ModerationAction::Warning);
            }
            v0::ReportStatus::Pending {} => unreachable!(),
        }

        // The losing action was never applied
        let stored = db.fetch_comment(&comment.id).await.unwrap();
        assert_eq!(stored.status, CommentStatus::Visible);
    }

    #[async_std::test]
    async fn resolving_an_unknown_report_fails() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (_, moderator) = seed_users(&db).await;

        let error = engine
            .resolve(&moderator, "missing", resolve_with("none"))
            .await
            .unwrap_err();
        assert!(matches!(error.error_type, ErrorType::ReportNotFound));
    }

    #[async_std::test]
    async fn deleted_entity_degrades_enrichment_and_still_resolves() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let created = engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap();

        // Hard delete the content behind the store's back
        if let Database::Reference(reference) = &db {
            reference.comments.lock().await.clear();
        }

        let queue = engine
            .queue(&moderator, QueueOptions::default())
            .await
            .unwrap();
        assert_eq!(queue.total, 1);
        assert!(queue.items[0].entity.is_none());

        // Removal of already-gone content is tolerated
        let resolved = engine
            .resolve(
                &moderator,
                &created.report.id,
                resolve_with("content_removal"),
            )
            .await
            .unwrap();
        assert!(matches!(
            resolved.status,
            v0::ReportStatus::Resolved { .. }
        ));
    }

    #[async_std::test]
    async fn resolved_reports_leave_the_default_queue() {
        let db = db().await;
        let engine = ModerationEngine::new(db.clone());
        let (member, moderator) = seed_users(&db).await;
        let comment = seed_comment(&db, "someone_else").await;

        let created = engine
            .create_report(&member, report_on("comment", &comment.id))
            .await
            .unwrap();

        engine
            .resolve(&moderator, &created.report.id, resolve_with("none"))
            .await
            .unwrap();

        let pending = engine
            .queue(&moderator, QueueOptions::default())
            .await
            .unwrap();
        assert_eq!(pending.total, 0);

        let resolved = engine
            .queue(
                &moderator,
                QueueOptions {
                    status: Some(v0::ReportStatusString::Resolved),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(resolved.total, 1);
    }
}
