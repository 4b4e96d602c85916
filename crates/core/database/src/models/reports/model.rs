use atheneum_models::v0;
use iso8601_timestamp::Timestamp;

auto_derived!(
    /// User-filed report against a piece of platform content
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Type of the referenced content
        pub entity_type: v0::ReportEntityType,
        /// Id of the referenced content
        pub entity_id: String,
        /// Id of the user who filed this report
        pub author_id: String,
        /// Reason for the report
        pub reason: v0::ReportReason,
        /// Free-text description supplied by the author
        #[serde(default)]
        pub description: String,
        /// URL of an uploaded screenshot
        #[serde(skip_serializing_if = "Option::is_none")]
        pub attachment_url: Option<String>,
        /// Queue ordering priority, higher is served first
        pub priority: u8,
        /// Status of the report
        #[serde(flatten)]
        pub status: v0::ReportStatus,
        /// When this report was filed
        pub created_at: Timestamp,
    }

    /// Filters and pagination for the moderation queue
    pub struct ReportQuery {
        /// Match reports in this status
        pub status: Option<v0::ReportStatusString>,
        /// Match reports with this exact priority
        pub priority: Option<u8>,
        /// Page to fetch, starting at 1
        pub page: i64,
        /// Number of reports per page
        pub page_size: i64,
    }

    /// Data recorded when a moderator closes a report
    pub struct ReportResolution {
        /// Id of the resolving moderator
        pub resolver_id: String,
        /// Action that was taken
        pub action: v0::ModerationAction,
        /// Notes to record alongside the resolution
        pub notes: Option<String>,
    }
);

#[allow(clippy::too_many_arguments)]
impl Report {
    pub fn new(
        author_id: String,
        entity_type: v0::ReportEntityType,
        entity_id: String,
        reason: v0::ReportReason,
        description: String,
        attachment_url: Option<String>,
        priority: u8,
    ) -> Report {
        Report {
            id: ulid::Ulid::new().to_string(),
            entity_type,
            entity_id,
            author_id,
            reason,
            description,
            attachment_url,
            priority,
            status: v0::ReportStatus::Pending {},
            created_at: Timestamp::now_utc(),
        }
    }

    /// Whether this report is still waiting in the queue
    pub fn is_pending(&self) -> bool {
        matches!(self.status, v0::ReportStatus::Pending {})
    }
}

impl From<Report> for v0::Report {
    fn from(value: Report) -> Self {
        v0::Report {
            id: value.id,
            entity_type: value.entity_type,
            entity_id: value.entity_id,
            author_id: value.author_id,
            reason: value.reason,
            description: value.description,
            attachment_url: value.attachment_url,
            priority: value.priority,
            status: value.status,
            created_at: value.created_at,
        }
    }
}
