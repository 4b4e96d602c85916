use std::str::FromStr;

use iso8601_timestamp::Timestamp;

use atheneum_result::{create_error, Error};

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Type of platform content a report can reference
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum ReportEntityType {
        Comment,
        Artwork,
        Event,
        User,
        Craft,
    }

    /// Reason given by the author when filing a report
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum ReportReason {
        /// Unsolicited advertisement or platform abuse
        Spam,

        /// Content inappropriate for a general audience
        InappropriateContent,

        /// Misinformation about a cultural artefact or event
        FalseContent,

        /// Copyright or attribution violation
        RightsViolation,

        /// Targeted harassment of another user
        Harassment,

        /// Incitement of hatred against a person or group
        HateIncitement,

        /// Illegal content catch-all reason
        IllegalContent,

        /// None of the above; requires a description
        Other,
    }

    /// Corrective action recorded when resolving a report
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum ModerationAction {
        /// Report dismissed without action
        None,

        /// Author of the content was warned; recorded for audit only
        Warning,

        /// Reported content was taken down
        ContentRemoval,

        /// Reported account was temporarily suspended
        TemporarySuspension,

        /// Reported account was permanently banned
        PermanentSuspension,

        /// Incident was referred to the relevant authority
        AuthorityReferral,
    }

    /// Status of a report
    #[cfg_attr(feature = "serde", serde(tag = "status"))]
    pub enum ReportStatus {
        /// Report is waiting in the moderation queue
        Pending {},

        /// Report was actioned and closed
        Resolved {
            /// Id of the moderator who closed this report
            resolver_id: String,
            /// Action that was taken
            action_taken: ModerationAction,
            /// Notes left by the resolving moderator
            #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
            resolution_notes: Option<String>,
            /// When this report was closed
            resolved_at: Timestamp,
        },
    }

    /// Just the status of a report
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum ReportStatusString {
        Pending,
        Resolved,
    }

    /// User-filed report against a piece of platform content
    pub struct Report {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Type of the referenced content
        pub entity_type: ReportEntityType,
        /// Id of the referenced content
        pub entity_id: String,
        /// Id of the user who filed this report
        pub author_id: String,
        /// Reason for the report
        pub reason: ReportReason,
        /// Free-text description supplied by the author
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "String::is_empty", default)
        )]
        pub description: String,
        /// URL of an uploaded screenshot, if any
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub attachment_url: Option<String>,
        /// Queue ordering priority, higher is served first
        pub priority: u8,
        /// Status of the report
        #[cfg_attr(feature = "serde", serde(flatten))]
        pub status: ReportStatus,
        /// When this report was filed
        pub created_at: Timestamp,
    }

    /// Read-only projection of reported content for queue display
    pub struct ReportedEntitySummary {
        /// Title or display name of the content
        pub title: String,
        /// Content status in its own vocabulary
        pub status: String,
    }

    /// Report enriched with display context for moderators
    pub struct ReportOut {
        /// The report itself
        #[cfg_attr(feature = "serde", serde(flatten))]
        pub report: Report,
        /// Summary of the reported content, if it still exists
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub entity: Option<ReportedEntitySummary>,
        /// Display name of the reporting user
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub author_name: Option<String>,
    }

    /// Paginated moderation queue
    pub struct ReportQueue {
        /// Reports ordered by priority, oldest first within a band
        pub items: Vec<ReportOut>,
        /// Total number of reports matching the filters
        pub total: i64,
        /// Requested page, starting at 1
        pub page: i64,
        /// Requested page size
        pub page_size: i64,
    }

    /// Report creation payload
    ///
    /// The entity type and reason arrive as wire strings and are
    /// parsed against the closed enums when the report is created,
    /// so an unknown value surfaces as `InvalidEntityType` or
    /// `InvalidReason` rather than a generic body rejection.
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateReport {
        /// Type of the content being reported
        pub entity_type: String,
        /// Id of the content being reported
        pub entity_id: String,
        /// Reason for the report
        pub reason: String,
        /// Additional description
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 2000)))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub description: String,
        /// URL of an uploaded screenshot
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 256)))]
        pub attachment_url: Option<String>,
        /// Requested priority, clamped to the configured range
        pub priority: Option<u8>,
    }

    /// Report resolution payload
    ///
    /// The action arrives as a wire string and is parsed against the
    /// closed enum at resolution time; an unknown value surfaces as
    /// `InvalidAction`.
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataResolveReport {
        /// Action to apply to the reported content
        pub action: String,
        /// Notes to record alongside the resolution
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 2000)))]
        pub notes: Option<String>,
    }
);

impl ModerationAction {
    /// Whether this action is recorded for audit only and never
    /// mutates the reported content
    pub fn is_audit_only(&self) -> bool {
        matches!(
            self,
            ModerationAction::None | ModerationAction::Warning | ModerationAction::AuthorityReferral
        )
    }
}

impl ReportStatus {
    pub fn as_string(&self) -> ReportStatusString {
        match self {
            ReportStatus::Pending {} => ReportStatusString::Pending,
            ReportStatus::Resolved { .. } => ReportStatusString::Resolved,
        }
    }
}

impl FromStr for ReportStatusString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReportStatusString::Pending),
            "resolved" => Ok(ReportStatusString::Resolved),
            _ => Err(create_error!(InvalidOperation)),
        }
    }
}

impl FromStr for ReportEntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comment" => Ok(ReportEntityType::Comment),
            "artwork" => Ok(ReportEntityType::Artwork),
            "event" => Ok(ReportEntityType::Event),
            "user" => Ok(ReportEntityType::User),
            "craft" => Ok(ReportEntityType::Craft),
            _ => Err(create_error!(InvalidEntityType)),
        }
    }
}

impl FromStr for ReportReason {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spam" => Ok(ReportReason::Spam),
            "inappropriate_content" => Ok(ReportReason::InappropriateContent),
            "false_content" => Ok(ReportReason::FalseContent),
            "rights_violation" => Ok(ReportReason::RightsViolation),
            "harassment" => Ok(ReportReason::Harassment),
            "hate_incitement" => Ok(ReportReason::HateIncitement),
            "illegal_content" => Ok(ReportReason::IllegalContent),
            "other" => Ok(ReportReason::Other),
            _ => Err(create_error!(InvalidReason)),
        }
    }
}

impl FromStr for ModerationAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ModerationAction::None),
            "warning" => Ok(ModerationAction::Warning),
            "content_removal" => Ok(ModerationAction::ContentRemoval),
            "temporary_suspension" => Ok(ModerationAction::TemporarySuspension),
            "permanent_suspension" => Ok(ModerationAction::PermanentSuspension),
            "authority_referral" => Ok(ModerationAction::AuthorityReferral),
            _ => Err(create_error!(InvalidAction)),
        }
    }
}

#[cfg(test)]
mod tests {
    use atheneum_result::ErrorType;

    use super::*;

    #[test]
    fn wire_strings_parse_against_the_closed_enums() {
        assert_eq!(
            "comment".parse::<ReportEntityType>().unwrap(),
            ReportEntityType::Comment
        );
        assert_eq!(
            "hate_incitement".parse::<ReportReason>().unwrap(),
            ReportReason::HateIncitement
        );
        assert_eq!(
            "content_removal".parse::<ModerationAction>().unwrap(),
            ModerationAction::ContentRemoval
        );
        assert_eq!(
            "pending".parse::<ReportStatusString>().unwrap(),
            ReportStatusString::Pending
        );
        assert_eq!(
            "resolved".parse::<ReportStatusString>().unwrap(),
            ReportStatusString::Resolved
        );
    }

    #[test]
    fn unknown_wire_strings_surface_their_own_error_kinds() {
        let error = "thread".parse::<ReportEntityType>().unwrap_err();
        assert!(matches!(error.error_type, ErrorType::InvalidEntityType));

        let error = "boring".parse::<ReportReason>().unwrap_err();
        assert!(matches!(error.error_type, ErrorType::InvalidReason));

        let error = "shadow_ban".parse::<ModerationAction>().unwrap_err();
        assert!(matches!(error.error_type, ErrorType::InvalidAction));

        let error = "open".parse::<ReportStatusString>().unwrap_err();
        assert!(matches!(error.error_type, ErrorType::InvalidOperation));
    }
}
