auto_derived!(
    /// Visibility of a comment
    #[serde(rename_all = "snake_case")]
    pub enum CommentStatus {
        Visible,
        /// Soft deleted by moderation
        Removed,
    }

    /// Comment left on a platform artefact
    pub struct Comment {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who wrote this comment
        pub author_id: String,
        /// Id of the content this comment was left on
        pub subject_id: String,
        /// Comment text
        pub content: String,
        /// Visibility of this comment
        pub status: CommentStatus,
    }
);

impl Comment {
    pub fn new(author_id: &str, subject_id: &str, content: &str) -> Comment {
        Comment {
            id: ulid::Ulid::new().to_string(),
            author_id: author_id.to_string(),
            subject_id: subject_id.to_string(),
            content: content.to_string(),
            status: CommentStatus::Visible,
        }
    }

    /// Short excerpt used as the display title in the moderation queue
    pub fn excerpt(&self) -> String {
        let mut title: String = self.content.chars().take(64).collect();
        if self.content.chars().count() > 64 {
            title.push('…');
        }
        title
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            CommentStatus::Visible => "visible",
            CommentStatus::Removed => "removed",
        }
    }
}
