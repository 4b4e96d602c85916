use atheneum_result::Result;

use crate::Comment;
use crate::CommentStatus;
use crate::ReferenceDb;

use super::AbstractComments;

#[async_trait]
impl AbstractComments for ReferenceDb {
    /// Insert a new comment into the database
    async fn insert_comment(&self, comment: &Comment) -> Result<()> {
        let mut comments = self.comments.lock().await;
        if comments.contains_key(&comment.id) {
            Err(create_database_error!("insert", "comments"))
        } else {
            comments.insert(comment.id.to_string(), comment.clone());
            Ok(())
        }
    }

    /// Fetch a comment by its id
    async fn fetch_comment(&self, comment_id: &str) -> Result<Comment> {
        let comments = self.comments.lock().await;
        comments
            .get(comment_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Soft delete a comment
    async fn comment_set_removed(&self, comment_id: &str) -> Result<()> {
        let mut comments = self.comments.lock().await;
        if let Some(comment) = comments.get_mut(comment_id) {
            comment.status = CommentStatus::Removed;
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
