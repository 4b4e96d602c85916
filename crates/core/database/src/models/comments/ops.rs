use atheneum_result::Result;

use crate::Comment;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractComments: Sync + Send {
    /// Insert a new comment into the database
    async fn insert_comment(&self, comment: &Comment) -> Result<()>;

    /// Fetch a comment by its id
    async fn fetch_comment(&self, comment_id: &str) -> Result<Comment>;

    /// Soft delete a comment
    ///
    /// Adapter for the generic removal intent onto the comment
    /// status vocabulary.
    async fn comment_set_removed(&self, comment_id: &str) -> Result<()>;
}
