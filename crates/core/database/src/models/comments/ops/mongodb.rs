use bson::Document;

use atheneum_result::Result;

use crate::Comment;
use crate::MongoDb;

use super::AbstractComments;

static COL: &str = "comments";

#[async_trait]
impl AbstractComments for MongoDb {
    /// Insert a new comment into the database
    async fn insert_comment(&self, comment: &Comment) -> Result<()> {
        query!(self, insert_one, COL, comment).map(|_| ())
    }

    /// Fetch a comment by its id
    async fn fetch_comment(&self, comment_id: &str) -> Result<Comment> {
        query!(self, find_one_by_id, COL, comment_id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Soft delete a comment
    async fn comment_set_removed(&self, comment_id: &str) -> Result<()> {
        let result = self
            .col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": comment_id
                },
                doc! {
                    "$set": {
                        "status": "removed"
                    }
                },
            )
            .await
            .map_err(|_| create_database_error!("update_one", COL))?;

        if result.matched_count == 0 {
            Err(create_error!(NotFound))
        } else {
            Ok(())
        }
    }
}
