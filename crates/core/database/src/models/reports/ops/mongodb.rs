use bson::{to_bson, Document};
use iso8601_timestamp::Timestamp;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};

use atheneum_models::v0;
use atheneum_result::Result;

use crate::MongoDb;
use crate::{Report, ReportQuery, ReportResolution};

use super::AbstractReports;

static COL: &str = "reports";

fn status_tag(status: &v0::ReportStatusString) -> &'static str {
    match status {
        v0::ReportStatusString::Pending => "Pending",
        v0::ReportStatusString::Resolved => "Resolved",
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == 11000
    )
}

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    ///
    /// Relies on the partial unique index over pending reports to
    /// reject duplicates atomically.
    async fn insert_report(&self, report: &Report) -> Result<()> {
        match self.insert_one(COL, report).await {
            Ok(_) => Ok(()),
            Err(error) if is_duplicate_key(&error) => Err(create_error!(DuplicateReport)),
            Err(_) => Err(create_database_error!("insert_one", COL)),
        }
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, report_id: &str) -> Result<Report> {
        query!(self, find_one_by_id, COL, report_id)?
            .ok_or_else(|| create_error!(ReportNotFound))
    }

    /// Fetch a page of reports matching the given query
    async fn query_reports(&self, query: &ReportQuery) -> Result<(Vec<Report>, i64)> {
        let mut filter = Document::new();

        if let Some(status) = &query.status {
            filter.insert("status", status_tag(status));
        }

        if let Some(priority) = query.priority {
            filter.insert("priority", priority as i32);
        }

        let total = query!(self, count_documents, COL, filter.clone())? as i64;

        let rows = query!(
            self,
            find_with_options,
            COL,
            filter,
            FindOptions::builder()
                .sort(doc! {
                    "priority": -1_i32,
                    "created_at": 1_i32,
                })
                .skip(((query.page - 1) * query.page_size) as u64)
                .limit(query.page_size)
                .build()
        )?;

        Ok((rows, total))
    }

    /// Record a resolution against a report
    async fn update_report_resolution(
        &self,
        report_id: &str,
        resolution: &ReportResolution,
    ) -> Result<Report> {
        let mut set = doc! {
            "status": "Resolved",
            "resolver_id": &resolution.resolver_id,
            "action_taken": to_bson(&resolution.action)
                .map_err(|_| create_database_error!("to_bson", COL))?,
            "resolved_at": to_bson(&Timestamp::now_utc())
                .map_err(|_| create_database_error!("to_bson", COL))?,
        };

        if let Some(notes) = &resolution.notes {
            set.insert("resolution_notes", notes);
        }

        let updated = self
            .col::<Report>(COL)
            .find_one_and_update(
                doc! {
                    "_id": report_id,
                    "status": "Pending",
                },
                doc! {
                    "$set": set
                },
            )
            .with_options(
                FindOneAndUpdateOptions::builder()
                    .return_document(ReturnDocument::After)
                    .build(),
            )
            .await
            .map_err(|_| create_database_error!("find_one_and_update", COL))?;

        match updated {
            Some(report) => Ok(report),
            // Distinguish a lost race from a missing report
            None => match self.fetch_report(report_id).await {
                Ok(_) => Err(create_error!(AlreadyResolved)),
                Err(error) => Err(error),
            },
        }
    }
}
