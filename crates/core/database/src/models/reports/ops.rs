use atheneum_result::Result;

use crate::{Report, ReportQuery, ReportResolution};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    ///
    /// Fails with `DuplicateReport` if a pending report already exists
    /// for the same (entity_type, entity_id, author_id); the check and
    /// the insert are a single atomic operation.
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report by its id
    async fn fetch_report(&self, report_id: &str) -> Result<Report>;

    /// Fetch a page of reports matching the given query
    ///
    /// Rows are ordered by priority descending, then creation time
    /// ascending. Also returns the total number of matching reports.
    async fn query_reports(&self, query: &ReportQuery) -> Result<(Vec<Report>, i64)>;

    /// Record a resolution against a report
    ///
    /// Conditional update: fails with `AlreadyResolved` unless the
    /// stored status is still pending at the time of the write.
    async fn update_report_resolution(
        &self,
        report_id: &str,
        resolution: &ReportResolution,
    ) -> Result<Report>;
}
