use iso8601_timestamp::Timestamp;

use atheneum_models::v0;
use atheneum_result::Result;

use crate::ReferenceDb;
use crate::{Report, ReportQuery, ReportResolution};

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    ///
    /// The duplicate check runs under the collection lock, so two
    /// concurrent inserts for the same triple serialize here.
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            return Err(create_database_error!("insert", "reports"));
        }

        let duplicate = reports.values().any(|existing| {
            existing.is_pending()
                && existing.entity_type == report.entity_type
                && existing.entity_id == report.entity_id
                && existing.author_id == report.author_id
        });

        if duplicate {
            Err(create_error!(DuplicateReport))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, report_id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(report_id)
            .cloned()
            .ok_or_else(|| create_error!(ReportNotFound))
    }

    /// Fetch a page of reports matching the given query
    async fn query_reports(&self, query: &ReportQuery) -> Result<(Vec<Report>, i64)> {
        let reports = self.reports.lock().await;

        let mut rows = reports
            .values()
            .filter(|report| {
                if let Some(status) = &query.status {
                    report.status.as_string() == *status
                } else {
                    true
                }
            })
            .filter(|report| {
                if let Some(priority) = query.priority {
                    report.priority == priority
                } else {
                    true
                }
            })
            .cloned()
            .collect::<Vec<Report>>();

        rows.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });

        let total = rows.len() as i64;
        let rows = rows
            .into_iter()
            .skip(((query.page - 1) * query.page_size) as usize)
            .take(query.page_size as usize)
            .collect();

        Ok((rows, total))
    }

    /// Record a resolution against a report
    async fn update_report_resolution(
        &self,
        report_id: &str,
        resolution: &ReportResolution,
    ) -> Result<Report> {
        let mut reports = self.reports.lock().await;
        if let Some(report) = reports.get_mut(report_id) {
            if !report.is_pending() {
                return Err(create_error!(AlreadyResolved));
            }

            report.status = v0::ReportStatus::Resolved {
                resolver_id: resolution.resolver_id.to_string(),
                action_taken: resolution.action.clone(),
                resolution_notes: resolution.notes.clone(),
                resolved_at: Timestamp::now_utc(),
            };

            Ok(report.clone())
        } else {
            Err(create_error!(ReportNotFound))
        }
    }
}
