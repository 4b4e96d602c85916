use std::str::FromStr;

use atheneum_database::User;
use atheneum_models::v0;
use atheneum_moderation::{ModerationEngine, QueueOptions};
use atheneum_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

/// # Query Parameters
#[derive(Deserialize, JsonSchema, FromForm)]
pub struct OptionsFetchReports {
    /// Report status to include, defaults to pending
    status: Option<String>,

    /// Only include reports with this exact priority
    priority: Option<u8>,

    /// Page to fetch, starting at 1
    page: Option<i64>,

    /// Number of reports per page
    page_size: Option<i64>,
}

/// # Fetch Reports
///
/// Fetch a page of the moderation queue.
#[openapi(tag = "User Safety")]
#[get("/reports?<options..>")]
pub async fn fetch_reports(
    engine: &State<ModerationEngine>,
    user: User,
    options: OptionsFetchReports,
) -> Result<Json<v0::ReportQueue>> {
    let status = options
        .status
        .as_deref()
        .map(v0::ReportStatusString::from_str)
        .transpose()?;

    engine
        .queue(
            &user,
            QueueOptions {
                status,
                priority: options.priority,
                page: options.page,
                page_size: options.page_size,
            },
        )
        .await
        .map(Json)
}
