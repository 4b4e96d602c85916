use atheneum_database::User;
use atheneum_models::v0;
use atheneum_moderation::ModerationEngine;
use atheneum_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Report Content
///
/// Report a piece of content to the moderation team.
#[openapi(tag = "User Safety")]
#[post("/report", data = "<data>")]
pub async fn report_content(
    engine: &State<ModerationEngine>,
    user: User,
    data: Json<v0::DataCreateReport>,
) -> Result<Json<v0::ReportOut>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    engine.create_report(&user, data).await.map(Json)
}
