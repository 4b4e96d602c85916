use atheneum_database::User;
use atheneum_models::v0;
use atheneum_moderation::ModerationEngine;
use atheneum_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Report
///
/// Fetch a single report by its id.
#[openapi(tag = "User Safety")]
#[get("/report/<id>")]
pub async fn fetch_report(
    engine: &State<ModerationEngine>,
    user: User,
    id: String,
) -> Result<Json<v0::ReportOut>> {
    engine.fetch_report(&user, &id).await.map(Json)
}
