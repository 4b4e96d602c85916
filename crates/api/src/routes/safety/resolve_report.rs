use atheneum_database::User;
use atheneum_models::v0;
use atheneum_moderation::ModerationEngine;
use atheneum_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Resolve Report
///
/// Close a pending report, applying the chosen action to the
/// reported content.
#[openapi(tag = "User Safety")]
#[put("/reports/<report>/resolve", data = "<data>")]
pub async fn resolve_report(
    engine: &State<ModerationEngine>,
    user: User,
    report: String,
    data: Json<v0::DataResolveReport>,
) -> Result<Json<v0::Report>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    engine.resolve(&user, &report, data).await.map(Json)
}
