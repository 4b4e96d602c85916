use atheneum_result::Result;
use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// # Server Configuration
#[derive(Serialize, JsonSchema, Debug)]
pub struct AtheneumConfig {
    /// Atheneum API version
    pub version: String,
    /// URL pointing to the client serving this node
    pub app: String,
    /// Whether this node is invite only
    pub invite_only: bool,
}

/// # Query Node
///
/// Fetch the server configuration for this Atheneum instance.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Result<Json<AtheneumConfig>> {
    let config = atheneum_config::config().await;

    Ok(Json(AtheneumConfig {
        version: crate::VERSION.to_string(),
        app: config.hosts.app,
        invite_only: config.api.registration.invite_only,
    }))
}
