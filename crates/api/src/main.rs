#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate serde_json;

pub mod routes;

use std::str::FromStr;

use atheneum_database::DatabaseInfo;
use atheneum_moderation::ModerationEngine;
use log::info;
use rocket_cors::AllowedOrigins;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[launch]
async fn rocket() -> _ {
    let config = atheneum_config::config().await;
    let _sentry = atheneum_config::setup_logging(&config.api.sentry.dsn);

    info!("Starting Atheneum server [version {}].", VERSION);

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Put", "Post", "Delete", "Options", "Head", "Patch"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    let db = DatabaseInfo::Auto.connect()
        .await
        .expect("Failed to connect to the database.");
    let engine = ModerationEngine::new(db.clone());

    routes::mount(rocket::build())
        .manage(db)
        .manage(engine)
        .attach(cors)
}
