use rocket::{Build, Rocket};
use rocket_okapi::{okapi::openapi3::OpenApi, settings::OpenApiSettings};

mod root;
mod safety;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/safety" => safety::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    let mut extensions = schemars::Map::new();
    extensions.insert(
        "x-tagGroups".to_owned(),
        json!([
          {
            "name": "Atheneum",
            "tags": [
              "Core"
            ]
          },
          {
            "name": "Platform Administration",
            "tags": [
              "User Safety"
            ]
          }
        ]),
    );

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Atheneum API".to_owned(),
            description: Some(
                "Open source cultural heritage platform, moderation and user safety API."
                    .to_owned(),
            ),
            version: crate::VERSION.to_owned(),
            ..Default::default()
        },
        extensions,
        ..Default::default()
    }
}
