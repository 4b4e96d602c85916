use rocket_okapi::okapi::openapi3::{SecurityScheme, SecuritySchemeData};
use rocket_okapi::{
    gen::OpenApiGenerator,
    request::{OpenApiFromRequest, RequestHeaderInput},
};

use crate::User;

impl OpenApiFromRequest<'_> for User {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        let mut requirements = schemars::Map::new();
        requirements.insert("User Id".to_owned(), vec![]);

        Ok(RequestHeaderInput::Security(
            "User Id".to_owned(),
            SecurityScheme {
                data: SecuritySchemeData::ApiKey {
                    name: "x-user-id".to_owned(),
                    location: "header".to_owned(),
                },
                description: Some(
                    "Identity of the acting user, supplied by the authentication gateway."
                        .to_owned(),
                ),
                extensions: schemars::Map::new(),
            },
            requirements,
        ))
    }
}
