use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::Responses;
use rocket_okapi::response::OpenApiResponderInner;
use rocket_okapi::util::add_schema_response;

use crate::Error;

impl OpenApiResponderInner for Error {
    fn responses(gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        let mut responses = Responses::default();
        let schema = gen.json_schema::<Error>();

        // Statuses the responder can produce
        for status in [400, 401, 403, 404, 409, 500] {
            add_schema_response(&mut responses, status, "application/json", schema.clone())?;
        }

        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use rocket_okapi::{gen::OpenApiGenerator, settings::OpenApiSettings};

    use super::OpenApiResponderInner;
    use crate::Error;

    #[test]
    fn error_schema_registers_for_every_status() {
        let settings = OpenApiSettings::default();
        let mut gen = OpenApiGenerator::new(&settings);

        let responses = Error::responses(&mut gen).unwrap();
        for status in ["400", "401", "403", "404", "409", "500"] {
            assert!(responses.responses.contains_key(status));
        }
    }
}
