use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::LabelMe => Status::InternalServerError,

            ErrorType::InvalidEntityType => Status::BadRequest,
            ErrorType::InvalidReason => Status::BadRequest,
            ErrorType::InvalidAction => Status::BadRequest,
            ErrorType::CannotReportYourself => Status::BadRequest,
            ErrorType::FailedValidation { .. } => Status::BadRequest,

            ErrorType::EntityNotFound => Status::NotFound,
            ErrorType::ReportNotFound => Status::NotFound,
            ErrorType::DuplicateReport => Status::Conflict,
            ErrorType::AlreadyResolved => Status::Conflict,

            ErrorType::UnknownUser => Status::NotFound,
            ErrorType::NotAuthenticated => Status::Unauthorized,
            ErrorType::InvalidSession => Status::Unauthorized,

            ErrorType::NotPrivileged => Status::Forbidden,
            ErrorType::MissingPermission { .. } => Status::Forbidden,

            ErrorType::ActionExecutionFailed { .. } => Status::InternalServerError,
            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::InvalidOperation => Status::BadRequest,
            ErrorType::NotFound => Status::NotFound,
        };

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).unwrap();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
