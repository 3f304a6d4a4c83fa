//! HTTP error mapping
//!
//! Domain failures become a status and a `{success: false, message}` body.
//! Unknown identities and wrong passwords share one response.

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use tracing::error;
use uma_domain::error::{AuthFailure, Error};

/// Failure body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Domain error on its way to the client
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Response status for the wrapped error
    pub fn status(&self) -> Status {
        match &self.0 {
            Error::Auth(failure) if failure.is_invalid_credentials() => Status::Unauthorized,
            Error::Auth(_) => Status::Forbidden,
            Error::Token(_) => Status::Unauthorized,
            Error::InvalidArgument { .. } => Status::BadRequest,
            Error::NotFound { .. } => Status::NotFound,
            Error::AlreadyExists { .. } => Status::Conflict,
            _ => Status::InternalServerError,
        }
    }

    /// Client-facing message; internal details stay in the logs
    pub fn public_message(&self) -> String {
        match &self.0 {
            Error::Auth(failure) if failure.is_invalid_credentials() => {
                "Invalid credentials".to_string()
            }
            Error::Auth(AuthFailure::AccountLocked) => "Account is locked".to_string(),
            Error::Auth(_) => "No role assigned to this account".to_string(),
            Error::Token(_) => "Invalid or expired token".to_string(),
            Error::InvalidArgument { message } => message.clone(),
            Error::NotFound { .. } => "Account not found".to_string(),
            Error::AlreadyExists { .. } => "Account already exists".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!(error = %self.0, path = %request.uri().path(), "Request failed");
        }
        (status, Json(ErrorBody::new(self.public_message()))).respond_to(request)
    }
}
