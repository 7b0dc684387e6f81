use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ApiResponse;

#[derive(Debug)]
pub enum AppError {
    MissingField,
    DuplicateUser,
    InvalidCredentials,
    MalformedBody(String),
    Store(String),
}

impl AppError {
    /// Message sent to the client. Store details stay in the server log.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::MissingField => "All fields required",
            AppError::DuplicateUser => "User already exists",
            AppError::InvalidCredentials => "Invalid credentials",
            AppError::MalformedBody(_) => "Invalid JSON body",
            AppError::Store(_) => "Server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField => write!(f, "Missing field: all fields required"),
            AppError::DuplicateUser => write!(f, "Duplicate user"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::MalformedBody(msg) => write!(f, "Malformed body: {}", msg),
            AppError::Store(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.client_message()))
    }
}
