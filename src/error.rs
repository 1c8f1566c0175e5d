use crate::actix_web::http::StatusCode;
use crate::actix_web::{HttpResponse, ResponseError};
use crate::response::Reply;
use crate::sqlx::Error as SqlxError;
use crate::thiserror::Error as ThisError;
use std::{io, num};

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("missing required field: {0}")]
    MissingContextField(&'static str),

    #[error("invalid answer format for question {question_id}: answer must have either answer_text, selected_option_id, or selected_option_ids")]
    InvalidAnswerShape { question_id: i32 },

    #[error("failed to write responses: {0}")]
    WriteFailure(#[source] SqlxError),

    #[error("failed to acquire database connection: {0}")]
    ConnectionFailure(#[source] SqlxError),

    #[error("database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invalid column name: {0}")]
    InvalidColumn(String),

    #[error("environment variable {0} not been set")]
    MissingConfig(&'static str),

    #[error("dotenv error: {0}")]
    DotEnvError(#[source] dotenv::Error),

    #[error("parse int error: {0}")]
    ParseIntError(#[from] num::ParseIntError),

    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    fn public_message(&self) -> String {
        match self {
            Error::MissingContextField(_) => "Missing required fields".into(),
            Error::InvalidCredentials => "Invalid credentials".into(),
            Error::BadRequest(msg) => msg.clone(),
            _ => "Internal server error".into(),
        }
    }

    // only client-caused failures echo their cause back
    fn detail(&self) -> Option<String> {
        match self {
            Error::MissingContextField(_) | Error::InvalidAnswerShape { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingContextField(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(Reply::<()>::failure(self.public_message(), self.detail()))
    }
}
