use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use anyhow::Error as ANYHOW_ERROR;
use sqlx::error::Error as SQL_ERROR;
use std::{env::VarError, io::Error as IO_ERROR, num::ParseIntError};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    INT(#[from] ParseIntError),

    #[error("{0}")]
    SQL(#[from] SQL_ERROR),

    #[error("{0}")]
    VAR(#[from] VarError),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error("{0}")]
    AnyHowError(#[from] ANYHOW_ERROR),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    #[error("Loan not found: {0}")]
    LoanNotFound(i64),

    #[error("Loan is not active: {0}")]
    LoanNotActive(i64),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request - client sent invalid input or hit a closed loan
            Error::InvalidInput(_) | Error::LoanNotActive(_) => {
                StatusCode::BAD_REQUEST
            },

            // 404 Not Found - requested resource does not exist
            Error::CustomerNotFound(_) | Error::LoanNotFound(_) => {
                StatusCode::NOT_FOUND
            },

            // 500 Internal Server Error - everything else
            Error::Io(_)
            | Error::INT(_)
            | Error::SQL(_)
            | Error::VAR(_)
            | Error::TokioJoinError(_)
            | Error::SetGlobalDefaultError(_)
            | Error::AnyHowError(_)
            | Error::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Unknown"),
            "message": self.to_string(),
            "status": status.as_u16(),
        });
        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_error_kind() {
        assert_eq!(
            Error::InvalidInput(String::from("principal")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::LoanNotActive(1).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::LoanNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::CustomerNotFound(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::ConfigurationError(String::from("PORT")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
