use crate::schemas::GenericResponse;
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    ValidationStringError(String),
    #[error("{0}")]
    DuplicateUsername(String),
    #[error("{0}")]
    UsernameNotFound(String),
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    DatabaseError(String, anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationStringError(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateUsername(_) => StatusCode::BAD_REQUEST,
            AuthError::UsernameNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AuthError::DatabaseError(_, _) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let status_code_str = status_code.as_str();
        let inner_error_msg = match self {
            AuthError::ValidationStringError(message)
            | AuthError::DuplicateUsername(message)
            | AuthError::UsernameNotFound(message)
            | AuthError::InvalidCredentials(message) => message.to_string(),
            AuthError::DatabaseError(message, _err) => message.to_string(),
            AuthError::UnexpectedError(_) => "Internal Server Error".to_string(),
        };

        HttpResponse::build(status_code).json(GenericResponse::<()>::error(
            &inner_error_msg,
            status_code_str,
            None,
        ))
    }
}
