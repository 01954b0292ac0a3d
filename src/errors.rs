use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::schemas::GenericResponse;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum GenericError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DatabaseError(String, anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
    #[error("{0}")]
    UnexpectedCustomError(String),
}

impl std::fmt::Debug for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for GenericError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenericError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GenericError::NotFound(_) => StatusCode::NOT_FOUND,
            GenericError::DatabaseError(_, _) => StatusCode::INTERNAL_SERVER_ERROR,
            GenericError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GenericError::UnexpectedCustomError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let status_code_str = status_code.as_str();
        let inner_error_msg = match self {
            GenericError::ValidationError(message) => message.to_string(),
            GenericError::NotFound(message) => message.to_string(),
            GenericError::DatabaseError(message, _err) => message.to_string(),
            GenericError::UnexpectedError(_) => "Internal Server Error".to_string(),
            GenericError::UnexpectedCustomError(message) => message.to_string(),
        };

        HttpResponse::build(status_code).json(GenericResponse::<()>::error(
            &inner_error_msg,
            status_code_str,
            None,
        ))
    }
}
