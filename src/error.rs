//! # API Errors
//!
//! Every failure leaves the service as `{"message": "..."}` with the status
//! code of its variant.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::MessageResponse;

/// Result type for product handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input, rejected before any handler runs.
    #[error("{0}")]
    Validation(String),

    /// No row matched.
    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Mediator(#[from] crate::mediator::Error),
}

impl ApiError {
    pub fn product_not_found() -> Self {
        ApiError::NotFound("Product not found".to_owned())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Mediator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(status).json(MessageResponse::new(self.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::ApiError;
    use crate::mediator::{Error, ErrorKind};
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn status_code_test() {
        assert_eq!(
            ApiError::Validation("missing field `name`".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::product_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(Error::from(ErrorKind::NotFound)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_test() {
        assert_eq!(ApiError::product_not_found().to_string(), "Product not found");
    }
}
