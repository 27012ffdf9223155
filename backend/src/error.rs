use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::Envelope;
use serde::Serialize;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    #[serde(flatten)]
    envelope: Envelope,
    status: u16,
}

/// Every failure leaves the server as `{ success: false, status, error }`;
/// the page only reads `success` and `error`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidFormData(String),

    #[error("resource not found")]
    NotFoundError,

    #[error(transparent)]
    DbError(#[from] crate::db::error::DbError),

    #[error(transparent)]
    SyncError(#[from] crate::sync::error::SyncError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFormData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFoundError => StatusCode::NOT_FOUND,
            ApiError::SyncError(crate::sync::error::SyncError::InvalidTransfer(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DbError(_) | ApiError::SyncError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(status).json(ErrorBody {
            envelope: Envelope::failure(self.to_string()),
            status: status.as_u16(),
        })
    }
}
