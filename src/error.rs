use crate::repository;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    ///
    /// Ticket was modified concurrently and still exists,
    /// so the state the client based its update on is unknown.
    ///
    #[error("ticket was modified concurrently")]
    UpdateConflict,

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::UpdateConflict => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidBody(rejection) => match rejection {
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                    StatusCode::BAD_REQUEST
                }
                rejection => rejection.status(),
            },
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
