use std::fmt::{Debug, Display};

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use cookbook::CookbookError;
use thiserror::Error;

/// An error on its way out of a handler, carrying the status it should be rendered with.
///
/// The response body is the plain-text message of the outermost error.
#[derive(Error)]
pub struct ServerError(pub(crate) color_eyre::Report, pub(crate) StatusCode);

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Status Code: {}\n", self.1))?;
        f.write_str("ServerError: \n")?;

        Debug::fmt(&self.0, f)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        if self.1.is_server_error() {
            tracing::error!(error = ?self, "ServerError");
        } else {
            tracing::warn!(status = self.1.as_u16(), error = %self.0, "Rejected request");
        }

        (self.1, self.0.to_string()).into_response()
    }
}

impl From<color_eyre::Report> for ServerError {
    fn from(err: color_eyre::Report) -> Self {
        ServerError(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<CookbookError> for ServerError {
    fn from(err: CookbookError) -> Self {
        ServerError(err.into(), StatusCode::BAD_REQUEST)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(err: JsonRejection) -> Self {
        ServerError(err.into(), StatusCode::BAD_REQUEST)
    }
}

impl From<QueryRejection> for ServerError {
    fn from(err: QueryRejection) -> Self {
        ServerError(err.into(), StatusCode::BAD_REQUEST)
    }
}

pub(crate) trait WithStatus<T> {
    fn with_status(self, status: StatusCode) -> Result<T, ServerError>;
}

impl<T, E> WithStatus<T> for Result<T, E>
where
    E: Into<color_eyre::Report>,
{
    fn with_status(self, status: StatusCode) -> Result<T, ServerError> {
        self.map_err(|e| ServerError(e.into(), status))
    }
}
