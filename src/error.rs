//! Unified error type.

use http::StatusCode;
use thiserror::Error;
use tracing::{error, warn};

use crate::adapter::BindError;
use crate::remap::RemapError;
use crate::response::{IntoResponse, Response};

/// The error type returned by remapi's fallible operations.
///
/// Request-path failures carry the HTTP status they surface as; returning one
/// from a handler is enough to produce the right response. `Io` covers the
/// infrastructure side: binding to a port or accepting a connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unsupported media type: expected application/json")]
    UnsupportedMediaType,

    #[error(transparent)]
    Remap(#[from] RemapError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("handler: {0}")]
    Handler(String),

    #[error("serialize response: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Io(_)
            | Self::Remap(_)
            | Self::Bind(_)
            | Self::Handler(_)
            | Self::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{self}");
        } else {
            warn!(status = status.as_u16(), "{self}");
        }
        Response::builder().status(status).text(self.to_string())
    }
}
