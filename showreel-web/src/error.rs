//! Web layer errors

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use showreel_core::ShowreelError;

/// Errors raised while serving or exporting the site.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Failed to start web server on {address}: {source}")]
    ServerStartFailed {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server stopped unexpectedly: {0}")]
    ServerFailed(#[source] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fragment not found: {name}")]
    FragmentNotFound { name: String },

    #[error(transparent)]
    Core(#[from] ShowreelError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match self {
            WebError::FragmentNotFound { .. } => StatusCode::NOT_FOUND,
            WebError::ServerStartFailed { .. }
            | WebError::ServerFailed(_)
            | WebError::ExportFailed { .. }
            | WebError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Html(format!("<!-- {} -->", status.as_u16()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fragment_is_not_found() {
        let response = WebError::FragmentNotFound {
            name: "player/unknown.html".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_export_failure_is_server_error() {
        let response = WebError::ExportFailed {
            path: PathBuf::from("dist/index.html"),
            source: std::io::Error::other("disk full"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
