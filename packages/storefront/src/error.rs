//! Error types for the storefront.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;

/// Storefront error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error.
    Config(String),
    /// CMS query failure.
    Cms(String),
    /// No collection exists for the requested slug.
    NotFound,
    /// Drop-gateway RPC communication error.
    Rpc(String),
    /// The claim transaction was rejected.
    Claim(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Cms(msg) => write!(f, "cms error: {msg}"),
            Error::NotFound => write!(f, "collection not found"),
            Error::Rpc(msg) => write!(f, "rpc error: {msg}"),
            Error::Claim(msg) => write!(f, "claim error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Cms(_) => StatusCode::BAD_GATEWAY,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Rpc(_) => StatusCode::BAD_GATEWAY,
            Error::Claim(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string()
        });
        (status, Json(body)).into_response()
    }
}
