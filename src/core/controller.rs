use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog_service,
        }
    }
}

// ErrorBody is returned for every failed request
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

pub(crate) type ServerError = (StatusCode, Json<ErrorBody>);

pub(crate) fn bad_request(message: &str) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { message: message.to_string(), error: None }))
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { message: "Invalid book data".to_string(), error: Some(format!("{}", err)) }))
}

// command_to_server_error maps command failures to status codes, server side
// failures are reported with a generic message for the operation.
pub(crate) fn command_to_server_error(err: CommandError, operation: &str) -> ServerError {
    match err {
        CommandError::Validation { message } => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody { message, error: None }))
        }
        CommandError::DuplicateKey { message } => {
            (StatusCode::CONFLICT, Json(ErrorBody { message, error: None }))
        }
        CommandError::NotFound { message } => {
            (StatusCode::NOT_FOUND, Json(ErrorBody { message, error: None }))
        }
        CommandError::Document { .. } | CommandError::Storage { .. } => {
            error!("{}: {:?}", operation, err);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody {
                message: operation.to_string(),
                error: Some(err.message().to_string()),
            }))
        }
    }
}
