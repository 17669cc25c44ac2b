use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::sql_gateway::GatewayError;
use crate::domain::users::user::ValidationError;

pub const MSG_FIELDS_REQUIRED: &str = "Name and email are required";
pub const MSG_USER_NOT_FOUND: &str = "User not found";
pub const MSG_INTERNAL: &str = "Internal server error";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Handler failures. Store errors are logged here and never sent to the client.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    NotFound,
    Store {
        operation: &'static str,
        source: GatewayError,
    },
}

impl ApiError {
    pub fn store(operation: &'static str) -> impl FnOnce(GatewayError) -> Self {
        move |source| Self::Store { operation, source }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => {
                tracing::debug!(reason = %e, "user_payload_rejected");
                (StatusCode::BAD_REQUEST, MSG_FIELDS_REQUIRED)
            }
            Self::NotFound => (StatusCode::NOT_FOUND, MSG_USER_NOT_FOUND),
            Self::Store { operation, source } => {
                tracing::error!(operation = *operation, error = ?source, "user_store_call_failed");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }
        };
        let body = ErrorBody {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
