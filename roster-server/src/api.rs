//! HTTP handlers and error mapping for the roster API.
//!
//! Success bodies are `{"message": ...}`; error bodies are
//! `{"code": ..., "detail": ...}` with a stable `code` per failure class.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use roster_core::{Catalog, RosterError};
use serde::{Deserialize, Serialize};

use crate::app::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

/// Status code plus JSON error body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                code: code.to_string(),
                detail: detail.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        let detail = err.to_string();
        match err {
            RosterError::ActivityNotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "not_found", detail)
            }
            RosterError::AlreadyEnrolled { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "already_enrolled", detail)
            }
            RosterError::NotEnrolled { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "not_enrolled", detail)
            }
            RosterError::CapacityExceeded { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "capacity_exceeded", detail)
            }
            other => {
                tracing::error!(error = %other, "unexpected roster error in request path");
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal error",
                )
            }
        }
    }
}

fn validation_error(rejection: QueryRejection) -> ApiError {
    ApiError::new(
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
        rejection.body_text(),
    )
}

/// `GET /`: send browsers to the bundled front-end.
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// `GET /activities`
pub async fn list_activities(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.manager.list_all())
}

/// `POST /activities/:activity_name/signup?email=`
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query.map_err(validation_error)?;
    match state.manager.enroll(&activity_name, &email) {
        Ok(message) => {
            tracing::info!(activity = %activity_name, %email, "signup accepted");
            Ok(Json(MessageResponse { message }))
        }
        Err(err) => {
            tracing::warn!(activity = %activity_name, %email, error = %err, "signup rejected");
            Err(err.into())
        }
    }
}

/// `DELETE /activities/:activity_name/unregister?email=`
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query.map_err(validation_error)?;
    match state.manager.unenroll(&activity_name, &email) {
        Ok(message) => {
            tracing::info!(activity = %activity_name, %email, "unregister accepted");
            Ok(Json(MessageResponse { message }))
        }
        Err(err) => {
            tracing::warn!(activity = %activity_name, %email, error = %err, "unregister rejected");
            Err(err.into())
        }
    }
}
