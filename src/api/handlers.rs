//! API handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{AppState, INDEX_PATH};
use crate::types::RosterSnapshot;
use crate::Error;

/// Redirect to the landing page
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// Health check with roster status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        activities: state.roster.len().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub activities: usize,
}

/// List every activity with its participants
pub async fn list_activities(State(state): State<AppState>) -> Json<RosterSnapshot> {
    Json(state.roster.list_activities().await)
}

/// Sign a student up for an activity
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    let message = state
        .roster
        .signup(&activity_name, &email)
        .await
        .map_err(|e| {
            tracing::debug!(activity = %activity_name, email = %email, error = %e, "Signup rejected");
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse { message }))
}

/// Remove a participant from an activity
pub async fn withdraw(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    let message = state
        .roster
        .withdraw(&activity_name, &email)
        .await
        .map_err(|e| {
            tracing::debug!(activity = %activity_name, email = %email, error = %e, "Withdrawal rejected");
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse { message }))
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response carrying a status and a `{"detail": ...}` body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::ActivityNotFound | Error::ParticipantNotFound => StatusCode::NOT_FOUND,
            Error::AlreadySignedUp | Error::ActivityFull => StatusCode::CONFLICT,
            e if e.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": self.detail,
        }));
        (self.status, body).into_response()
    }
}
