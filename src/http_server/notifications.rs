//! Handlers for notification-related endpoints in the HTTP server.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use super::{ApiState, error::ApiError};
use crate::models::SmsNotificationRequest;

/// Sends an SMS notification, currently only to the admin.
///
/// Every handled outcome (scheduled, simulated, suppressed) reports
/// success with a message describing what happened.
pub async fn send_sms_notification(
    State(state): State<ApiState>,
    Json(request): Json<SmsNotificationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.message.is_empty() {
        return Err(ApiError::UnprocessableEntity("message must not be empty".to_string()));
    }

    let response = state.notifier.dispatch(request).await;
    Ok((StatusCode::OK, Json(response)))
}

/// Retrieves the notification audit log.
pub async fn get_notification_logs(
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, ApiError> {
    let logs = state.notifier.logs().await?;
    Ok((StatusCode::OK, Json(json!({ "logs": logs }))))
}
