use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use super::domain::{ApplicationId, ApplicationSubmission};
use super::repository::ApplicationLog;
use super::service::{ApplicationIntakeService, IntakeError};
use crate::notifications::NotificationSink;

pub const SUBMISSION_ACCEPTED: &str = "Başvuru başarıyla gönderildi";

/// Acknowledgment returned to applicants.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: ApplicationId,
}

/// Router builder exposing intake and the admin log listing.
pub fn application_router<L, S>(service: Arc<ApplicationIntakeService<L, S>>) -> Router
where
    L: ApplicationLog + 'static,
    S: NotificationSink + 'static,
{
    Router::new()
        .route("/api/submit", post(submit_handler::<L, S>))
        .route("/api/applications", get(list_handler::<L, S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<L, S>(
    State(service): State<Arc<ApplicationIntakeService<L, S>>>,
    payload: Result<Json<ApplicationSubmission>, JsonRejection>,
) -> Response
where
    L: ApplicationLog + 'static,
    S: NotificationSink + 'static,
{
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match service.submit(submission) {
        Ok(receipt) => {
            let body = SubmitResponse {
                success: true,
                message: SUBMISSION_ACCEPTED,
                id: receipt.record.id,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(IntakeError::Validation(error)) => {
            failure(StatusCode::BAD_REQUEST, error.to_string())
        }
        Err(other) => {
            error!(error = %other, "application intake failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

pub(crate) async fn list_handler<L, S>(
    State(service): State<Arc<ApplicationIntakeService<L, S>>>,
) -> Response
where
    L: ApplicationLog + 'static,
    S: NotificationSink + 'static,
{
    match service.list() {
        Ok(records) => Json(records).into_response(),
        Err(other) => {
            error!(error = %other, "application log unavailable");
            failure(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

fn failure(status: StatusCode, message: String) -> Response {
    let payload = json!({
        "success": false,
        "message": message,
    });
    (status, Json(payload)).into_response()
}
