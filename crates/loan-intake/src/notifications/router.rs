use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::info;

use super::settings::{NotificationSettings, NotificationSettingsStore};

/// Admin endpoints to read and replace chat credentials.
pub fn settings_router(store: Arc<NotificationSettingsStore>) -> Router {
    Router::new()
        .route(
            "/api/telegram-settings",
            get(get_settings_handler).post(update_settings_handler),
        )
        .with_state(store)
}

pub(crate) async fn get_settings_handler(
    State(store): State<Arc<NotificationSettingsStore>>,
) -> Json<NotificationSettings> {
    Json(store.get().masked())
}

pub(crate) async fn update_settings_handler(
    State(store): State<Arc<NotificationSettingsStore>>,
    payload: Result<Json<NotificationSettings>, JsonRejection>,
) -> Response {
    let Json(NotificationSettings { bot_token, chat_id }) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let body = json!({ "success": false, "error": rejection.body_text() });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };
    info!(chat_id = %chat_id, "chat credentials replaced");
    store.set(bot_token, chat_id);
    Json(json!({
        "success": true,
        "message": "notification settings updated",
        "settings": store.get().masked(),
    }))
    .into_response()
}
