use crate::infra::{AppState, Components};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use loan_intake::notifications::settings_router;
use loan_intake::workflows::applications::application_router;
use loan_intake::workflows::banks::bank_router;
use loan_intake::workflows::offers::offer_router;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

pub(crate) fn with_intake_routes(components: Components) -> Router {
    let Components {
        catalog,
        calculator,
        settings,
        intake,
    } = components;

    Router::new()
        .route("/", get(liveness))
        .route("/healthz", get(healthcheck))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(bank_router(catalog.clone()))
        .merge(offer_router(calculator, catalog))
        .merge(application_router(intake))
        .merge(settings_router(settings))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

pub(crate) async fn liveness() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "message": "loan intake API is running" }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
