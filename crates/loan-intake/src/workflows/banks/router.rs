use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use super::catalog::{BankCatalog, CatalogError};
use super::domain::{BankDraft, BankId, BankPatch};

/// Admin and public endpoints for the partner bank list.
pub fn bank_router(catalog: Arc<BankCatalog>) -> Router {
    Router::new()
        .route("/api/banks", get(list_active_handler).post(create_handler))
        .route("/api/banks/all", get(list_all_handler))
        .route(
            "/api/banks/:bank_id",
            put(replace_handler)
                .patch(patch_handler)
                .delete(deactivate_handler),
        )
        .with_state(catalog)
}

pub(crate) async fn list_active_handler(State(catalog): State<Arc<BankCatalog>>) -> Response {
    Json(catalog.list_active()).into_response()
}

pub(crate) async fn list_all_handler(State(catalog): State<Arc<BankCatalog>>) -> Response {
    Json(catalog.list_all()).into_response()
}

pub(crate) async fn create_handler(
    State(catalog): State<Arc<BankCatalog>>,
    payload: Result<Json<BankDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let record = catalog.create(draft);
    (StatusCode::CREATED, Json(record)).into_response()
}

pub(crate) async fn replace_handler(
    State(catalog): State<Arc<BankCatalog>>,
    bank_id: Result<Path<BankId>, PathRejection>,
    payload: Result<Json<BankDraft>, JsonRejection>,
) -> Response {
    let (Path(bank_id), Json(draft)) = match (bank_id, payload) {
        (Ok(bank_id), Ok(payload)) => (bank_id, payload),
        (Err(rejection), _) => return bad_request(rejection.body_text()),
        (_, Err(rejection)) => return bad_request(rejection.body_text()),
    };
    match catalog.replace(bank_id, draft) {
        Ok(record) => Json(record).into_response(),
        Err(error) => not_found(error),
    }
}

pub(crate) async fn patch_handler(
    State(catalog): State<Arc<BankCatalog>>,
    bank_id: Result<Path<BankId>, PathRejection>,
    payload: Result<Json<BankPatch>, JsonRejection>,
) -> Response {
    let (Path(bank_id), Json(patch)) = match (bank_id, payload) {
        (Ok(bank_id), Ok(payload)) => (bank_id, payload),
        (Err(rejection), _) => return bad_request(rejection.body_text()),
        (_, Err(rejection)) => return bad_request(rejection.body_text()),
    };
    match catalog.patch(bank_id, patch) {
        Ok(record) => Json(record).into_response(),
        Err(error) => not_found(error),
    }
}

pub(crate) async fn deactivate_handler(
    State(catalog): State<Arc<BankCatalog>>,
    bank_id: Result<Path<BankId>, PathRejection>,
) -> Response {
    let Path(bank_id) = match bank_id {
        Ok(bank_id) => bank_id,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    match catalog.deactivate(bank_id) {
        Ok(()) => Json(json!({
            "success": true,
            "message": format!("bank {bank_id} deactivated"),
        }))
        .into_response(),
        Err(error) => not_found(error),
    }
}

fn not_found(error: CatalogError) -> Response {
    failure(StatusCode::NOT_FOUND, error.to_string())
}

fn bad_request(reason: String) -> Response {
    failure(StatusCode::BAD_REQUEST, reason)
}

fn failure(status: StatusCode, error: String) -> Response {
    let payload = json!({
        "success": false,
        "error": error,
    });
    (status, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::banks::seed::default_partners;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn seeded() -> (Arc<BankCatalog>, Router) {
        let catalog = Arc::new(BankCatalog::with_drafts(default_partners()));
        let router = bank_router(catalog.clone());
        (catalog, router)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn patch_color_leaves_other_fields() {
        let (catalog, router) = seeded();
        let before = catalog.get(1).expect("seeded");

        let response = router
            .oneshot(json_request(
                Method::PATCH,
                "/api/banks/1",
                json!({ "color": "gold" }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["color"], "gold");
        assert_eq!(body["name"], before.name.as_str());
        assert_eq!(body["logo"], before.logo.as_str());
        assert_eq!(body["campaign"], before.campaign.as_str());
        assert_eq!(body["is_active"], true);
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let (_, router) = seeded();
        let response = router
            .oneshot(json_request(
                Method::POST,
                "/api/banks",
                json!({
                    "name": "Yapı Kredi",
                    "logo": "https://cdn.example.com/ykb.svg",
                    "campaign": "World kart fırsatı",
                    "color": "blue",
                }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_json(response).await;
        assert_eq!(body["id"], default_partners().len() as u64 + 1);
        assert_eq!(body["is_active"], true);
    }

    #[tokio::test]
    async fn delete_hides_bank_from_public_listing() {
        let (catalog, router) = seeded();
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/banks/2")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let listing = router
            .oneshot(
                Request::builder()
                    .uri("/api/banks")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        let body = read_json(listing).await;
        let ids: Vec<u64> = body
            .as_array()
            .expect("array payload")
            .iter()
            .filter_map(|bank| bank["id"].as_u64())
            .collect();
        assert!(!ids.contains(&2));
        assert_eq!(catalog.list_all().len(), default_partners().len());
    }

    #[tokio::test]
    async fn replace_unknown_bank_is_not_found() {
        let (_, router) = seeded();
        let response = router
            .oneshot(json_request(
                Method::PUT,
                "/api/banks/404",
                json!({
                    "name": "Ghost",
                    "logo": "https://cdn.example.com/ghost.svg",
                    "campaign": "",
                    "color": "gray",
                    "is_active": false,
                }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["error"], "bank 404 not found");
    }

    #[tokio::test]
    async fn malformed_bodies_are_bad_requests() {
        let (catalog, router) = seeded();
        let cases = [
            (Method::POST, "/api/banks", json!({ "name": "Yapı Kredi" })),
            (Method::PUT, "/api/banks/1", json!({ "name": 42 })),
            (Method::PATCH, "/api/banks/1", json!({ "max_amount": "lots" })),
            (Method::PATCH, "/api/banks/first", json!({ "color": "gold" })),
        ];

        for (method, uri, body) in cases {
            let response = router
                .clone()
                .oneshot(json_request(method.clone(), uri, body))
                .await
                .expect("route executes");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
            let body = read_json(response).await;
            assert_eq!(body["success"], false);
            assert!(body["error"].is_string());
        }
        assert_eq!(catalog.list_all().len(), default_partners().len());
        assert_eq!(catalog.get(1).expect("seeded").color, default_partners()[0].color);
    }
}
