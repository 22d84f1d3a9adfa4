//! E2E tests for the JSON area API via HTTP
//!
//! These tests build the same router the binary mounts and drive it
//! with `tower::ServiceExt::oneshot`.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use app::config::AppConfig;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use serde_json::Value;
use server_lib::routes::{
    VALIDATE_AREAS_PATH, area_api_router, panic_response, with_panic_boundary,
};
use std::sync::Arc;
use tower::ServiceExt;

fn setup_test_app(log_area_report: bool) -> axum::Router {
    area_api_router(Arc::new(AppConfig {
        log_area_report,
        ..AppConfig::default()
    }))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validate_returns_ok_json() {
    let app = setup_test_app(false);

    let response = app
        .oneshot(
            Request::builder()
                .uri(VALIDATE_AREAS_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["validation"]["isValid"], true);
    assert!(json["validation"]["errors"].as_array().unwrap().is_empty());
    assert!(json["validation"]["warnings"].as_array().unwrap().is_empty());
    assert_eq!(json["areas"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_validate_statistics_payload() {
    let app = setup_test_app(false);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/areas/validate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    let stats = &json["statistics"];
    assert_eq!(stats["totalAreas"], 8);
    assert_eq!(stats["totalPrefectures"], 47);
    assert_eq!(stats["averagePrefecturesPerArea"], 5.875);
    assert_eq!(stats["areaPrefectureCounts"]["九州・沖縄"], 8);
}

#[tokio::test]
async fn test_validate_area_projection() {
    let app = setup_test_app(false);

    let response = app
        .oneshot(
            Request::builder()
                .uri(VALIDATE_AREAS_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    let hokkaido = &json["areas"][0];
    assert_eq!(hokkaido["id"], "hokkaido");
    assert_eq!(hokkaido["name"], "北海道");
    assert_eq!(hokkaido["prefectureCount"], 1);
    assert_eq!(hokkaido["prefectures"][0], "北海道");
    assert_eq!(hokkaido["center"]["lat"], 43.064359);
    assert_eq!(hokkaido["zoom"], 6);
    assert_eq!(hokkaido["color"], "#FF6B6B");
}

#[tokio::test]
async fn test_validate_with_area_report_enabled() {
    let app = setup_test_app(true);

    let response = app
        .oneshot(
            Request::builder()
                .uri(VALIDATE_AREAS_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_validate_rejects_post() {
    let app = setup_test_app(false);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(VALIDATE_AREAS_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_api_path_is_not_found() {
    let app = setup_test_app(false);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/areas/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_panic_response_hides_details() {
    let response = panic_response(Box::new("index out of bounds".to_string())).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "エリア定義の検証中にエラーが発生しました");
    assert!(!json.to_string().contains("index out of bounds"));
}

#[tokio::test]
async fn test_panic_response_with_str_payload() {
    let response = panic_response(Box::new("boom")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
#[allow(clippy::panic)]
async fn test_panicking_route_behind_boundary_returns_generic_500() {
    let app = with_panic_boundary(axum::Router::new().route(
        "/explode",
        axum::routing::get(|| async {
            std::convert::identity::<()>(panic!("area table lookup exploded"))
        }),
    ));

    let response = app
        .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "エリア定義の検証中にエラーが発生しました");
    assert!(!json.to_string().contains("exploded"));
}

#[tokio::test]
async fn test_boundary_leaves_healthy_routes_untouched() {
    let app = with_panic_boundary(
        axum::Router::new().route("/ok", axum::routing::get(|| async { "fine" })),
    );

    let response = app
        .oneshot(Request::builder().uri("/ok").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"fine");
}
