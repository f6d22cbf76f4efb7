use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use checkmark_server::config::Config;
use checkmark_server::web::create_app;
use tower::ServiceExt;

mod common;

async fn create_test_app() -> axum::Router {
    let db = common::setup_db()
        .await
        .expect("Failed to setup test database");
    create_app(db, &Config::default()).expect("Failed to build app")
}

#[tokio::test]
async fn can_check_health_endpoint() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    insta::assert_snapshot!(std::str::from_utf8(&body).unwrap(), @"OK");
}

#[tokio::test]
async fn can_serve_openapi_document() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let document: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let paths = document["paths"].as_object().expect("paths should be an object");
    for path in [
        "/api/checkmark",
        "/api/checkmark/{id}",
        "/api/checkmark/completed",
        "/api/checkmark/pending",
        "/api/checkmark/priority/{level}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(document["components"]["schemas"]["CheckmarkItem"].is_object());
}

#[tokio::test]
async fn can_answer_cors_preflight_for_front_end_origin() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/checkmark")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}
