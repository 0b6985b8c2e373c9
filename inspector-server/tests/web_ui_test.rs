use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use inspector_model::MockGateway;
use inspector_server::{ServerConfig, create_app};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let gateway = Arc::new(MockGateway::new("test-model"));
    create_app(ServerConfig::new(gateway))
}

#[tokio::test]
async fn test_root_serves_page_with_200() {
    // The deployment health check probes "/" and expects a success status.
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().get("content-type").unwrap().to_str().unwrap().contains("text/html")
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();
    assert!(body_str.contains("Windshield Inspector"));
}

#[tokio::test]
async fn test_ui_index_route() {
    let response = test_app()
        .oneshot(Request::builder().uri("/ui/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().get("content-type").unwrap().to_str().unwrap().contains("text/html")
    );
}

#[tokio::test]
async fn test_ui_assets_route() {
    let response = test_app()
        .oneshot(Request::builder().uri("/ui/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = test_app()
        .oneshot(Request::builder().uri("/ui/missing.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}
