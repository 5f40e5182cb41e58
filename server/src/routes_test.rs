use super::*;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("chat-ui").build()
}

async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_body(health_routes(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn full_router_serves_healthz() {
    let (status, _) = get_body(app(test_options()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn index_renders_skip_links_and_conversation() {
    let (status, html) = get_body(app(test_options()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("href=\"#main-content\""));
    assert!(html.contains("href=\"#navigation\""));
    assert!(html.contains("id=\"main-content\""));
    assert!(html.contains("id=\"navigation\""));
    assert!(html.contains("Thanks!"));
    assert!(html.contains("02:05 PM"));
    assert!(html.contains("calc(1rem - 2px)"));
}
