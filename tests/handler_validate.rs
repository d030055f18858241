mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use clickshort::routes::build_router;
use serde_json::{Value, json};
use std::net::SocketAddr;

/// Serves a tiny target site on an ephemeral local port.
async fn spawn_target() -> SocketAddr {
    let app = Router::new()
        .route("/ok", get(|| async { "hello" }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/empty", get(|| async { StatusCode::NO_CONTENT }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn server() -> TestServer {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool);
    TestServer::new(build_router(state).layer(common::MockConnectInfoLayer)).unwrap()
}

#[tokio::test]
async fn test_validate_reachable_url() {
    let target = spawn_target().await;
    let server = server().await;

    let response = server
        .post("/validate")
        .form(&[("url", format!("http://{}/ok", target))])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Valid URL");
}

#[tokio::test]
async fn test_validate_accepts_json() {
    let target = spawn_target().await;
    let server = server().await;

    let response = server
        .post("/validate")
        .json(&json!({ "url": format!("http://{}/ok", target) }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_validate_rejects_non_200_status() {
    let target = spawn_target().await;
    let server = server().await;

    for path in ["missing", "empty"] {
        let response = server
            .post("/validate")
            .form(&[("url", format!("http://{}/{}", target, path))])
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "URL is not reachable");
    }
}

#[tokio::test]
async fn test_validate_rejects_refused_connection() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let server = server().await;

    let response = server
        .post("/validate")
        .form(&[("url", format!("http://{}/", addr))])
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_validate_rejects_missing_url() {
    let server = server().await;

    let response = server.post("/validate").form(&[("url", "")]).await;

    response.assert_status_bad_request();
}
