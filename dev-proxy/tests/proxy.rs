use std::net::SocketAddr;

use axum::{
    http::{header, HeaderMap, Method, Request, StatusCode, Uri},
    routing::any,
    Router,
};
use dev_proxy::{app, ProxyConfig};
use http_body_util::BodyExt;
use mock_server::Dataset;
use tokio::net::TcpListener;
use tower::ServiceExt;

async fn start_backend(dataset: Dataset) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, dataset));
    addr
}

/// Backend that answers with the method, URI, `x-request-id` header and body
/// it received.
async fn start_echo_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let echo = Router::new().route(
        "/api/{*path}",
        any(|method: Method, uri: Uri, headers: HeaderMap, body: String| async move {
            let request_id = headers
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string();
            format!("{method} {uri} {request_id} {body}")
        }),
    );
    tokio::spawn(async move { axum::serve(listener, echo).await });
    addr
}

fn proxy_to(addr: SocketAddr) -> ProxyConfig {
    ProxyConfig {
        bind: "127.0.0.1:0".to_string(),
        target: format!("http://{addr}"),
    }
}

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::builder().uri(uri).body(axum::body::Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn forwards_api_requests_to_backend() {
    let addr = start_backend(Dataset::seeded()).await;

    let resp = app(&proxy_to(addr)).oneshot(get("/api/opiniones")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn forwards_method_query_headers_and_body() {
    let addr = start_echo_backend().await;

    let resp = app(&proxy_to(addr))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/trending?limit=2&x=%20y")
                .header("x-request-id", "abc123")
                .body(axum::body::Body::from("hola"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"POST /api/trending?limit=2&x=%20y abc123 hola");
}

#[tokio::test]
async fn forwards_get_without_body() {
    let addr = start_echo_backend().await;

    let resp = app(&proxy_to(addr)).oneshot(get("/api/opiniones")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"GET /api/opiniones - ");
}

#[tokio::test]
async fn passes_backend_errors_through() {
    let addr = start_backend(Dataset::failing()).await;

    let resp = app(&proxy_to(addr)).oneshot(get("/api/opiniones")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Error al obtener opiniones"));
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let resp = app(&proxy_to(addr)).oneshot(get("/api/opiniones")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn non_api_paths_are_not_proxied() {
    let addr = start_backend(Dataset::seeded()).await;

    let resp = app(&proxy_to(addr)).oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
