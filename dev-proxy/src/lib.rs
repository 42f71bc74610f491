//! Local development proxy: forwards `/api/*` to the backend so the page and
//! the API share one origin.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, HeaderName, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub bind: String,
    /// Backend origin, without trailing slash.
    pub target: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5173".into(),
            target: "http://127.0.0.1:8000".into(),
        }
    }
}

impl ProxyConfig {
    /// Defaults overridden by `PROXY_BIND` and `PROXY_TARGET`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(v) = std::env::var("PROXY_BIND") {
            config.bind = v;
        }
        if let Ok(v) = std::env::var("PROXY_TARGET") {
            config.target = v;
        }
        config.target = config.target.trim_end_matches('/').to_string();
        config
    }
}

#[derive(Clone)]
struct ProxyState {
    http: reqwest::Client,
    target: String,
}

pub fn app(config: &ProxyConfig) -> Router {
    let state = ProxyState {
        http: reqwest::Client::new(),
        target: config.target.trim_end_matches('/').to_string(),
    };
    Router::new()
        .route("/api", any(forward))
        .route("/api/{*path}", any(forward))
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: &ProxyConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

/// Headers that describe a single connection and must not be forwarded.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-connection"
            | "transfer-encoding"
            | "te"
            | "trailer"
            | "upgrade"
            | "content-length"
    )
}

async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let url = format!("{}{path_and_query}", state.target);

    // The Host header is rebuilt from the target URL.
    let mut request = state.http.request(method.clone(), &url);
    for (name, value) in headers.iter() {
        if *name == header::HOST || is_hop_by_hop(name) {
            continue;
        }
        request = request.header(name, value);
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(error) => {
            warn!(%method, %url, %error, "upstream request failed");
            return bad_gateway();
        }
    };

    let status = upstream.status();
    let upstream_headers = upstream.headers().clone();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(%method, %url, %error, "failed to read upstream body");
            return bad_gateway();
        }
    };
    debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut builder = Response::builder().status(status);
    for (name, value) in upstream_headers.iter() {
        if !is_hop_by_hop(name) {
            builder = builder.header(name, value);
        }
    }
    builder
        .body(Body::from(bytes))
        .unwrap_or_else(|_| bad_gateway())
}

fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "backend unavailable").into_response()
}
