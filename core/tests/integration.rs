//! Stores and shell against the live mock backend over real HTTP.
//!
//! # Design
//! Each test binds the mock backend on a random port and drives the stores
//! through `ReqwestTransport`, so request building, status handling and
//! payload decoding are exercised end to end.

use std::net::SocketAddr;

use mock_server::Dataset;
use opiniones_core::{AppConfig, AppShell};
use tokio::net::TcpListener;

async fn start_backend(dataset: Dataset) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, dataset));
    addr
}

fn shell_for(addr: SocketAddr) -> AppShell {
    let config = AppConfig {
        api_base_url: format!("http://{addr}"),
        request_timeout_secs: Some(5),
    };
    AppShell::new(config).unwrap()
}

#[tokio::test]
async fn opiniones_load_from_backend() {
    let addr = start_backend(Dataset::seeded()).await;
    let shell = shell_for(addr);

    shell.opiniones().fetch_items().await;

    let state = shell.opiniones().snapshot();
    assert!(!state.loading);
    assert!(state.error.is_none());
    let ids: Vec<_> = state.items.iter().map(|r| r.id().cloned().unwrap()).collect();
    assert_eq!(ids, vec![serde_json::json!(1), serde_json::json!(2), serde_json::json!(3)]);
    assert_eq!(state.items[1].sentimiento(), Some("negativo"));
}

#[tokio::test]
async fn trending_keeps_three_topics_in_order() {
    let addr = start_backend(Dataset::seeded()).await;
    let shell = shell_for(addr);

    shell.trending().fetch_items().await;

    let topics = shell.trending().topics();
    let names: Vec<_> = topics.iter().map(|t| t.topic().unwrap().to_string()).collect();
    assert_eq!(names, ["#RustLang", "Eurovisión", "#LunesDeGanancia"]);
}

#[tokio::test]
async fn server_error_sets_fixed_message() {
    let addr = start_backend(Dataset::failing()).await;
    let shell = shell_for(addr);

    shell.opiniones().fetch_items().await;

    let state = shell.opiniones().snapshot();
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("Error al cargar las opiniones."));
    assert!(!state.loading);
}

#[tokio::test]
async fn unreachable_backend_sets_fixed_message() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let shell = shell_for(addr);

    shell.load_all().await;

    assert_eq!(
        shell.opiniones().snapshot().error.as_deref(),
        Some("Error al cargar las opiniones.")
    );
    assert_eq!(
        shell.trending().snapshot().error.as_deref(),
        Some("Error al cargar trending topics.")
    );
}

#[tokio::test]
async fn page_shows_review_cards_after_load() {
    let addr = start_backend(Dataset::seeded()).await;
    let shell = shell_for(addr);

    shell.load_all().await;

    let html = shell.render_page();
    assert!(html.matches("data-cy=\"review-card\"").count() > 0);
    assert_eq!(html.matches("data-cy=\"trending-topic\"").count(), 3);
    assert!(!html.contains("data-cy=\"error\""));
}

#[tokio::test]
async fn empty_backend_renders_no_cards_and_no_error() {
    let addr = start_backend(Dataset::default()).await;
    let shell = shell_for(addr);

    shell.load_all().await;

    let html = shell.render_page();
    assert_eq!(html.matches("data-cy=\"review-card\"").count(), 0);
    assert!(!html.contains("data-cy=\"error\""));
}
