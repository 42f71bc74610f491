//! Client core for the opiniones and trending-topics page.
//!
//! # Overview
//! Two collections, reviews (`/api/opiniones`) and trending topics
//! (`/api/trending`), are each held in a `Container` that fetches the
//! collection and exposes `{ items, loading, error }` to observers. An
//! `AppShell` wires both containers to one transport and renders the page.
//!
//! # Design
//! - `ApiClient` is stateless: `build_list` produces a request, `parse_list`
//!   consumes a response. A `Transport` does the I/O in between.
//! - `Container<T>` is generic over the record type; the two stores differ
//!   only in their `Resource` (endpoint and failure message).
//! - Records wrap the raw JSON object, so the backend's record shape is not
//!   validated beyond "array of objects".

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch_state;
pub mod http;
pub mod stores;
pub mod types;
pub mod view;

pub use app::AppShell;
pub use client::ApiClient;
pub use config::{load_config, AppConfig, ConfigError};
pub use error::ApiError;
pub use fetch_state::{Container, FetchState, Resource};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use stores::{OpinionesStore, TrendingStore, OPINIONES, TRENDING};
pub use types::{Review, TrendingTopic};
