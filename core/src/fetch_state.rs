//! Generic fetch-state container.
//!
//! # Design
//! A `Container<T>` owns one `FetchState<T>` and the single operation that
//! mutates it, `fetch_items`. The state lives in a `tokio::sync::watch`
//! channel: writers go through `send_modify`, readers take a snapshot or
//! subscribe and are woken on every transition.
//!
//! Calls are not serialized. Two overlapping fetches run independently
//! against the same state and whichever settles last decides `items`.
//! The first one to settle also clears `loading` while the other is still
//! outstanding.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::client::ApiClient;
use crate::http::Transport;

/// Observable state of one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// Last successful payload, in server order.
    pub items: Vec<T>,
    /// True from the start of a fetch until it settles.
    pub loading: bool,
    /// Fixed failure message of the most recent attempt, if it failed.
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Nothing requested yet, or the last request is still running with no
    /// data and no error to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.error.is_none()
    }
}

/// Endpoint segment and user-facing failure text of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Path segment under `/api/`.
    pub name: &'static str,
    /// Stored in `FetchState::error` when a fetch fails.
    pub failure_message: &'static str,
}

struct Inner<T> {
    resource: Resource,
    client: ApiClient,
    transport: Arc<dyn Transport>,
    state: watch::Sender<FetchState<T>>,
}

/// Cloneable handle to a collection's state. Clones share the same state.
pub struct Container<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("resource", &self.inner.resource)
            .field("base_url", &self.inner.client.base_url())
            .finish_non_exhaustive()
    }
}

impl<T> Container<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(resource: Resource, client: ApiClient, transport: Arc<dyn Transport>) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        Self {
            inner: Arc::new(Inner {
                resource,
                client,
                transport,
                state,
            }),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.inner.state.subscribe()
    }

    /// Fetch the collection and record the outcome.
    ///
    /// Never fails: errors are logged and turned into the resource's fixed
    /// message. On failure `items` keeps its previous value.
    pub async fn fetch_items(&self) {
        let resource = self.inner.resource;
        self.inner.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let request = self.inner.client.build_list(resource.name);
        let path = request.path.clone();
        let result = match self.inner.transport.execute(request).await {
            Ok(response) => self.inner.client.parse_list::<T>(response),
            Err(err) => Err(err),
        };

        match result {
            Ok(items) => {
                debug!(resource = resource.name, %path, count = items.len(), "fetched collection");
                self.inner.state.send_modify(|state| {
                    state.items = items;
                    state.loading = false;
                });
            }
            Err(err) => {
                error!(resource = resource.name, %path, error = %err, "failed to fetch collection");
                self.inner.state.send_modify(|state| {
                    state.error = Some(resource.failure_message.to_string());
                    state.loading = false;
                });
            }
        }
    }

    /// Run `fetch_items` as a background task on the current runtime.
    pub fn spawn_fetch(&self) -> JoinHandle<()> {
        let container = self.clone();
        tokio::spawn(async move { container.fetch_items().await })
    }
}
