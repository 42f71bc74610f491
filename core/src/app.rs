//! Application shell: owns the transport and both stores.
//!
//! # Design
//! Stores are built here and handed out by reference, so each shell (and
//! each test) gets its own isolated state instead of a process-wide registry.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::http::{ReqwestTransport, Transport};
use crate::stores::{opiniones_store, trending_store, OpinionesStore, TrendingStore};
use crate::view;

#[derive(Debug, Clone)]
pub struct AppShell {
    opiniones: OpinionesStore,
    trending: TrendingStore,
}

impl AppShell {
    /// Build a shell talking HTTP through `reqwest`.
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: AppConfig, transport: Arc<dyn Transport>) -> Self {
        let client = ApiClient::new(&config.api_base_url);
        Self {
            opiniones: opiniones_store(client.clone(), Arc::clone(&transport)),
            trending: trending_store(client, transport),
        }
    }

    pub fn opiniones(&self) -> &OpinionesStore {
        &self.opiniones
    }

    pub fn trending(&self) -> &TrendingStore {
        &self.trending
    }

    /// Fetch both collections concurrently.
    pub async fn load_all(&self) {
        tokio::join!(self.opiniones.fetch_items(), self.trending.fetch_items());
    }

    pub fn render_page(&self) -> String {
        view::render_page(&self.opiniones.snapshot(), &self.trending.snapshot())
    }
}
