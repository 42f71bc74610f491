//! The two collections the page shows.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::fetch_state::{Container, Resource};
use crate::http::Transport;
use crate::types::{Review, TrendingTopic};

pub const OPINIONES: Resource = Resource {
    name: "opiniones",
    failure_message: "Error al cargar las opiniones.",
};

pub const TRENDING: Resource = Resource {
    name: "trending",
    failure_message: "Error al cargar trending topics.",
};

pub type OpinionesStore = Container<Review>;
pub type TrendingStore = Container<TrendingTopic>;

pub fn opiniones_store(client: ApiClient, transport: Arc<dyn Transport>) -> OpinionesStore {
    Container::new(OPINIONES, client, transport)
}

pub fn trending_store(client: ApiClient, transport: Arc<dyn Transport>) -> TrendingStore {
    Container::new(TRENDING, client, transport)
}

impl Container<Review> {
    pub fn opiniones(&self) -> Vec<Review> {
        self.snapshot().items
    }
}

impl Container<TrendingTopic> {
    pub fn topics(&self) -> Vec<TrendingTopic> {
        self.snapshot().items
    }
}
