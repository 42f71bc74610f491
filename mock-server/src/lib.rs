use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const WELCOME: &str = "Bienvenido a la API de Opiniones y Trending Topics.<br>\
Utilice /api/opiniones para obtener las opiniones analizadas.<br>\
Utilice /api/trending para obtener los trending topics de Twitter/X.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub opinion_original: String,
    pub opinion_limpia: String,
    pub sentimiento: String,
    pub temas: String,
    pub categoria: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub topic: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Data served by the mock backend, plus switches that make an endpoint
/// answer 500 instead.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub reviews: Vec<Review>,
    pub topics: Vec<TrendingTopic>,
    pub fail_opiniones: bool,
    pub fail_trending: bool,
}

impl Dataset {
    pub fn seeded() -> Self {
        let review = |id, original: &str, sentimiento: &str, temas: &str, categoria: &str| Review {
            id,
            opinion_original: original.to_string(),
            opinion_limpia: original.to_lowercase().replace(['.', ','], ""),
            sentimiento: sentimiento.to_string(),
            temas: temas.to_string(),
            categoria: categoria.to_string(),
        };
        let topic = |name: &str, slug: &str| TrendingTopic {
            topic: name.to_string(),
            url: format!("https://trends24.in/{slug}/"),
        };

        Self {
            reviews: vec![
                review(1, "La entrega fue rápida y el producto llegó perfecto.", "positivo", "entrega, calidad", "logística"),
                review(2, "El soporte tardó tres días en responder.", "negativo", "soporte, tiempos", "atención al cliente"),
                review(3, "Precio correcto, nada especial.", "neutral", "precio", "producto"),
            ],
            topics: vec![
                topic("#RustLang", "rustlang"),
                topic("Eurovisión", "eurovision"),
                topic("#LunesDeGanancia", "lunesdeganancia"),
            ],
            fail_opiniones: false,
            fail_trending: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_opiniones: true,
            fail_trending: true,
            ..Self::default()
        }
    }
}

pub type Db = Arc<Dataset>;

pub fn app() -> Router {
    app_with(Dataset::seeded())
}

pub fn app_with(dataset: Dataset) -> Router {
    let db: Db = Arc::new(dataset);
    Router::new()
        .route("/", get(index))
        .route("/api/opiniones", get(list_opiniones))
        .route("/api/trending", get(list_trending))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Dataset::seeded()).await
}

pub async fn run_with(listener: TcpListener, dataset: Dataset) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(dataset)).await
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

async fn index() -> &'static str {
    WELCOME
}

async fn list_opiniones(State(db): State<Db>) -> ApiResult<Vec<Review>> {
    if db.fail_opiniones {
        return Err(internal_error("Error al obtener opiniones: database unavailable"));
    }
    Ok(Json(db.reviews.clone()))
}

async fn list_trending(State(db): State<Db>) -> ApiResult<Vec<TrendingTopic>> {
    if db.fail_trending {
        return Err(internal_error("Error al obtener trending topics: scraper unavailable"));
    }
    Ok(Json(db.topics.clone()))
}

fn internal_error(message: &str) -> (StatusCode, Json<ErrorBody>) {
    tracing::warn!(%message, "mock endpoint failing on purpose");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}
