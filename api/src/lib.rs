mod config;
pub mod dashboard;
pub mod error;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tera::Tera;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::Config;

#[derive(Clone)]
pub struct AppState {
    templates: Tera,
}

impl AppState {
    pub fn new() -> Result<Self, tera::Error> {
        let mut templates = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))?;
        // Uploaded CSV cells end up in the page.
        templates.autoescape_on(vec![".html.tera", ".html"]);

        Ok(Self { templates })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub async fn welcome() -> Json<Message> {
    Json(Message {
        message: "Hello World".to_owned(),
    })
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route(
            "/dashboard",
            get(dashboard::home).post(dashboard::upload),
        )
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let server_url = config.server_url();

    let state = AppState::new().context("Tera initialization failed")?;

    let listener = tokio::net::TcpListener::bind(&server_url)
        .await
        .with_context(|| format!("could not bind {server_url}"))?;
    info!("listening on http://{server_url}");

    axum::serve(listener, app(state)).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        println!("Error: {err:#}");
    }
}
