mod config;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use crate::store::{FactStore, MemoryStore, PostgrestStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let store: Arc<dyn FactStore> = match config::StoreConfig::from_env().expect("store config invalid") {
        Some(cfg) => {
            let table = cfg.table.clone();
            let store = PostgrestStore::new(cfg).expect("store client init failed");
            tracing::info!(url = store.table_url(), %table, "remote fact store configured");
            Arc::new(store)
        }
        None => {
            let store = MemoryStore::with_sample_facts();
            let facts = store.len().await;
            tracing::warn!(facts, "TIL_STORE_URL not set; using in-memory store");
            Arc::new(store)
        }
    };

    let state = state::AppState::new(store);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "today-i-learned listening");
    axum::serve(listener, app).await.expect("server failed");
}
