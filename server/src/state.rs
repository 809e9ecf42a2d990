//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the fact store behind a trait object so the same handlers serve the
//! hosted table in production and an in-process store locally and in tests.

use std::sync::Arc;

use crate::store::FactStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FactStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn FactStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::store::MemoryStore;

    /// `AppState` over an empty in-memory store. The store handle is returned
    /// too so tests can inspect rows directly.
    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (AppState::new(store.clone()), store)
    }

    /// `AppState` over the sample facts.
    #[must_use]
    pub fn seeded_app_state() -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_sample_facts());
        (AppState::new(store.clone()), store)
    }

    /// Serve `app` on an ephemeral loopback port and return its base URL.
    pub async fn spawn_router(app: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// HTTP client for loopback servers; ignores proxy settings from the env.
    #[must_use]
    pub fn local_http() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }
}
