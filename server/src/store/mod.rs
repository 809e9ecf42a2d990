//! Fact store: the one remote table the app reads from and writes to.
//!
//! DESIGN
//! ======
//! Handlers talk to the `FactStore` trait. `PostgrestStore` speaks the hosted
//! table's REST dialect; `MemoryStore` keeps rows in process for local runs
//! without a configured remote and for tests.

pub mod memory;
pub mod postgrest;

use facts::{Fact, FactId, FactQuery, NewFact, VoteKind};

pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request to the store failed before a response arrived.
    #[error("store request failed: {0}")]
    Request(String),

    /// The store returned a non-success HTTP status.
    #[error("store response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized into fact rows.
    #[error("store response parse failed: {0}")]
    Parse(String),

    #[error("fact not found: {0}")]
    NotFound(FactId),

    /// Concurrent votes kept changing the counter between read and write.
    #[error("vote on fact {0} kept conflicting with other writers")]
    Contended(FactId),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Read, insert, and vote operations against the fact table.
#[async_trait::async_trait]
pub trait FactStore: Send + Sync {
    /// Rows matching `query`, in its sort order, at most `query.limit` of them.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store is unreachable or replies badly.
    async fn list(&self, query: &FactQuery) -> Result<Vec<Fact>, StoreError>;

    /// Insert one fact and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store rejects the insert.
    async fn insert(&self, fact: NewFact) -> Result<Fact, StoreError>;

    /// Add one vote of `kind` to fact `id` and return the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    async fn vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, StoreError>;
}
