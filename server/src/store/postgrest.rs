//! REST client for a hosted PostgREST table (Supabase and compatibles).
//!
//! Reads go through `GET /rest/v1/{table}` with PostgREST filter syntax
//! (`category=eq.science`, `order=votesInteresting.desc`, `limit=1000`).
//! Writes ask for `Prefer: return=representation` so the stored row comes
//! back in the same round trip.
//!
//! VOTES
//! =====
//! PostgREST has no increment without an RPC. A vote reads the counter and
//! sends a PATCH filtered on both the id and the value it read, so a write
//! that lost a race matches no rows and is retried from a fresh read.

use facts::{Fact, FactId, FactQuery, NewFact, VoteKind};
use reqwest::RequestBuilder;
use serde_json::{Map, Value};

use super::{FactStore, StoreError};
use crate::config::StoreConfig;

const PREFER_REPRESENTATION: &str = "return=representation";

/// Read-then-patch rounds before a contended vote gives up.
const VOTE_ATTEMPTS: usize = 5;

pub struct PostgrestStore {
    http: reqwest::Client,
    api_key: String,
    table_url: String,
}

impl PostgrestStore {
    /// Build a client for the table named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self::with_http(http, config))
    }

    fn with_http(http: reqwest::Client, config: StoreConfig) -> Self {
        let table_url = table_url(&config.base_url, &config.table);
        Self { http, api_key: config.api_key, table_url }
    }

    #[must_use]
    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    async fn send(&self, req: RequestBuilder) -> Result<String, StoreError> {
        let response = req
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(StoreError::Response { status: status.as_u16(), body: text });
        }
        Ok(text)
    }

    fn list_request(&self, query: &FactQuery) -> RequestBuilder {
        self.authorized(self.http.get(&self.table_url).query(&list_params(query)))
    }

    fn insert_request(&self, fact: &NewFact) -> RequestBuilder {
        let req = self
            .http
            .post(&self.table_url)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&[fact]);
        self.authorized(req)
    }

    fn vote_request(&self, id: FactId, kind: VoteKind, seen: u32) -> RequestBuilder {
        let req = self
            .http
            .patch(&self.table_url)
            .query(&vote_params(id, kind, seen))
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&vote_body(kind, seen.saturating_add(1)));
        self.authorized(req)
    }

    async fn fetch_one(&self, id: FactId) -> Result<Fact, StoreError> {
        let req = self.authorized(self.http.get(&self.table_url).query(&by_id_params(id)));
        let text = self.send(req).await?;
        first_row(parse_rows(&text)?, id)
    }
}

#[async_trait::async_trait]
impl FactStore for PostgrestStore {
    async fn list(&self, query: &FactQuery) -> Result<Vec<Fact>, StoreError> {
        let text = self.send(self.list_request(query)).await?;
        parse_rows(&text)
    }

    async fn insert(&self, fact: NewFact) -> Result<Fact, StoreError> {
        let text = self.send(self.insert_request(&fact)).await?;
        parse_rows(&text)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Parse("insert returned no rows".to_owned()))
    }

    async fn vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, StoreError> {
        for attempt in 1..=VOTE_ATTEMPTS {
            // NotFound here means the id itself matches nothing.
            let seen = self.fetch_one(id).await?.votes(kind);
            let text = self.send(self.vote_request(id, kind, seen)).await?;
            if let Some(updated) = parse_rows(&text)?.into_iter().next() {
                return Ok(updated);
            }
            tracing::debug!(id, kind = kind.as_str(), attempt, "vote lost a race, retrying");
        }
        Err(StoreError::Contended(id))
    }
}

// =============================================================================
// REQUEST / RESPONSE HELPERS
// =============================================================================

fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

fn list_params(query: &FactQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("select", "*".to_owned())];
    if let Some(category) = query.filter.category() {
        params.push(("category", format!("eq.{category}")));
    }
    params.push(("order", format!("{}.desc", query.sort.column())));
    params.push(("limit", query.limit.to_string()));
    params
}

fn by_id_params(id: FactId) -> Vec<(&'static str, String)> {
    vec![("select", "*".to_owned()), ("id", format!("eq.{id}"))]
}

/// Match the row only while its counter still holds the value that was read.
fn vote_params(id: FactId, kind: VoteKind, seen: u32) -> Vec<(&'static str, String)> {
    vec![("id", format!("eq.{id}")), (kind.column(), format!("eq.{seen}"))]
}

fn vote_body(kind: VoteKind, value: u32) -> Value {
    let mut body = Map::new();
    body.insert(kind.column().to_owned(), Value::from(value));
    Value::Object(body)
}

fn parse_rows(text: &str) -> Result<Vec<Fact>, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Parse(e.to_string()))
}

fn first_row(rows: Vec<Fact>, id: FactId) -> Result<Fact, StoreError> {
    rows.into_iter().next().ok_or(StoreError::NotFound(id))
}

#[cfg(test)]
#[path = "postgrest_test.rs"]
mod postgrest_test;
