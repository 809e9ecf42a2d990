//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics. When the server sends a
//! `{ "error": ... }` body its message is passed through, so validation
//! failures read the same whether caught locally or by the server.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use facts::{CategoryFilter, Fact, FactDraft, FactId, VoteKind};

#[cfg(any(test, feature = "hydrate"))]
fn facts_endpoint(filter: CategoryFilter) -> String {
    format!("/api/facts?category={}", filter.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn vote_endpoint(id: FactId) -> String {
    format!("/api/facts/{id}/vote")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16, body: Option<ErrorBody>) -> String {
    match body {
        Some(ErrorBody { error }) if !error.is_empty() => error,
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

#[cfg(feature = "hydrate")]
async fn error_from(action: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.ok();
    request_failed_message(action, status, body)
}

/// Fetch facts for `filter`, most interesting first, capped by the server.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_facts(filter: CategoryFilter) -> Result<Vec<Fact>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&facts_endpoint(filter))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from("load facts", resp).await);
        }
        resp.json::<Vec<Fact>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err("not available on server".to_owned())
    }
}

/// Submit a compose-form draft via `POST /api/facts` and return the stored fact.
///
/// # Errors
///
/// Returns the server's validation message or a status-based message.
pub async fn create_fact(draft: &FactDraft) -> Result<Fact, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/facts")
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from("create fact", resp).await);
        }
        resp.json::<Fact>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Add one vote via `POST /api/facts/{id}/vote` and return the updated fact.
///
/// # Errors
///
/// Returns an error string if the request fails or the fact no longer exists.
pub async fn vote(id: FactId, kind: VoteKind) -> Result<Fact, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "kind": kind });
        let resp = gloo_net::http::Request::post(&vote_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from("vote", resp).await);
        }
        resp.json::<Fact>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, kind);
        Err("not available on server".to_owned())
    }
}
