//! Fact list, submit, and vote routes.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures come back as 4xx with a `{ "error": ... }` body the
//! compose form can show verbatim. Store failures are logged here and
//! surfaced as 502 so the browser can tell "bad input" from "store down".
//! Malformed bodies and ids rejected by the extractors get the same JSON
//! shape with the extractor's own status.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use facts::{Category, CategoryFilter, Fact, FactDraft, FactError, FactId, FactQuery, UnknownCategory, VoteKind};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::store::StoreError;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] FactError),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Id(#[from] PathRejection),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Contended(_)) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::BAD_GATEWAY,
            Self::Body(rejection) => rejection.status(),
            Self::Id(rejection) => rejection.status(),
        }
    }

    /// Body of a non-success store reply, kept out of the client message.
    #[must_use]
    pub fn store_body(&self) -> Option<&str> {
        match self {
            Self::Store(StoreError::Response { body, .. }) => Some(body.as_str()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_GATEWAY {
            tracing::error!(error = %self, store_body = self.store_body(), "fact store call failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListFactsParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VoteBody {
    pub kind: VoteKind,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub name: &'static str,
    pub color: &'static str,
}

/// `GET /api/facts?category=`: facts for a filter, most interesting first.
pub async fn list_facts(
    State(state): State<AppState>,
    Query(params): Query<ListFactsParams>,
) -> Result<Json<Vec<Fact>>, ApiError> {
    let filter = match params.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(raw) => CategoryFilter::parse(raw)?,
    };
    let facts = state.store.list(&FactQuery::for_filter(filter)).await?;
    tracing::debug!(%filter, count = facts.len(), "listed facts");
    Ok(Json(facts))
}

/// `POST /api/facts`: validate a draft and insert it.
pub async fn create_fact(
    State(state): State<AppState>,
    body: Result<Json<FactDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Fact>), ApiError> {
    let Json(draft) = body?;
    let new_fact = draft.validate(current_year())?;
    let fact = state.store.insert(new_fact).await?;
    tracing::info!(id = fact.id, category = %fact.category, "fact created");
    Ok((StatusCode::CREATED, Json(fact)))
}

/// `POST /api/facts/{id}/vote`: add one vote of the given kind.
pub async fn vote_fact(
    State(state): State<AppState>,
    id: Result<Path<FactId>, PathRejection>,
    body: Result<Json<VoteBody>, JsonRejection>,
) -> Result<Json<Fact>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let fact = state.store.vote(id, body.kind).await?;
    Ok(Json(fact))
}

/// `GET /api/categories`: the fixed category table with display colors.
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(
        Category::ALL
            .into_iter()
            .map(|c| CategoryResponse { name: c.name(), color: c.color() })
            .collect(),
    )
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[cfg(test)]
#[path = "facts_test.rs"]
mod facts_test;
