use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use facts::{Category, CategoryFilter, FactDraft};

use super::*;
use crate::config::StoreTimeouts;
use crate::routes::facts::create_fact;
use crate::state::AppState;
use crate::state::test_helpers::{local_http, spawn_router};

fn config(base_url: &str) -> StoreConfig {
    StoreConfig {
        base_url: base_url.to_owned(),
        api_key: "anon".to_owned(),
        table: "facts".to_owned(),
        timeouts: StoreTimeouts::default(),
    }
}

#[test]
fn table_url_joins_rest_prefix() {
    assert_eq!(table_url("https://abc.supabase.co", "facts"), "https://abc.supabase.co/rest/v1/facts");
    assert_eq!(table_url("https://abc.supabase.co/", "facts"), "https://abc.supabase.co/rest/v1/facts");
}

#[test]
fn new_builds_table_url_from_config() {
    let store = PostgrestStore::new(config("http://localhost:54321")).unwrap();
    assert_eq!(store.table_url(), "http://localhost:54321/rest/v1/facts");
}

#[test]
fn list_params_for_all_skip_category() {
    let params = list_params(&FactQuery::default());
    assert_eq!(
        params,
        vec![
            ("select", "*".to_owned()),
            ("order", "votesInteresting.desc".to_owned()),
            ("limit", "1000".to_owned()),
        ]
    );
}

#[test]
fn list_params_for_category_add_eq_filter() {
    let params = list_params(&FactQuery::for_filter(CategoryFilter::Only(Category::Finance)));
    assert!(params.contains(&("category", "eq.finance".to_owned())));
    assert!(params.contains(&("order", "votesInteresting.desc".to_owned())));
}

#[test]
fn by_id_params_filter_on_id() {
    assert_eq!(by_id_params(12), vec![("select", "*".to_owned()), ("id", "eq.12".to_owned())]);
}

#[test]
fn vote_params_pin_the_counter_that_was_read() {
    assert_eq!(
        vote_params(12, VoteKind::Interesting, 7),
        vec![("id", "eq.12".to_owned()), ("votesInteresting", "eq.7".to_owned())]
    );
}

#[test]
fn vote_body_sets_only_target_column() {
    assert_eq!(vote_body(VoteKind::Mindblowing, 5), serde_json::json!({ "votesMindblowing": 5 }));
    assert_eq!(vote_body(VoteKind::False, 1), serde_json::json!({ "votesFalse": 1 }));
}

#[test]
fn parse_rows_reads_store_array() {
    let text = serde_json::json!([{
        "id": 1,
        "text": "Lisbon is the capital of Portugal",
        "source": "https://en.wikipedia.org/wiki/Lisbon",
        "category": "society",
        "votesInteresting": 8,
        "votesMindblowing": 3,
        "votesFalse": 1,
        "createdIn": 2015,
        "created_at": "2023-01-01T00:00:00Z"
    }])
    .to_string();
    let rows = parse_rows(&text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, Category::Society);
    assert_eq!(rows[0].votes_interesting, 8);
}

#[test]
fn parse_rows_rejects_error_object() {
    let text = r#"{"message":"relation \"facts\" does not exist","code":"42P01"}"#;
    assert!(matches!(parse_rows(text), Err(StoreError::Parse(_))));
}

#[test]
fn first_row_empty_is_not_found() {
    assert!(matches!(first_row(Vec::new(), 9), Err(StoreError::NotFound(9))));
}

// =============================================================
// Request building
// =============================================================

fn new_fact() -> NewFact {
    NewFact {
        text: "Octopuses have three hearts".to_owned(),
        source: "https://ocean.si.edu/ocean-life/invertebrates/octopuses".to_owned(),
        category: Category::Science,
        created_in: 2024,
    }
}

#[test]
fn every_request_carries_key_headers() {
    let store = PostgrestStore::new(config("http://localhost:54321")).unwrap();
    let requests = [
        store.list_request(&FactQuery::default()).build().unwrap(),
        store.insert_request(&new_fact()).build().unwrap(),
        store.vote_request(4, VoteKind::False, 2).build().unwrap(),
    ];
    for req in &requests {
        assert_eq!(req.headers()["apikey"], "anon");
        assert_eq!(req.headers()["authorization"], "Bearer anon");
    }
}

#[test]
fn reads_do_not_ask_for_representation() {
    let store = PostgrestStore::new(config("http://localhost:54321")).unwrap();
    let req = store.list_request(&FactQuery::default()).build().unwrap();
    assert!(req.headers().get("prefer").is_none());
    assert_eq!(req.url().query(), Some("select=*&order=votesInteresting.desc&limit=1000"));
}

#[test]
fn insert_request_posts_one_row_array() {
    let store = PostgrestStore::new(config("http://localhost:54321")).unwrap();
    let req = store.insert_request(&new_fact()).build().unwrap();
    assert_eq!(req.method(), reqwest::Method::POST);
    assert_eq!(req.headers()["prefer"], "return=representation");
    let body: Value = serde_json::from_slice(req.body().unwrap().as_bytes().unwrap()).unwrap();
    assert_eq!(body[0]["category"], "science");
    assert_eq!(body[0]["createdIn"], 2024);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[test]
fn vote_request_patches_conditionally() {
    let store = PostgrestStore::new(config("http://localhost:54321")).unwrap();
    let req = store.vote_request(4, VoteKind::False, 2).build().unwrap();
    assert_eq!(req.method(), reqwest::Method::PATCH);
    assert_eq!(req.url().query(), Some("id=eq.4&votesFalse=eq.2"));
    assert_eq!(req.headers()["prefer"], "return=representation");
    let body: Value = serde_json::from_slice(req.body().unwrap().as_bytes().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "votesFalse": 3 }));
}

// =============================================================
// Against a local PostgREST stand-in
// =============================================================

struct MockRows {
    fact: Fact,
    /// Writes from "another client" applied just before the next PATCHes.
    foreign_writes: u32,
    patches: Vec<Value>,
}

type MockTable = Arc<Mutex<MockRows>>;

fn mock_table(foreign_writes: u32) -> MockTable {
    let fact = new_fact().into_fact(1);
    Arc::new(Mutex::new(MockRows { fact, foreign_writes, patches: Vec::new() }))
}

async fn mock_select(State(table): State<MockTable>, Query(q): Query<HashMap<String, String>>) -> Json<Vec<Fact>> {
    let rows = table.lock().unwrap();
    let hit = q.get("id").is_none_or(|v| *v == format!("eq.{}", rows.fact.id));
    Json(if hit { vec![rows.fact.clone()] } else { Vec::new() })
}

async fn mock_update(
    State(table): State<MockTable>,
    Query(q): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Json<Vec<Fact>> {
    let mut rows = table.lock().unwrap();
    rows.patches.push(body.clone());
    if rows.foreign_writes > 0 {
        rows.foreign_writes -= 1;
        rows.fact.votes_interesting += 1;
    }
    let id_hit = q.get("id") == Some(&format!("eq.{}", rows.fact.id));
    let counter_hit = q.get("votesInteresting") == Some(&format!("eq.{}", rows.fact.votes_interesting));
    if !(id_hit && counter_hit) {
        return Json(Vec::new());
    }
    if let Some(value) = body.get("votesInteresting").and_then(Value::as_u64) {
        rows.fact.votes_interesting = u32::try_from(value).unwrap();
    }
    Json(vec![rows.fact.clone()])
}

async fn mock_store(table: &MockTable) -> PostgrestStore {
    let app = Router::new()
        .route("/rest/v1/facts", get(mock_select).patch(mock_update))
        .with_state(table.clone());
    let base = spawn_router(app).await;
    PostgrestStore::with_http(local_http(), config(&base))
}

#[tokio::test]
async fn overlapping_votes_both_count() {
    let table = mock_table(0);
    let a = mock_store(&table).await;
    let b = mock_store(&table).await;
    let (first, second) = tokio::join!(a.vote(1, VoteKind::Interesting), b.vote(1, VoteKind::Interesting));
    first.unwrap();
    second.unwrap();
    assert_eq!(table.lock().unwrap().fact.votes_interesting, 2);
}

#[tokio::test]
async fn vote_that_lost_a_race_rereads_and_retries() {
    let table = mock_table(1);
    let store = mock_store(&table).await;
    let fact = store.vote(1, VoteKind::Interesting).await.unwrap();
    assert_eq!(fact.votes_interesting, 2);
    let rows = table.lock().unwrap();
    assert_eq!(
        rows.patches,
        vec![serde_json::json!({ "votesInteresting": 1 }), serde_json::json!({ "votesInteresting": 2 })]
    );
}

#[tokio::test]
async fn vote_gives_up_after_bounded_attempts() {
    let table = mock_table(100);
    let store = mock_store(&table).await;
    let err = store.vote(1, VoteKind::Interesting).await.unwrap_err();
    assert!(matches!(err, StoreError::Contended(1)));
    assert_eq!(table.lock().unwrap().patches.len(), VOTE_ATTEMPTS);
}

#[tokio::test]
async fn vote_on_missing_id_is_not_found_without_patching() {
    let table = mock_table(0);
    let store = mock_store(&table).await;
    let err = store.vote(7, VoteKind::Interesting).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(7)));
    assert!(table.lock().unwrap().patches.is_empty());
}

async fn rejecting_store() -> PostgrestStore {
    let app = Router::new().route(
        "/rest/v1/facts",
        post(|| async { (StatusCode::UNAUTHORIZED, r#"{"message":"Invalid API key"}"#) }),
    );
    let base = spawn_router(app).await;
    PostgrestStore::with_http(local_http(), config(&base))
}

#[tokio::test]
async fn non_success_reply_keeps_status_and_body() {
    let store = rejecting_store().await;
    let err = store.insert(new_fact()).await.unwrap_err();
    match err {
        StoreError::Response { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_insert_surfaces_as_bad_gateway() {
    let state = AppState::new(Arc::new(rejecting_store().await));
    let draft = FactDraft {
        text: "Octopuses have three hearts".to_owned(),
        source: "https://ocean.si.edu".to_owned(),
        category: Some("science".to_owned()),
    };
    let err = create_fact(State(state), Ok(Json(draft))).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert!(err.store_body().is_some_and(|b| b.contains("Invalid API key")));
}
