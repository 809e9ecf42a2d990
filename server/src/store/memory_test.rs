use super::*;
use facts::CategoryFilter;

fn new_fact(category: Category) -> NewFact {
    NewFact {
        text: "Honey never spoils".to_owned(),
        source: "https://www.smithsonianmag.com".to_owned(),
        category,
        created_in: 2024,
    }
}

#[tokio::test]
async fn insert_assigns_increasing_ids() {
    let store = MemoryStore::new();
    let a = store.insert(new_fact(Category::Science)).await.unwrap();
    let b = store.insert(new_fact(Category::Science)).await.unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn ids_continue_after_seeded_rows() {
    let store = MemoryStore::with_sample_facts();
    let created = store.insert(new_fact(Category::News)).await.unwrap();
    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn list_sorts_by_interesting_descending() {
    let store = MemoryStore::with_sample_facts();
    let rows = store.list(&FactQuery::default()).await.unwrap();
    let votes: Vec<_> = rows.iter().map(|f| f.votes_interesting).collect();
    assert_eq!(votes, vec![24, 11, 8]);
}

#[tokio::test]
async fn list_filters_by_category() {
    let store = MemoryStore::with_sample_facts();
    let query = FactQuery::for_filter(CategoryFilter::Only(Category::Society));
    let rows = store.list(&query).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|f| f.category == Category::Society));
}

#[tokio::test]
async fn vote_increments_one_counter() {
    let store = MemoryStore::with_sample_facts();
    let updated = store.vote(3, VoteKind::False).await.unwrap();
    assert_eq!(updated.votes_false, 2);
    assert_eq!(updated.votes_interesting, 8);
    assert_eq!(updated.votes_mindblowing, 3);

    let rows = store.list(&FactQuery::default()).await.unwrap();
    let stored = rows.iter().find(|f| f.id == 3).unwrap();
    assert_eq!(stored.votes_false, 2);
}

#[tokio::test]
async fn vote_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let err = store.vote(99, VoteKind::Interesting).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(99)));
}
