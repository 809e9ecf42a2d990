//! In-process fact store.

use facts::{Category, Fact, FactId, FactQuery, NewFact, VoteKind};
use tokio::sync::RwLock;

use super::{FactStore, StoreError};

struct Rows {
    facts: Vec<Fact>,
    next_id: FactId,
}

pub struct MemoryStore {
    rows: RwLock<Rows>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_facts(Vec::new())
    }

    /// Start from existing rows. New ids continue after the largest one seen.
    #[must_use]
    pub fn with_facts(facts: Vec<Fact>) -> Self {
        let next_id = facts.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self { rows: RwLock::new(Rows { facts, next_id }) }
    }

    /// A few starter facts so a fresh local run has something to show.
    #[must_use]
    pub fn with_sample_facts() -> Self {
        Self::with_facts(sample_facts())
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.facts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FactStore for MemoryStore {
    async fn list(&self, query: &FactQuery) -> Result<Vec<Fact>, StoreError> {
        let rows = self.rows.read().await;
        Ok(query.apply(&rows.facts))
    }

    async fn insert(&self, fact: NewFact) -> Result<Fact, StoreError> {
        let mut rows = self.rows.write().await;
        let id = rows.next_id;
        rows.next_id += 1;
        let stored = fact.into_fact(id);
        rows.facts.push(stored.clone());
        Ok(stored)
    }

    async fn vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, StoreError> {
        let mut rows = self.rows.write().await;
        let fact = rows.facts.iter_mut().find(|f| f.id == id).ok_or(StoreError::NotFound(id))?;
        fact.record_vote(kind);
        Ok(fact.clone())
    }
}

fn sample_facts() -> Vec<Fact> {
    vec![
        Fact {
            id: 1,
            text: "React is being developed by Meta (formerly facebook)".to_owned(),
            source: "https://opensource.fb.com/".to_owned(),
            category: Category::Technology,
            votes_interesting: 24,
            votes_mindblowing: 9,
            votes_false: 4,
            created_in: 2021,
        },
        Fact {
            id: 2,
            text: "Millennial dads spend 3 times as much time with their kids than their fathers spent with them. \
                   In 1982, 43% of fathers had never changed a diaper. Today, that number is down to 3%"
                .to_owned(),
            source: "https://www.mother.ly/parenting/millennial-dads-spend-more-time-with-their-kids".to_owned(),
            category: Category::Society,
            votes_interesting: 11,
            votes_mindblowing: 2,
            votes_false: 0,
            created_in: 2019,
        },
        Fact {
            id: 3,
            text: "Lisbon is the capital of Portugal".to_owned(),
            source: "https://en.wikipedia.org/wiki/Lisbon".to_owned(),
            category: Category::Society,
            votes_interesting: 8,
            votes_mindblowing: 3,
            votes_false: 1,
            created_in: 2015,
        },
    ]
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;
