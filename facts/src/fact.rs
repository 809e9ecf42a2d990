//! Stored fact rows and their vote counters.

use serde::{Deserialize, Serialize};

use crate::category::Category;

#[cfg(test)]
#[path = "fact_test.rs"]
mod fact_test;

/// Primary key assigned by the store.
pub type FactId = i64;

/// A fact as stored in the remote table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub id: FactId,
    pub text: String,
    pub source: String,
    pub category: Category,
    #[serde(default)]
    pub votes_interesting: u32,
    #[serde(default)]
    pub votes_mindblowing: u32,
    #[serde(default)]
    pub votes_false: u32,
    pub created_in: i32,
}

impl Fact {
    /// Current value of the counter for `kind`.
    #[must_use]
    pub fn votes(&self, kind: VoteKind) -> u32 {
        match kind {
            VoteKind::Interesting => self.votes_interesting,
            VoteKind::Mindblowing => self.votes_mindblowing,
            VoteKind::False => self.votes_false,
        }
    }

    /// Increment the counter for `kind` by one, saturating at `u32::MAX`.
    pub fn record_vote(&mut self, kind: VoteKind) {
        let counter = match kind {
            VoteKind::Interesting => &mut self.votes_interesting,
            VoteKind::Mindblowing => &mut self.votes_mindblowing,
            VoteKind::False => &mut self.votes_false,
        };
        *counter = counter.saturating_add(1);
    }

    /// More "false" votes than positive votes combined.
    #[must_use]
    pub fn is_disputed(&self) -> bool {
        u64::from(self.votes_false) > u64::from(self.votes_interesting) + u64::from(self.votes_mindblowing)
    }
}

/// A validated fact ready to insert. Vote counters start at zero in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFact {
    pub text: String,
    pub source: String,
    pub category: Category,
    pub created_in: i32,
}

impl NewFact {
    /// Materialize the row the store would return for this insert.
    #[must_use]
    pub fn into_fact(self, id: FactId) -> Fact {
        Fact {
            id,
            text: self.text,
            source: self.source,
            category: self.category,
            votes_interesting: 0,
            votes_mindblowing: 0,
            votes_false: 0,
            created_in: self.created_in,
        }
    }
}

/// The three reactions a reader can add to a fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Interesting,
    Mindblowing,
    False,
}

impl VoteKind {
    pub const ALL: [VoteKind; 3] = [Self::Interesting, Self::Mindblowing, Self::False];

    /// Store column holding this counter.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Interesting => "votesInteresting",
            Self::Mindblowing => "votesMindblowing",
            Self::False => "votesFalse",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interesting => "interesting",
            Self::Mindblowing => "mindblowing",
            Self::False => "false",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Interesting => "👍",
            Self::Mindblowing => "🤯",
            Self::False => "⛔️",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}
