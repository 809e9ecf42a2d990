//! Read description for the fact list: filter, sort, and row cap.

use crate::category::CategoryFilter;
use crate::fact::Fact;

/// Row cap applied to every list read.
pub const DEFAULT_ROW_LIMIT: usize = 1000;

/// Column the list is ordered by, always descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    VotesInteresting,
}

impl SortColumn {
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::VotesInteresting => "votesInteresting",
        }
    }

    fn key(self, fact: &Fact) -> u32 {
        match self {
            Self::VotesInteresting => fact.votes_interesting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactQuery {
    pub filter: CategoryFilter,
    pub sort: SortColumn,
    pub limit: usize,
}

impl FactQuery {
    /// Default sort and cap for the given filter.
    #[must_use]
    pub fn for_filter(filter: CategoryFilter) -> Self {
        Self { filter, sort: SortColumn::default(), limit: DEFAULT_ROW_LIMIT }
    }

    /// Apply this query to an in-memory row set. Ties keep their input order.
    #[must_use]
    pub fn apply<'a>(&self, rows: impl IntoIterator<Item = &'a Fact>) -> Vec<Fact> {
        let mut out: Vec<Fact> = rows.into_iter().filter(|f| self.filter.matches(f)).cloned().collect();
        out.sort_by(|a, b| self.sort.key(b).cmp(&self.sort.key(a)));
        out.truncate(self.limit);
        out
    }
}

impl Default for FactQuery {
    fn default() -> Self {
        Self::for_filter(CategoryFilter::All)
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
