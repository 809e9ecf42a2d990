//! Fact-list state: the loaded snapshot, the active filter, and form visibility.
//!
//! DESIGN
//! ======
//! Every transition is a plain method so the list/filter/submit flow can be
//! tested without a reactive runtime. Components hold this inside an
//! `RwSignal` and call the methods through `update`.

use facts::{CategoryFilter, Fact, FactId};

#[cfg(test)]
#[path = "facts_test.rs"]
mod facts_test;

/// Shared fact-list state provided by the root component.
#[derive(Clone, Debug)]
pub struct FactsState {
    pub items: Vec<Fact>,
    pub filter: CategoryFilter,
    pub show_form: bool,
    pub loading: bool,
    /// Why the last list fetch failed.
    pub error: Option<String>,
    /// Fact whose vote request is in flight.
    pub voting: Option<FactId>,
    pub vote_error: Option<String>,
    load_seq: u64,
}

impl Default for FactsState {
    fn default() -> Self {
        // The first fetch starts on mount, so render the loading message from the start.
        Self {
            items: Vec::new(),
            filter: CategoryFilter::All,
            show_form: false,
            loading: true,
            error: None,
            voting: None,
            vote_error: None,
            load_seq: 0,
        }
    }
}

impl FactsState {
    /// Mark a fetch as started and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.error = None;
        self.load_seq
    }

    /// Apply a fetch result. Results from superseded fetches are dropped.
    /// A failed fetch keeps the previous snapshot.
    ///
    /// Returns `true` when the result was applied.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Fact>, String>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e),
        }
        true
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    /// Switch the active filter. Returns `true` if it changed.
    pub fn select_filter(&mut self, filter: CategoryFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Record a freshly stored fact at the top of the list and close the form.
    pub fn add_created(&mut self, fact: Fact) {
        self.items.insert(0, fact);
        self.show_form = false;
    }

    /// Facts to render: the snapshot narrowed by the active filter.
    ///
    /// The server already filters, but a fact created under another category
    /// is prepended locally and must stay hidden until that filter is chosen.
    #[must_use]
    pub fn visible(&self) -> Vec<Fact> {
        self.items.iter().filter(|f| self.filter.matches(f)).cloned().collect()
    }

    /// Claim the single vote slot for `id`. Returns `false` while another
    /// vote is still in flight.
    pub fn begin_vote(&mut self, id: FactId) -> bool {
        if self.voting.is_some() {
            return false;
        }
        self.voting = Some(id);
        self.vote_error = None;
        true
    }

    /// Release the vote slot and swap in the updated row on success.
    /// Failures land in `vote_error`, leaving the list error alone.
    pub fn finish_vote(&mut self, result: Result<Fact, String>) {
        self.voting = None;
        match result {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|f| f.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(e) => self.vote_error = Some(e),
        }
    }
}

/// Footer line under the list. `count` is the number of rendered items.
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "There is 1 fact in the database. Add your own!".to_owned()
    } else {
        format!("There are {count} facts in the database. Add your own!")
    }
}
