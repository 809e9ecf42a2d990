//! Shared fact model, category table, and submission validation.
//!
//! This crate owns the data shapes exchanged between `server`, `client`, and
//! `cli`. Wire field names follow the remote table's camelCase columns so a
//! row read from the store deserializes straight into [`Fact`].

pub mod category;
pub mod draft;
pub mod fact;
pub mod query;

pub use category::{Category, CategoryFilter, UnknownCategory};
pub use draft::{FactDraft, FactError, MAX_TEXT_CHARS, is_valid_http_url, remaining_chars};
pub use fact::{Fact, FactId, NewFact, VoteKind};
pub use query::{DEFAULT_ROW_LIMIT, FactQuery, SortColumn};
