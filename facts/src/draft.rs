//! Compose-form input and the checks a submission must pass.
//!
//! DESIGN
//! ======
//! The same validation runs in the browser before submit and on the server
//! before insert, so a hand-crafted request cannot store a fact the form
//! would have refused.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::fact::NewFact;

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// Longest accepted fact text, in characters.
pub const MAX_TEXT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    #[error("fact text is empty")]
    EmptyText,
    #[error("fact text is {len} characters; the limit is {MAX_TEXT_CHARS}")]
    TextTooLong { len: usize },
    #[error("source must be an http or https URL")]
    InvalidSource,
    #[error("choose a category")]
    MissingCategory,
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Raw, unvalidated compose-form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactDraft {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: String,
    /// `None` or `""` when the placeholder option is still selected.
    #[serde(default)]
    pub category: Option<String>,
}

impl FactDraft {
    /// Check every field and build the insert payload stamped with `created_in`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in field order: text, source, category.
    pub fn validate(&self, created_in: i32) -> Result<NewFact, FactError> {
        if self.text.trim().is_empty() {
            return Err(FactError::EmptyText);
        }
        let len = self.text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(FactError::TextTooLong { len });
        }
        if !is_valid_http_url(&self.source) {
            return Err(FactError::InvalidSource);
        }
        let category = match self.category.as_deref() {
            None | Some("") => return Err(FactError::MissingCategory),
            Some(raw) => Category::parse(raw).map_err(|e| FactError::UnknownCategory(e.0))?,
        };

        Ok(NewFact { text: self.text.clone(), source: self.source.clone(), category, created_in })
    }
}

/// Characters left before `text` hits [`MAX_TEXT_CHARS`]. Negative once over.
#[must_use]
pub fn remaining_chars(text: &str) -> i64 {
    let len = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
    let max = i64::try_from(MAX_TEXT_CHARS).unwrap_or(i64::MAX);
    max.saturating_sub(len)
}

/// Absolute URL whose scheme is `http` or `https`.
#[must_use]
pub fn is_valid_http_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}
