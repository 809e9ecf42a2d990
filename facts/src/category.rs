//! Fixed topical categories and the list filter built on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fact::Fact;

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

/// Returned when a name does not match any of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// One of the eight fixed categories a fact can be filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Science,
    Finance,
    Society,
    Entertainment,
    Health,
    History,
    News,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 8] = [
        Self::Technology,
        Self::Science,
        Self::Finance,
        Self::Society,
        Self::Entertainment,
        Self::Health,
        Self::History,
        Self::News,
    ];

    /// Lowercase wire name, also used as the stored column value.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Science => "science",
            Self::Finance => "finance",
            Self::Society => "society",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::History => "history",
            Self::News => "news",
        }
    }

    /// CSS color used for the category tag and filter button.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Technology => "#3b82f6",
            Self::Science => "#16a34a",
            Self::Finance => "#ef4444",
            Self::Society => "#eab308",
            Self::Entertainment => "#db2777",
            Self::Health => "#14b8a6",
            Self::History => "#f97316",
            Self::News => "#8b5cf6",
        }
    }

    /// Parse a wire name. Matching is exact; names are lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] for any name outside [`Category::ALL`].
    pub fn parse(raw: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == raw)
            .ok_or_else(|| UnknownCategory(raw.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Narrowing applied to the fact list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Wire form: `"all"` or the category name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.name(),
        }
    }

    /// Parse the wire form produced by [`CategoryFilter::as_str`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] when the value is neither `"all"` nor a
    /// category name.
    pub fn parse(raw: &str) -> Result<Self, UnknownCategory> {
        if raw == "all" {
            return Ok(Self::All);
        }
        Category::parse(raw).map(Self::Only)
    }

    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }

    /// Whether `fact` belongs in a list narrowed by this filter.
    #[must_use]
    pub fn matches(self, fact: &Fact) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => fact.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
