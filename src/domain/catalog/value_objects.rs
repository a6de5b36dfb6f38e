use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value Object - product identity, unique within a result set
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display, Serialize,
    Deserialize,
)]
pub struct ProductId(u32);

impl ProductId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Value Object - search term; the empty string is a valid match-all query
#[derive(Debug, Clone, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
