//! Attribute facts keyed by subject.
//!
//! A [`Fact`] is a partial record about one subject. Two facts about the
//! same subject consolidate into one when every attribute they share has
//! the same value; the result carries the union of their attributes. Facts
//! that disagree on a shared attribute stay separate, as do facts about
//! different subjects.

use std::collections::BTreeMap;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use tracing::debug;

use summa_merge::{FixpointEngine, Summary};
use summa_types::{Mergeable, NaturalOrder};

use crate::error::{DomainError, DomainResult};

/// A subject plus a set of attribute values.
///
/// Ordering: `subject` → `attributes` (lexicographic over sorted keys).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fact {
    subject: String,
    attributes: BTreeMap<String, String>,
}

impl Fact {
    /// Create a fact with no attributes.
    pub fn new(subject: impl Into<String>) -> DomainResult<Self> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(DomainError::EmptySubject);
        }
        Ok(Self {
            subject,
            attributes: BTreeMap::new(),
        })
    }

    /// Set an attribute, replacing any previous value for `key`.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> DomainResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::EmptyAttributeKey);
        }
        self.attributes.insert(key, value.into());
        Ok(self)
    }

    /// The subject this fact describes.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Value of one attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All attributes, sorted by key.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Returns `true` if both facts describe the same subject and agree on
    /// every attribute they share.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.subject == other.subject
            && self
                .attributes
                .iter()
                .all(|(key, value)| other.attributes.get(key).map_or(true, |v| v == value))
    }

    /// Returns `true` if every attribute of `other` is already present here
    /// with the same value.
    pub fn covers(&self, other: &Self) -> bool {
        self.subject == other.subject
            && other
                .attributes
                .iter()
                .all(|(key, value)| self.attributes.get(key) == Some(value))
    }
}

impl Mergeable for Fact {
    type Error = Infallible;

    fn combine(&self, other: &Self) -> Result<Self, Self::Error> {
        if !self.is_compatible(other) || self.covers(other) {
            return Ok(self.clone());
        }
        let mut attributes = self.attributes.clone();
        for (key, value) in &other.attributes {
            attributes
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        Ok(Self {
            subject: self.subject.clone(),
            attributes,
        })
    }
}

/// Consolidate facts: every subject ends with one fact per mutually
/// consistent group of attributes.
pub fn consolidate(facts: Vec<Fact>) -> Summary<Fact> {
    let input = facts.len();
    let summary = FixpointEngine::new(NaturalOrder).summarize(facts);
    debug!(input, output = summary.len(), rounds = summary.rounds, "consolidated facts");
    summary
}
