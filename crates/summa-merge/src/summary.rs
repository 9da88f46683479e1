//! The result of a fixpoint merge.

use serde::{Deserialize, Serialize};

/// How a merge call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convergence {
    /// One more round left the sequence unchanged.
    Converged,
    /// The round bound was reached first; the items are a best-effort,
    /// partially reduced sequence.
    Exhausted,
}

/// Items produced by a merge call, together with how the call ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary<T> {
    /// The reduced, sorted sequence.
    pub items: Vec<T>,
    /// Whether a fixpoint was reached.
    pub convergence: Convergence,
    /// Rounds executed, including the round that confirmed stability.
    pub rounds: usize,
    /// Number of pairwise merge invocations across all rounds.
    pub combine_calls: u64,
}

impl<T> Summary<T> {
    /// Returns `true` if the call stopped at a fixpoint.
    pub fn is_converged(&self) -> bool {
        self.convergence == Convergence::Converged
    }

    /// Returns `true` if the call stopped at the round bound.
    pub fn is_exhausted(&self) -> bool {
        self.convergence == Convergence::Exhausted
    }

    /// Number of items in the result.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the result holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the result items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drop the bookkeeping and keep the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Summary<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
