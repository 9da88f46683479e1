//! The pairwise merge seam.
//!
//! The fixpoint loop never calls `Mergeable::combine` directly; every pair
//! goes through a [`PairwiseMerge`] delegate. Swapping the delegate changes
//! how two items combine (logging, a different tie-break, a stricter
//! policy) without touching the loop.

use std::fmt::Debug;

use tracing::trace;

use summa_types::{combined, Mergeable};

/// Combines one ordered pair of items on behalf of the engine.
///
/// Implementations must keep the combine contract: return a value equal to
/// `a` when the pair does not merge.
pub trait PairwiseMerge<T: Mergeable> {
    /// Combine `a` with `b`.
    fn merge_pair(&self, a: &T, b: &T) -> Result<T, T::Error>;
}

/// The default delegate: `a.combine(b)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Combine;

impl<T: Mergeable> PairwiseMerge<T> for Combine {
    fn merge_pair(&self, a: &T, b: &T) -> Result<T, T::Error> {
        a.combine(b)
    }
}

impl<T, F> PairwiseMerge<T> for F
where
    T: Mergeable,
    F: Fn(&T, &T) -> Result<T, T::Error>,
{
    fn merge_pair(&self, a: &T, b: &T) -> Result<T, T::Error> {
        self(a, b)
    }
}

/// Wraps another delegate and records every invocation as a `trace` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Traced<P> {
    inner: P,
}

impl<P> Traced<P> {
    /// Trace the pairs handled by `inner`.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped delegate.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<T, P> PairwiseMerge<T> for Traced<P>
where
    T: Mergeable + Debug,
    P: PairwiseMerge<T>,
{
    fn merge_pair(&self, a: &T, b: &T) -> Result<T, T::Error> {
        match self.inner.merge_pair(a, b) {
            Ok(merged) => {
                trace!(
                    first = ?a,
                    second = ?b,
                    merged = ?merged,
                    combined = combined(a, &merged),
                    "pairwise merge"
                );
                Ok(merged)
            }
            Err(e) => {
                trace!(first = ?a, second = ?b, "pairwise merge failed");
                Err(e)
            }
        }
    }
}
