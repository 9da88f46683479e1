use summa_types::Mergeable;

use crate::summary::Summary;

/// The summarization contract: reduce a sequence of items to a stable
/// sequence by repeated pairwise merging.
pub trait Summarizer<T: Mergeable> {
    /// Reduce `items` until no pair combines any further, or until the
    /// implementation's round bound is reached.
    ///
    /// Errors from the domain's combine operator are returned unchanged.
    fn merge(&self, items: Vec<T>) -> Result<Summary<T>, T::Error>;

    /// Combine a single ordered pair. Defaults to `a.combine(b)`.
    fn merge_pair(&self, a: &T, b: &T) -> Result<T, T::Error> {
        a.combine(b)
    }
}
