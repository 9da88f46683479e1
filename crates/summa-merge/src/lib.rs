//! Fixpoint merge engine for Summa.
//!
//! Reduces a collection of [`Mergeable`](summa_types::Mergeable) items by
//! trying every pairwise combination, round after round, until one more
//! round changes nothing. The result reports whether that fixpoint was
//! reached or the round bound cut the work short.
//!
//! # Key Types
//!
//! - [`Summarizer`] -- The `merge` / `merge_pair` contract
//! - [`FixpointEngine`] -- The bounded fixpoint loop
//! - [`PairwiseMerge`] / [`Combine`] / [`Traced`] -- Seam for overriding pairwise combination
//! - [`Summary`] / [`Convergence`] -- Reduced items plus how the call ended
//! - [`EngineConfig`] -- Round bound and exhaustion reporting
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//!
//! use summa_merge::FixpointEngine;
//! use summa_types::{Mergeable, NaturalOrder};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
//! struct Range(u32, u32);
//!
//! impl Mergeable for Range {
//!     type Error = Infallible;
//!
//!     fn combine(&self, other: &Self) -> Result<Self, Infallible> {
//!         if other.0 <= self.1 && self.0 <= other.1 {
//!             Ok(Range(self.0.min(other.0), self.1.max(other.1)))
//!         } else {
//!             Ok(self.clone())
//!         }
//!     }
//! }
//!
//! let engine = FixpointEngine::new(NaturalOrder);
//! let summary = engine.summarize(vec![Range(5, 8), Range(1, 3), Range(2, 6)]);
//! assert!(summary.is_converged());
//! assert_eq!(summary.items, vec![Range(1, 8)]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod pairwise;
pub mod summarizer;
pub mod summary;

pub use config::{EngineConfig, DEFAULT_MAX_ITERATIONS};
pub use engine::FixpointEngine;
pub use error::{MergeError, MergeResult};
pub use pairwise::{Combine, PairwiseMerge, Traced};
pub use summarizer::Summarizer;
pub use summary::{Convergence, Summary};
