//! Capability traits for Summa.
//!
//! This crate defines the two contracts every summarized item type is
//! measured against. The fixpoint engine in `summa-merge` and the reference
//! domains in `summa-domain` both depend on it.
//!
//! # Key Types
//!
//! - [`Mergeable`] -- Structural equality plus a pairwise `combine` operator
//! - [`OrderingStrategy`] -- Comparator value used to order working sequences
//! - [`NaturalOrder`], [`ByKey`], [`Reversed`], [`Then`] -- Stock strategies

pub mod mergeable;
pub mod order;

pub use mergeable::{combined, Mergeable};
pub use order::{by_key, ByKey, NaturalOrder, OrderingStrategy, Reversed, Then};
