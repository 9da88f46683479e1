//! Reference mergeable domains for Summa.
//!
//! Two concrete item types that plug into the fixpoint engine, each with
//! its own combine rule:
//!
//! - [`Interval`] -- closed integer ranges; overlapping or adjacent ranges
//!   coalesce.
//! - [`Fact`] -- attribute bags keyed by subject; facts about the same
//!   subject consolidate when their attributes do not contradict.

pub mod error;
pub mod fact;
pub mod interval;

pub use error::{DomainError, DomainResult};
pub use fact::{consolidate, Fact};
pub use interval::{coalesce, Interval};
