//! Closed integer intervals.
//!
//! Two intervals combine when they overlap or sit directly next to each
//! other (`[1, 3]` and `[4, 6]` become `[1, 6]`). An interval that already
//! covers the other answers with itself, which the engine reads as "no
//! merge"; the reverse pair then absorbs the smaller interval.

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use summa_merge::{FixpointEngine, Summary};
use summa_types::{Mergeable, NaturalOrder};

use crate::error::{DomainError, DomainResult};

/// A closed range `[start, end]` over `i64`.
///
/// Ordering: `start` → `end`. Serialized as a `[start, end]` pair;
/// deserialization rejects inverted bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Create an interval; `start` must not exceed `end`.
    pub fn new(start: i64, end: i64) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single-point interval.
    pub fn point(at: i64) -> Self {
        Self { start: at, end: at }
    }

    /// Lower bound (inclusive).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Upper bound (inclusive).
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers covered, saturating at `u64::MAX`.
    pub fn width(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Returns `true` if `value` lies inside the interval.
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if the intervals share at least one integer.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if the intervals overlap or are adjacent.
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= other.end.saturating_add(1) && other.start <= self.end.saturating_add(1)
    }

    /// The smallest interval covering both.
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Mergeable for Interval {
    type Error = Infallible;

    fn combine(&self, other: &Self) -> Result<Self, Self::Error> {
        if self.touches(other) {
            Ok(self.hull(other))
        } else {
            Ok(*self)
        }
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = DomainError;

    fn try_from((start, end): (i64, i64)) -> DomainResult<Self> {
        Self::new(start, end)
    }
}

impl From<Interval> for (i64, i64) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interval[{}, {}]", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Coalesce intervals into a sorted set of disjoint, non-adjacent ranges.
pub fn coalesce(intervals: Vec<Interval>) -> Summary<Interval> {
    let input = intervals.len();
    let summary = FixpointEngine::new(NaturalOrder).summarize(intervals);
    debug!(input, output = summary.len(), rounds = summary.rounds, "coalesced intervals");
    summary
}
