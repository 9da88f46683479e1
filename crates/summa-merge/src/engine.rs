//! The fixpoint merge loop.
//!
//! [`FixpointEngine`] repeatedly runs a *round* over its working sequence
//! until one more round changes nothing or the configured round bound is
//! hit.
//!
//! # Rounds
//!
//! A round tries every ordered pair `(a, b)` of the current sequence:
//!
//! - `a == b`: `b` is kept as-is, no combine is attempted.
//! - the pair merges (`merged != a`): `merged` is kept and `a` is
//!   superseded; `b` is superseded too unless `merged == b`.
//! - the pair does not merge (`merged == a`): `b` is kept.
//!
//! The next sequence is `kept - superseded`, sorted with the engine's
//! ordering strategy. The call ends when that sequence equals the previous
//! one.
//!
//! # Complexity
//!
//! The combine operator is opaque, so every round costs `n * (n - 1)`
//! pairwise merges for `n` items, and a call costs at most
//! `O(n^2 * max_iterations)`. Do not hand the engine large sequences
//! expecting sub-quadratic behavior.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;

use tracing::{debug, info, warn};

use summa_types::{combined, Mergeable, OrderingStrategy};

use crate::config::EngineConfig;
use crate::error::MergeResult;
use crate::pairwise::{Combine, PairwiseMerge, Traced};
use crate::summarizer::Summarizer;
use crate::summary::{Convergence, Summary};

/// Reduces a sequence to a fixpoint of its pairwise merge operator.
///
/// The engine holds only its configuration: an ordering strategy, a
/// pairwise delegate, and the round bound. All working state lives inside
/// a single [`Summarizer::merge`] call, so one engine can serve concurrent
/// callers when `O` and `P` are `Sync`.
pub struct FixpointEngine<O, P = Combine> {
    order: O,
    pairwise: P,
    config: EngineConfig,
}

impl<O> FixpointEngine<O, Combine> {
    /// Create an engine with the default configuration.
    pub fn new(order: O) -> Self {
        Self {
            order,
            pairwise: Combine,
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(order: O, config: EngineConfig) -> MergeResult<Self> {
        config.validate()?;
        Ok(Self {
            order,
            pairwise: Combine,
            config,
        })
    }
}

impl<O, P> FixpointEngine<O, P> {
    /// Replace the pairwise delegate, keeping order and configuration.
    pub fn with_pairwise<Q>(self, pairwise: Q) -> FixpointEngine<O, Q> {
        FixpointEngine {
            order: self.order,
            pairwise,
            config: self.config,
        }
    }

    /// Record every pairwise merge as a `trace` event.
    pub fn traced(self) -> FixpointEngine<O, Traced<P>> {
        FixpointEngine {
            order: self.order,
            pairwise: Traced::new(self.pairwise),
            config: self.config,
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The round bound.
    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    /// The ordering strategy.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Merge items whose combine operator cannot fail.
    pub fn summarize<T>(&self, items: Vec<T>) -> Summary<T>
    where
        T: Mergeable<Error = Infallible>,
        O: OrderingStrategy<T>,
        P: PairwiseMerge<T>,
    {
        match self.merge(items) {
            Ok(summary) => summary,
            Err(never) => match never {},
        }
    }

    /// Run one round over `current` and return the sorted survivors.
    fn reduce_round<T>(
        &self,
        current: &[T],
        combine_calls: &mut u64,
    ) -> Result<Vec<T>, T::Error>
    where
        T: Mergeable,
        O: OrderingStrategy<T>,
        P: PairwiseMerge<T>,
    {
        let mut kept: HashSet<T> = HashSet::with_capacity(current.len());
        let mut superseded: HashSet<T> = HashSet::new();

        for a in current {
            for b in current {
                if a == b {
                    kept.insert(b.clone());
                    continue;
                }

                let merged = self.merge_pair(a, b)?;
                *combine_calls += 1;

                if combined(a, &merged) {
                    superseded.insert(a.clone());
                    if merged != *b {
                        superseded.insert(b.clone());
                    }
                    kept.insert(merged);
                } else {
                    kept.insert(b.clone());
                }
            }
        }

        let kept_len = kept.len();
        let next: Vec<T> = kept
            .into_iter()
            .filter(|item| !superseded.contains(item))
            .collect();
        debug!(
            kept = kept_len,
            superseded = superseded.len(),
            survivors = next.len(),
            "merge round reduced"
        );

        Ok(self.order.sorted(next))
    }
}

impl<T, O, P> Summarizer<T> for FixpointEngine<O, P>
where
    T: Mergeable,
    O: OrderingStrategy<T>,
    P: PairwiseMerge<T>,
{
    fn merge(&self, items: Vec<T>) -> Result<Summary<T>, T::Error> {
        let max_iterations = self.config.max_iterations;
        debug!(items = items.len(), max_iterations, "fixpoint merge started");

        let mut current = self.order.sorted(items);
        let mut last_stable = current.clone();
        let mut combine_calls = 0u64;
        let mut round = 0usize;

        while round < max_iterations {
            let next = self.reduce_round(&current, &mut combine_calls)?;
            debug!(round, before = current.len(), after = next.len(), "merge round complete");

            if next.len() == current.len() && next == last_stable {
                info!(
                    rounds = round + 1,
                    items = next.len(),
                    combine_calls,
                    "fixpoint reached"
                );
                return Ok(Summary {
                    items: next,
                    convergence: Convergence::Converged,
                    rounds: round + 1,
                    combine_calls,
                });
            }

            last_stable = next.clone();
            current = next;
            round += 1;
        }

        if self.config.warn_on_exhaustion {
            warn!(
                rounds = round,
                items = current.len(),
                combine_calls,
                "round bound reached before a fixpoint; returning partial reduction"
            );
        }

        Ok(Summary {
            items: current,
            convergence: Convergence::Exhausted,
            rounds: round,
            combine_calls,
        })
    }

    fn merge_pair(&self, a: &T, b: &T) -> Result<T, T::Error> {
        self.pairwise.merge_pair(a, b)
    }
}

impl<O, P> fmt::Debug for FixpointEngine<O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixpointEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
