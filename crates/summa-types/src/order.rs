//! Ordering strategies.
//!
//! The engine sorts its working sequence before the first round and after
//! every round, so that output is deterministic for a given input multiset.
//! Which order to use belongs to whoever instantiates the engine; the engine
//! only needs an [`OrderingStrategy`] value.
//!
//! A strategy that leaves ties between structurally unequal items (for
//! example a [`ByKey`] on a non-unique field) produces output whose tie order
//! depends on hash-set iteration. Chain a tie-breaker with [`Then`] to make
//! the order total.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A comparator value over `T`.
pub trait OrderingStrategy<T> {
    /// Compare two items.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Return `items` as a newly ordered sequence (stable sort).
    fn sorted(&self, mut items: Vec<T>) -> Vec<T> {
        items.sort_by(|a, b| self.compare(a, b));
        items
    }
}

impl<T, F> OrderingStrategy<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders items by their own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> OrderingStrategy<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders items by a key extracted from each item.
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Create a key-based strategy.
    pub fn new(key: F) -> Self {
        Self {
            key,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<T, F, K> OrderingStrategy<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Shorthand for [`ByKey::new`].
pub fn by_key<F, K>(key: F) -> ByKey<F, K> {
    ByKey::new(key)
}

/// Inverts the wrapped strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<T, O: OrderingStrategy<T>> OrderingStrategy<T> for Reversed<O> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Lexicographic chain: the second strategy decides only on ties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Then<A, B>(pub A, pub B);

impl<T, A, B> OrderingStrategy<T> for Then<A, B>
where
    A: OrderingStrategy<T>,
    B: OrderingStrategy<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Row {
        group: u8,
        name: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { group: 2, name: "b" },
            Row { group: 1, name: "z" },
            Row { group: 2, name: "a" },
            Row { group: 1, name: "c" },
        ]
    }

    #[test]
    fn natural_order_sorts_ascending() {
        let sorted = NaturalOrder.sorted(vec![3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn closure_is_a_strategy() {
        let desc = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(desc.sorted(vec![1, 3, 2]), vec![3, 2, 1]);
    }

    #[test]
    fn by_key_is_stable_on_ties() {
        let sorted = by_key(|r: &Row| r.group).sorted(rows());
        let names: Vec<_> = sorted.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["z", "c", "b", "a"]);
    }

    #[test]
    fn then_breaks_ties() {
        let order = Then(by_key(|r: &Row| r.group), by_key(|r: &Row| r.name));
        let names: Vec<_> = order.sorted(rows()).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["c", "z", "a", "b"]);
    }

    #[test]
    fn reversed_flips_order() {
        let sorted = Reversed(NaturalOrder).sorted(vec![1, 3, 2]);
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    #[test]
    fn sorting_does_not_touch_callers_copy() {
        let original = vec![5, 4, 3];
        let sorted = NaturalOrder.sorted(original.clone());
        assert_eq!(original, vec![5, 4, 3]);
        assert_eq!(sorted, vec![3, 4, 5]);
    }

    proptest! {
        #[test]
        fn chained_total_order_is_permutation_invariant(mut xs in prop::collection::vec((0u8..4, any::<u16>()), 0..32)) {
            let order = Then(by_key(|p: &(u8, u16)| p.0), NaturalOrder);
            let first = order.sorted(xs.clone());
            xs.reverse();
            let second = order.sorted(xs);
            prop_assert_eq!(first, second);
        }
    }
}
