//! The combine contract.
//!
//! A [`Mergeable`] item can be asked to absorb another item of the same type.
//! The answer is encoded entirely in the returned value:
//!
//! - a value **unequal to `self`** is the union of both operands;
//! - a value **equal to `self`** means the pair did not merge and `other`
//!   must be kept unchanged.
//!
//! Returning the first operand is the only "nothing happened" signal the
//! engine understands. An operator that answers a non-mergeable pair with
//! some third value breaks convergence and leaves termination to the
//! engine's iteration bound.

use std::hash::Hash;

/// A value that supports structural equality and pairwise combination.
///
/// `Eq` and `Hash` must agree: the engine keeps per-round working sets in
/// hash sets keyed by structural equality.
pub trait Mergeable: Clone + Eq + Hash {
    /// Error raised by the domain's combine operator. Use
    /// [`std::convert::Infallible`] when combining cannot fail.
    type Error;

    /// Combine `self` with `other`.
    ///
    /// Returns the union of the two items, or a value equal to `self` when
    /// they cannot be merged.
    fn combine(&self, other: &Self) -> Result<Self, Self::Error>;
}

/// Returns `true` if `merged` records a real combination of `first` with
/// some other item, i.e. it differs from the first operand.
pub fn combined<T: Mergeable>(first: &T, merged: &T) -> bool {
    merged != first
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    /// Max-lattice over u32: combining keeps the larger value.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct High(u32);

    impl Mergeable for High {
        type Error = Infallible;

        fn combine(&self, other: &Self) -> Result<Self, Self::Error> {
            Ok(High(self.0.max(other.0)))
        }
    }

    #[test]
    fn combine_larger_value_is_a_merge() {
        let a = High(1);
        let merged = a.combine(&High(7)).unwrap();
        assert_eq!(merged, High(7));
        assert!(combined(&a, &merged));
    }

    #[test]
    fn returning_first_operand_signals_no_merge() {
        let a = High(9);
        let merged = a.combine(&High(2)).unwrap();
        assert_eq!(merged, a);
        assert!(!combined(&a, &merged));
    }

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Fragile;

    impl Mergeable for Fragile {
        type Error = String;

        fn combine(&self, _other: &Self) -> Result<Self, Self::Error> {
            Err("cannot combine".into())
        }
    }

    #[test]
    fn combine_errors_are_surfaced_verbatim() {
        let err = Fragile.combine(&Fragile).unwrap_err();
        assert_eq!(err, "cannot combine");
    }
}
