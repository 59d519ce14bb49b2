/// A strict weak ordering used to arrange the keys of an [`RbMap`](crate::RbMap) or
/// [`RbSet`](crate::RbSet).
///
/// `less` must be irreflexive and transitive, and "neither `less(a, b)` nor `less(b, a)`" must
/// behave as an equivalence. Two keys for which neither is less than the other are the *same*
/// key as far as the collection is concerned.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator:
///
/// ```
/// use redblack_index::RbSet;
///
/// let mut set = RbSet::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
/// set.insert(-3);
/// set.insert(2);
/// set.insert(3); // same key as -3 under this ordering
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, 3]);
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// The ordering given by [`Ord`]. This is the default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The reverse of the ordering given by [`Ord`].
///
/// ```
/// use redblack_index::{RbSet, Reverse};
///
/// let set: RbSet<_, _> = {
///     let mut set = RbSet::with_comparator(Reverse);
///     set.extend([1, 3, 2]);
///     set
/// };
/// assert_eq!(set.first(), Some(&3));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

impl<T: ?Sized + Ord> Compare<T> for Reverse {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
