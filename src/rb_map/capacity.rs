use super::RbMap;
use crate::compare::Natural;
use crate::raw::RawRbTree;

impl<K, V> RbMap<K, V> {
    /// Creates an empty map with room for at least `capacity` elements before the node storage
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbMap;
    ///
    /// let map: RbMap<i32, i32> = RbMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RbMap::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> RbMap<K, V, C> {
    /// Creates an empty map ordered by `cmp`, with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::{RbMap, Reverse};
    ///
    /// let mut map = RbMap::with_capacity_and_comparator(8, Reverse);
    /// map.extend([(1, "a"), (2, "b")]);
    /// assert_eq!(map.first_key_value(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        RbMap {
            raw: RawRbTree::with_capacity(capacity, cmp),
        }
    }

    /// Returns the number of elements the map can hold without reallocating.
    ///
    /// Slots freed by removals are reused before the storage grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
