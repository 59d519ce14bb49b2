use super::RbSet;
use crate::rb_map::RbMap;

impl<T> RbSet<T> {
    /// Creates an empty set with room for at least `capacity` elements before the node storage
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbSet;
    ///
    /// let set: RbSet<i32> = RbSet::with_capacity(32);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RbSet {
            map: RbMap::with_capacity(capacity),
        }
    }
}

impl<T, C> RbSet<T, C> {
    /// Creates an empty set ordered by `cmp`, with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        RbSet {
            map: RbMap::with_capacity_and_comparator(capacity, cmp),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}
