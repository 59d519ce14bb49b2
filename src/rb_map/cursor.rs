use core::borrow::Borrow;

use super::RbMap;
use crate::compare::Compare;
use crate::cursor::Cursor;
use crate::error::Result;

impl<K, V, C> RbMap<K, V, C> {
    /// Returns a cursor to the entry whose key is equivalent to `key`, or the end cursor if there
    /// is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbMap;
    ///
    /// let map = RbMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.get_at(map.find(&2)), Ok((&2, &"b")));
    /// assert_eq!(map.find(&3), map.end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.raw.find(key)
    }

    /// Returns a cursor to the entry with the smallest key, or the end cursor if the map is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.raw.cursor(self.raw.first())
    }

    /// Returns the end cursor.
    ///
    /// Stepping forward from it reaches the first entry, stepping backward the last.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Returns a cursor to the entry after `cursor`.
    ///
    /// The last entry is followed by the end cursor, which is in turn followed by the first
    /// entry.
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the entry under `cursor` was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbMap;
    ///
    /// let map = RbMap::from([(1, "a"), (2, "b")]);
    /// let second = map.successor(map.begin())?;
    /// assert_eq!(map.get_at(second)?, (&2, &"b"));
    /// assert!(map.successor(second)?.is_end());
    /// assert_eq!(map.successor(map.end())?, map.begin());
    /// # Ok::<(), redblack_index::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, amortized O(1) over a full walk.
    pub fn successor(&self, cursor: Cursor) -> Result<Cursor> {
        self.raw.next_cursor(cursor)
    }

    /// Returns a cursor to the entry before `cursor`.
    ///
    /// The first entry is preceded by the end cursor, which is in turn preceded by the last
    /// entry.
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the entry under `cursor` was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbMap;
    ///
    /// let map = RbMap::from([(1, "a"), (2, "b")]);
    /// let last = map.predecessor(map.end())?;
    /// assert_eq!(map.get_at(last)?, (&2, &"b"));
    /// assert!(map.predecessor(map.begin())?.is_end());
    /// # Ok::<(), redblack_index::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, amortized O(1) over a full walk.
    pub fn predecessor(&self, cursor: Cursor) -> Result<Cursor> {
        self.raw.prev_cursor(cursor)
    }

    /// Moves `cursor` by `steps` entries, forward for positive counts and backward for negative
    /// ones. The end cursor counts as one position, so a walk wraps around as with
    /// [`successor`](RbMap::successor) and [`predecessor`](RbMap::predecessor).
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the entry under `cursor` was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbMap;
    ///
    /// let map = RbMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// assert_eq!(map.get_at(map.advance(map.begin(), 2)?)?, (&3, &"c"));
    /// assert_eq!(map.get_at(map.advance(map.end(), -3)?)?, (&1, &"a"));
    /// assert!(map.advance(map.begin(), 3)?.is_end());
    /// # Ok::<(), redblack_index::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(|steps| log n)
    pub fn advance(&self, cursor: Cursor, steps: isize) -> Result<Cursor> {
        self.raw.advance_cursor(cursor, steps)
    }

    /// Returns the entry under `cursor`.
    ///
    /// # Errors
    ///
    /// [`Error::EndCursor`](crate::Error::EndCursor) for the end cursor,
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the entry was removed.
    pub fn get_at(&self, cursor: Cursor) -> Result<(&K, &V)> {
        let handle = self.raw.resolve_element(cursor)?;
        Ok(self.raw.entry(handle))
    }

    /// Returns the entry under `cursor` with a mutable reference to its value.
    ///
    /// # Errors
    ///
    /// As for [`get_at`](RbMap::get_at).
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbMap;
    ///
    /// let mut map = RbMap::from([(1, 10)]);
    /// let (_, value) = map.get_at_mut(map.begin())?;
    /// *value += 1;
    /// assert_eq!(map[&1], 11);
    /// # Ok::<(), redblack_index::Error>(())
    /// ```
    pub fn get_at_mut(&mut self, cursor: Cursor) -> Result<(&K, &mut V)> {
        let handle = self.raw.resolve_element(cursor)?;
        Ok(self.raw.entry_mut(handle))
    }

    /// Removes the entry under `cursor` and returns a cursor to the entry that preceded it, or
    /// the end cursor if the removed entry was the first.
    ///
    /// Stepping forward from the returned cursor reaches the entry that followed the removed one,
    /// so a loop that erases while walking forward never skips an entry.
    ///
    /// `cursor` itself goes stale unless the removed entry had neighbours on both sides in the
    /// tree; see [`Cursor`] for how the next entry then moves into its position.
    ///
    /// # Errors
    ///
    /// [`Error::EndCursor`](crate::Error::EndCursor) for the end cursor,
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the entry was already removed. The
    /// map is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbMap;
    ///
    /// let mut map: RbMap<_, _> = (1..=6).map(|k| (k, k * 10)).collect();
    ///
    /// // Drop every entry with an odd key.
    /// let mut cursor = map.begin();
    /// while !cursor.is_end() {
    ///     let (&key, _) = map.get_at(cursor)?;
    ///     cursor = if key % 2 == 1 { map.erase(cursor)? } else { cursor };
    ///     cursor = map.successor(cursor)?;
    /// }
    /// assert_eq!(map.into_keys().collect::<Vec<_>>(), [2, 4, 6]);
    /// # Ok::<(), redblack_index::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn erase(&mut self, cursor: Cursor) -> Result<Cursor> {
        let (previous, _) = self.raw.erase(cursor)?;
        Ok(previous)
    }
}
