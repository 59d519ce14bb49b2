use core::borrow::Borrow;

use super::RbSet;
use crate::compare::Compare;
use crate::cursor::Cursor;
use crate::error::Result;

/// Cursor access, with the same end and staleness rules as [`RbMap`](crate::RbMap)'s.
impl<T, C> RbSet<T, C> {
    /// Returns a cursor to the element equal to `value`, or the end cursor if there is none.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find<Q>(&self, value: &Q) -> Cursor
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.find(value)
    }

    /// Returns a cursor to the smallest element, or the end cursor if the set is empty.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.map.begin()
    }

    /// Returns the end cursor.
    #[must_use]
    pub fn end(&self) -> Cursor {
        self.map.end()
    }

    /// Returns a cursor to the element after `cursor`, wrapping through the end cursor.
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the element under `cursor` was removed.
    pub fn successor(&self, cursor: Cursor) -> Result<Cursor> {
        self.map.successor(cursor)
    }

    /// Returns a cursor to the element before `cursor`, wrapping through the end cursor.
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the element under `cursor` was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::RbSet;
    ///
    /// let set = RbSet::from([1, 2, 3]);
    /// let mut backwards = Vec::new();
    /// let mut cursor = set.predecessor(set.end())?;
    /// while !cursor.is_end() {
    ///     backwards.push(*set.get_at(cursor)?);
    ///     cursor = set.predecessor(cursor)?;
    /// }
    /// assert_eq!(backwards, [3, 2, 1]);
    /// # Ok::<(), redblack_index::Error>(())
    /// ```
    pub fn predecessor(&self, cursor: Cursor) -> Result<Cursor> {
        self.map.predecessor(cursor)
    }

    /// Moves `cursor` by `steps` elements, backward when `steps` is negative, wrapping through
    /// the end cursor.
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the element under `cursor` was removed.
    pub fn advance(&self, cursor: Cursor, steps: isize) -> Result<Cursor> {
        self.map.advance(cursor, steps)
    }

    /// Returns the element under `cursor`.
    ///
    /// # Errors
    ///
    /// [`Error::EndCursor`](crate::Error::EndCursor) for the end cursor,
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the element was removed.
    pub fn get_at(&self, cursor: Cursor) -> Result<&T> {
        self.map.get_at(cursor).map(|(k, ())| k)
    }

    /// Removes the element under `cursor` and returns a cursor to the element that preceded it,
    /// or the end cursor if the removed element was the smallest.
    ///
    /// # Errors
    ///
    /// [`Error::EndCursor`](crate::Error::EndCursor) for the end cursor,
    /// [`Error::StaleCursor`](crate::Error::StaleCursor) if the element was already removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_index::{Error, RbSet};
    ///
    /// let mut set = RbSet::from([1, 2, 3]);
    /// let before = set.erase(set.find(&2))?;
    /// assert_eq!(set.get_at(before), Ok(&1));
    /// assert_eq!(set.erase(set.end()), Err(Error::EndCursor));
    /// # Ok::<(), redblack_index::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn erase(&mut self, cursor: Cursor) -> Result<Cursor> {
        self.map.erase(cursor)
    }
}
