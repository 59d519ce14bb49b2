use crate::raw::{Generation, Handle};

/// A position in an [`RbMap`](crate::RbMap) or [`RbSet`](crate::RbSet).
///
/// A cursor either refers to one element or is the *end* position. The end position is
/// circular: it sits one past the last element and one before the first, so stepping forward
/// from it yields the first element and stepping backward yields the last.
///
/// Cursors do not borrow the collection. A cursor whose element has been removed is *stale*;
/// handing it back to the collection returns [`Error::StaleCursor`](crate::Error::StaleCursor)
/// rather than touching whatever now occupies its storage, however often that storage has been
/// reused since. A cursor is only meaningful for the collection that produced it.
///
/// Erasing an element that has neighbours on both sides in the tree keeps that element's cursor
/// valid: the next element is moved into its position, so the cursor now refers to the next
/// element and cursors that referred to the next element go stale.
///
/// Two cursors are equal if they refer to the same element or are both the end position.
///
/// # Examples
///
/// ```
/// use redblack_index::RbSet;
///
/// let set = RbSet::from([10, 20, 30]);
/// let c = set.find(&20);
/// assert_eq!(set.get_at(c), Ok(&20));
/// assert_eq!(set.get_at(set.successor(c)?), Ok(&30));
/// assert!(set.find(&25).is_end());
/// # Ok::<(), redblack_index::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cursor {
    position: Position,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Position {
    Node { handle: Handle, generation: Generation },
    End,
}

impl Cursor {
    pub(crate) const END: Cursor = Cursor { position: Position::End };

    pub(crate) const fn at(handle: Handle, generation: Generation) -> Self {
        Cursor {
            position: Position::Node { handle, generation },
        }
    }

    pub(crate) const fn position(self) -> Position {
        self.position
    }

    /// Returns true if this is the end position.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self.position, Position::End)
    }
}
