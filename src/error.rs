/// Errors returned by the cursor-based operations of [`RbMap`](crate::RbMap) and
/// [`RbSet`](crate::RbSet).
///
/// Key-based operations never fail; they report absence with `Option` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// The operation needs an element but was given the end cursor.
    #[error("cursor is at the end position and does not refer to an element")]
    EndCursor,
    /// The element the cursor referred to has since been removed.
    #[error("cursor refers to an element that is no longer in the collection")]
    StaleCursor,
}

/// Shorthand for results of cursor-based operations.
pub type Result<T> = core::result::Result<T, Error>;
