use super::arena::Arena;
use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node; every rebalancing case comes in a left and a mirrored right form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A red-black tree node.
///
/// `left` and `right` are the owning edges of the tree; `parent` is a back-reference only.
/// The value lives in the tree's value arena and is reached through `value`.
#[derive(Clone)]
pub(crate) struct RbNode<K> {
    color: Color,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
    key: K,
    value: Handle,
}

impl<K> RbNode<K> {
    /// Creates a new red leaf hanging off `parent`.
    pub(crate) fn new(key: K, value: Handle, parent: Option<Handle>) -> Self {
        Self {
            color: Color::Red,
            parent,
            left: None,
            right: None,
            key,
            value,
        }
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn key_mut(&mut self) -> &mut K {
        &mut self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> Handle {
        self.value
    }

    /// Exchanges keys and value handles with `other`, leaving colors and links alone.
    pub(crate) fn swap_payload(&mut self, other: &mut RbNode<K>) {
        core::mem::swap(&mut self.key, &mut other.key);
        core::mem::swap(&mut self.value, &mut other.value);
    }

    /// Consumes the node, returning its key and value handle.
    pub(crate) fn into_payload(self) -> (K, Handle) {
        (self.key, self.value)
    }
}

// In-order navigation over the node links alone. None of these allocate or keep a stack; the
// parent back-references are enough to find the neighbours of any node.
impl<K> Arena<RbNode<K>> {
    /// Returns the leftmost node of the subtree rooted at `handle`.
    pub(crate) fn minimum(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.get(handle).left() {
            handle = left;
        }
        handle
    }

    /// Returns the rightmost node of the subtree rooted at `handle`.
    pub(crate) fn maximum(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.get(handle).right() {
            handle = right;
        }
        handle
    }

    /// Returns the in-order successor of `handle`, or `None` if it is the last node.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        self.neighbour(handle, Side::Right)
    }

    /// Returns the in-order predecessor of `handle`, or `None` if it is the first node.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.neighbour(handle, Side::Left)
    }

    fn neighbour(&self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.get(handle).child(side) {
            return Some(match side {
                Side::Right => self.minimum(child),
                Side::Left => self.maximum(child),
            });
        }

        // Climb while we are coming up from the `side` child; the first ancestor we reach from
        // the other side is the neighbour.
        let mut current = handle;
        let mut parent = self.get(current).parent();
        while let Some(p) = parent {
            if self.get(p).child(side) != Some(current) {
                break;
            }
            current = p;
            parent = self.get(p).parent();
        }
        parent
    }

    /// Returns which child of `parent` the node `child` is.
    ///
    /// `child` may be `None` (an absent child slot) as long as the other slot is occupied.
    pub(crate) fn side_of(&self, parent: Handle, child: Option<Handle>) -> Side {
        if self.get(parent).left() == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Color of a possibly absent node; absent children count as black.
    #[inline]
    pub(crate) fn color_of(&self, handle: Option<Handle>) -> Color {
        handle.map_or(Color::Black, |h| self.get(h).color())
    }

    #[inline]
    pub(crate) fn is_red(&self, handle: Option<Handle>) -> bool {
        self.color_of(handle) == Color::Red
    }
}
