use alloc::vec::Vec;
use core::borrow::Borrow;
use core::marker::PhantomData;
use core::mem;

use smallvec::{SmallVec, smallvec};

use super::arena::{Arena, Slot};
use super::handle::Handle;
use super::node::{Color, RbNode, Side};
use crate::compare::Compare;
use crate::cursor::{Cursor, Position};
use crate::error::{Error, Result};

/// Explicit stack for whole-tree walks. Red-black height is at most `2 * log2(n + 1)`, so the
/// inline part covers every tree a `u32` handle can address.
type WalkStack<T> = SmallVec<[T; 64]>;

/// The red-black tree engine backing `RbMap` and `RbSet`.
///
/// Keys live in the nodes, values in a parallel arena so that mutable value iteration never
/// aliases the links being followed. The root and the cached first/last nodes are plain fields;
/// there is no sentinel node.
#[derive(Clone)]
pub(crate) struct RawRbTree<K, V, C> {
    nodes: Arena<RbNode<K>>,
    values: Arena<V>,
    root: Option<Handle>,
    /// Leftmost node, for O(1) `begin`.
    first: Option<Handle>,
    /// Rightmost node, for O(1) access to the last element.
    last: Option<Handle>,
    len: usize,
    cmp: C,
}

/// Shared view of a tree's storage, independent of the comparator type.
pub(crate) struct TreeRef<'a, K, V> {
    nodes: &'a Arena<RbNode<K>>,
    values: &'a Arena<V>,
}

impl<K, V> Clone for TreeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for TreeRef<'_, K, V> {}

impl<'a, K, V> TreeRef<'a, K, V> {
    #[inline]
    pub(crate) fn entry(self, handle: Handle) -> (&'a K, &'a V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get(node.value()))
    }

    #[inline]
    pub(crate) fn successor(self, handle: Handle) -> Option<Handle> {
        self.nodes.successor(handle)
    }

    #[inline]
    pub(crate) fn predecessor(self, handle: Handle) -> Option<Handle> {
        self.nodes.predecessor(handle)
    }
}

/// View of a tree's storage that hands out mutable borrows of individual values.
pub(crate) struct TreeMut<'a, K, V> {
    nodes: &'a Arena<RbNode<K>>,
    values: *mut Slot<V>,
    _marker: PhantomData<&'a mut V>,
}

impl<'a, K, V> TreeMut<'a, K, V> {
    /// Returns the entry stored at `handle` with a mutable value.
    ///
    /// # Safety
    /// `handle` must be a live node of the tree and must not be passed twice over `'a`.
    #[inline]
    pub(crate) unsafe fn entry_mut(&self, handle: Handle) -> (&'a K, &'a mut V) {
        let node = self.nodes.get(handle);
        // SAFETY: `values` was taken from the tree's value arena under a `&'a mut` borrow, the
        // arena cannot be resized while that borrow lives, and the caller never revisits a node.
        let value = unsafe { Arena::element_mut(self.values, node.value()) };
        (node.key(), value)
    }

    #[inline]
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        self.nodes.successor(handle)
    }

    #[inline]
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.nodes.predecessor(handle)
    }
}

impl<K, V, C> RawRbTree<K, V, C> {
    /// Creates a new, empty tree ordered by `cmp`.
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            first: None,
            last: None,
            len: 0,
            cmp,
        }
    }

    /// Creates a new, empty tree with room for `capacity` elements.
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            root: None,
            first: None,
            last: None,
            len: 0,
            cmp,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) const fn first(&self) -> Option<Handle> {
        self.first
    }

    pub(crate) const fn last(&self) -> Option<Handle> {
        self.last
    }

    pub(crate) fn view(&self) -> TreeRef<'_, K, V> {
        TreeRef {
            nodes: &self.nodes,
            values: &self.values,
        }
    }

    pub(crate) fn view_mut(&mut self) -> TreeMut<'_, K, V> {
        TreeMut {
            nodes: &self.nodes,
            values: self.values.slots_mut_ptr(),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        self.view().entry(handle)
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get_mut(node.value()))
    }

    // ─── Cursors ────────────────────────────────────────────────────────────

    /// Returns a cursor for `handle`, or the end cursor for `None`.
    pub(crate) fn cursor(&self, handle: Option<Handle>) -> Cursor {
        handle.map_or(Cursor::END, |h| Cursor::at(h, self.nodes.generation(h)))
    }

    /// Maps a cursor back to a node; `Ok(None)` is the end position.
    pub(crate) fn resolve(&self, cursor: Cursor) -> Result<Option<Handle>> {
        match cursor.position() {
            Position::End => Ok(None),
            Position::Node { handle, generation } if self.nodes.is_live(handle, generation) => Ok(Some(handle)),
            Position::Node { handle, .. } => {
                log::debug!("rejecting stale cursor for slot {}", handle.to_index());
                Err(Error::StaleCursor)
            }
        }
    }

    /// Maps a cursor back to a node, rejecting the end position.
    pub(crate) fn resolve_element(&self, cursor: Cursor) -> Result<Handle> {
        self.resolve(cursor)?.ok_or_else(|| {
            log::debug!("rejecting end cursor where an element is required");
            Error::EndCursor
        })
    }

    /// Steps a cursor forward; the end position wraps to the first element.
    pub(crate) fn next_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        let next = match self.resolve(cursor)? {
            Some(h) => self.nodes.successor(h),
            None => self.first,
        };
        Ok(self.cursor(next))
    }

    /// Steps a cursor backward; the end position wraps to the last element.
    pub(crate) fn prev_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        let prev = match self.resolve(cursor)? {
            Some(h) => self.nodes.predecessor(h),
            None => self.last,
        };
        Ok(self.cursor(prev))
    }

    /// Steps a cursor `steps` positions, backward when negative, passing through the end position
    /// like single steps do.
    pub(crate) fn advance_cursor(&self, mut cursor: Cursor, steps: isize) -> Result<Cursor> {
        // Validate even when there is nothing to step.
        self.resolve(cursor)?;
        for _ in 0..steps.unsigned_abs() {
            cursor = if steps > 0 { self.next_cursor(cursor)? } else { self.prev_cursor(cursor)? };
        }
        Ok(cursor)
    }

    /// Removes the element at `cursor`, returning it together with a cursor to the element that
    /// preceded it (the end cursor if it was the first element).
    pub(crate) fn erase(&mut self, cursor: Cursor) -> Result<(Cursor, (K, V))> {
        let handle = self.resolve_element(cursor)?;
        let previous = self.nodes.predecessor(handle);
        let entry = self.remove_at(handle);
        Ok((self.cursor(previous), entry))
    }

    // ─── Structural operations ──────────────────────────────────────────────

    /// Unlinks the element stored at `pos` and returns it.
    ///
    /// If `pos` has two children, its in-order successor is the node actually released and its
    /// payload moves into `pos`, so `pos` stays valid (now holding the next element) while
    /// handles to the successor go stale.
    pub(crate) fn remove_at(&mut self, pos: Handle) -> (K, V) {
        if self.first == Some(pos) {
            self.first = self.nodes.successor(pos);
        }
        if self.last == Some(pos) {
            self.last = self.nodes.predecessor(pos);
        }

        let node = self.nodes.get(pos);
        let victim = match (node.left(), node.right()) {
            (Some(_), Some(right)) => self.nodes.minimum(right),
            _ => pos,
        };

        let victim_node = self.nodes.get(victim);
        let replacement = victim_node.left().or(victim_node.right());
        let gap_parent = victim_node.parent();
        let victim_color = victim_node.color();

        if let Some(r) = replacement {
            self.set_parent(r, gap_parent);
        }
        self.replace_child(gap_parent, victim, replacement);

        let mut removed = self.nodes.take(victim);
        if victim != pos {
            self.nodes.get_mut(pos).swap_payload(&mut removed);
            // The successor's element now lives in `pos`.
            if self.last == Some(victim) {
                self.last = Some(pos);
            }
        }

        // Removing a red node never changes a black count.
        if victim_color == Color::Black {
            self.delete_fixup(gap_parent, replacement);
        }

        self.len -= 1;
        let (key, value) = removed.into_payload();
        (key, self.values.take(value))
    }

    /// Releases every element.
    pub(crate) fn clear(&mut self) {
        log::trace!("clearing tree of {} elements", self.len);

        let mut stack: WalkStack<Handle> = self.root.into_iter().collect();
        while let Some(h) = stack.pop() {
            let node = self.nodes.take(h);
            stack.extend(node.left());
            stack.extend(node.right());
            self.values.free(node.value());
        }
        debug_assert!(self.nodes.is_empty() && self.values.is_empty());

        self.root = None;
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    /// Moves every element out in key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len);
        let mut current = self.first;
        while let Some(h) = current {
            order.push(h);
            current = self.nodes.successor(h);
        }

        let entries = order
            .into_iter()
            .map(|h| {
                let (key, value) = self.nodes.take(h).into_payload();
                (key, self.values.take(value))
            })
            .collect();

        self.root = None;
        self.first = None;
        self.last = None;
        self.len = 0;
        entries
    }

    /// Keeps only the elements for which `keep` returns true, visiting them in key order.
    pub(crate) fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut current = self.first;
        while let Some(h) = current {
            let (key, value) = self.entry_mut(h);
            if keep(key, value) {
                current = self.nodes.successor(h);
                continue;
            }

            // Erasure may move the next element into `h`, so continue from the survivor before it.
            let previous = self.nodes.predecessor(h);
            drop(self.remove_at(h));
            current = match previous {
                Some(p) => self.nodes.successor(p),
                None => self.first,
            };
        }
    }

    // ─── Diagnostics ────────────────────────────────────────────────────────

    /// Checks the coloring rules: the root is black, no red node has a red child, and every path
    /// from the root to an absent child passes the same number of black nodes.
    pub(crate) fn is_rb_tree(&self) -> bool {
        let Some(root) = self.root else {
            return true;
        };
        if self.nodes.get(root).color() != Color::Black {
            return false;
        }

        let mut current = self.first;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            if node.color() == Color::Red && (self.nodes.is_red(node.left()) || self.nodes.is_red(node.right())) {
                return false;
            }
            current = self.nodes.successor(h);
        }

        // Reference count along the leftmost path; the absent child at its end counts as black.
        let mut expected = 1;
        let mut current = Some(root);
        while let Some(h) = current {
            if self.nodes.get(h).color() == Color::Black {
                expected += 1;
            }
            current = self.nodes.get(h).left();
        }

        let mut stack: WalkStack<(Handle, usize)> = smallvec![(root, 0)];
        while let Some((h, mut blacks)) = stack.pop() {
            let node = self.nodes.get(h);
            if node.color() == Color::Black {
                blacks += 1;
            }
            for child in [node.left(), node.right()] {
                match child {
                    Some(c) => stack.push((c, blacks)),
                    None if blacks + 1 != expected => return false,
                    None => {}
                }
            }
        }
        true
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: WalkStack<(Handle, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((h, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(h);
            stack.extend([node.left(), node.right()].into_iter().flatten().map(|c| (c, depth + 1)));
        }
        height
    }

    // ─── Link helpers ───────────────────────────────────────────────────────

    #[inline]
    fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).parent()
    }

    #[inline]
    fn set_parent(&mut self, handle: Handle, parent: Option<Handle>) {
        self.nodes.get_mut(handle).set_parent(parent);
    }

    #[inline]
    fn child(&self, handle: Handle, side: Side) -> Option<Handle> {
        self.nodes.get(handle).child(side)
    }

    #[inline]
    fn set_child(&mut self, handle: Handle, side: Side, child: Option<Handle>) {
        self.nodes.get_mut(handle).set_child(side, child);
    }

    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        self.nodes.get_mut(handle).set_color(color);
    }

    /// Points whatever referred to `old` from above (its parent, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.nodes.side_of(p, Some(old));
                self.set_child(p, side, new);
            }
        }
    }

    /// Rotates `pivot` down towards `side`; its child on the opposite side takes its place.
    ///
    /// `rotate(z, Side::Left)` is the classic left rotation around `z`.
    fn rotate(&mut self, pivot: Handle, side: Side) {
        let other = side.opposite();
        let riser = self
            .child(pivot, other)
            .expect("`RawRbTree::rotate()` - `pivot` has no child to rotate up!");

        let inner = self.child(riser, side);
        self.set_child(pivot, other, inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(pivot));
        }

        let parent = self.parent(pivot);
        self.set_parent(riser, parent);
        self.replace_child(parent, pivot, Some(riser));

        self.set_child(riser, side, Some(pivot));
        self.set_parent(pivot, Some(riser));
    }

    /// Restores the coloring rules after `node` was linked in red.
    ///
    /// At any point there is at most one red-red violation, between `node` and its parent.
    fn insert_fixup(&mut self, mut node: Handle) {
        while let Some(mut parent) = self.parent(node) {
            if self.nodes.get(parent).color() == Color::Black {
                break;
            }
            let grandparent = self
                .parent(parent)
                .expect("`RawRbTree::insert_fixup()` - red `parent` is the root!");
            let side = self.nodes.side_of(grandparent, Some(parent));

            let uncle = self.child(grandparent, side.opposite());
            if let Some(uncle) = uncle.filter(|&u| self.nodes.get(u).color() == Color::Red) {
                // Red uncle: push the blackness down from the grandparent and retry higher up.
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.child(parent, side.opposite()) == Some(node) {
                // Inner grandchild: rotate it to the outside first.
                log::trace!("insert fixup: rotating inner grandchild {}", node.to_index());
                self.rotate(parent, side);
                mem::swap(&mut node, &mut parent);
            }

            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Restores the black counts after a black node was spliced out from under `parent`,
    /// leaving `node` (possibly absent) in its place one black short.
    fn delete_fixup(&mut self, mut parent: Option<Handle>, mut node: Option<Handle>) {
        while node != self.root && !self.nodes.is_red(node) {
            let Some(p) = parent else {
                break;
            };
            let side = self.nodes.side_of(p, node);
            let other = side.opposite();
            let sibling_of = |tree: &Self| {
                tree.child(p, other)
                    .expect("`RawRbTree::delete_fixup()` - short subtree has no sibling!")
            };

            let mut sibling = sibling_of(self);
            if self.nodes.get(sibling).color() == Color::Red {
                // Red sibling: rotate it above the parent so the new sibling is black.
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                sibling = sibling_of(self);
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, other);
            if !self.nodes.is_red(near) && !self.nodes.is_red(far) {
                // Black sibling with black children: shorten the sibling too and move up.
                self.set_color(sibling, Color::Red);
                node = Some(p);
                parent = self.parent(p);
                continue;
            }

            if !self.nodes.is_red(far) {
                // Only the near nephew is red: rotate it into the far position.
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, other);
                sibling = sibling_of(self);
            }

            // Far nephew is red: one rotation at the parent pays back the missing black.
            let parent_color = self.nodes.get(p).color();
            self.set_color(sibling, parent_color);
            self.set_color(p, Color::Black);
            if let Some(far) = self.child(sibling, other) {
                self.set_color(far, Color::Black);
            }
            log::trace!("delete fixup: rotating at {}", p.to_index());
            self.rotate(p, side);
            break;
        }

        if let Some(node) = node {
            self.set_color(node, Color::Black);
        }
    }

    // ─── Lookup and insertion ───────────────────────────────────────────────

    /// Finds the node whose key is equivalent to `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            let node_key: &Q = node.key().borrow();
            current = if self.cmp.less(key, node_key) {
                node.left()
            } else if self.cmp.less(node_key, key) {
                node.right()
            } else {
                return Some(h);
            };
        }
        None
    }

    /// Returns a cursor to the element equivalent to `key`, or the end cursor.
    pub(crate) fn find<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.cursor(self.search(key))
    }

    /// Inserts `key` and `value`.
    ///
    /// If an equivalent key is already present, its node keeps its place and both key and value
    /// are overwritten; the displaced pair is returned and the length does not change.
    pub(crate) fn insert(&mut self, key: K, value: V) -> (Handle, Option<(K, V)>)
    where
        C: Compare<K>,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            if self.cmp.less(&key, node.key()) {
                side = Side::Left;
            } else if self.cmp.less(node.key(), &key) {
                side = Side::Right;
            } else {
                let value_handle = node.value();
                let old_key = mem::replace(self.nodes.get_mut(h).key_mut(), key);
                let old_value = mem::replace(self.values.get_mut(value_handle), value);
                return (h, Some((old_key, old_value)));
            }
            parent = Some(h);
            current = node.child(side);
        }

        let value = self.values.alloc(value);
        let handle = self.nodes.alloc(RbNode::new(key, value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(p) => self.set_child(p, side, Some(handle)),
        }
        self.insert_fixup(handle);

        let key = self.nodes.get(handle).key();
        if self.first.is_none_or(|first| self.cmp.less(key, self.nodes.get(first).key())) {
            self.first = Some(handle);
        }
        if self.last.is_none_or(|last| self.cmp.less(self.nodes.get(last).key(), key)) {
            self.last = Some(handle);
        }
        self.len += 1;
        (handle, None)
    }
}
