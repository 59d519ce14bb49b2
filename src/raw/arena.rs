use alloc::vec::Vec;

use super::handle::{Generation, Handle};

/// One storage cell of an [`Arena`].
#[derive(Clone)]
pub(crate) struct Slot<T> {
    generation: Generation,
    element: Option<T>,
}

/// Node-storage provider: hands out one slot per element and recycles released slots through a
/// free list.
///
/// Every release bumps the slot's [`Generation`], which is what lets cursors detect that the
/// element they pointed at is gone even after the slot has been reused. A slot whose generation
/// cannot be bumped again is retired: it stays vacant and never returns to the free list.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<Handle>,
    retired: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            retired: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            retired: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len() + self.retired)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(h) = self.free.pop() {
            // Reuse a released slot; its generation was bumped when it was released.
            self.slots[h.to_index()].element = Some(element);
            h
        } else {
            assert!(
                self.slots.len() < Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Slot {
                generation: Generation::FIRST,
                element: Some(element),
            });
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].element.as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].element.as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Returns the current generation of an occupied slot.
    #[inline]
    pub(crate) fn generation(&self, handle: Handle) -> Generation {
        let slot = &self.slots[handle.to_index()];
        debug_assert!(slot.element.is_some(), "`Arena::generation()` - `handle` is invalid!");
        slot.generation
    }

    /// Returns true if `handle` names an occupied slot that has not been released since
    /// `generation` was observed.
    #[inline]
    pub(crate) fn is_live(&self, handle: Handle, generation: Generation) -> bool {
        self.slots
            .get(handle.to_index())
            .is_some_and(|slot| slot.generation == generation && slot.element.is_some())
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let slot = &mut self.slots[handle.to_index()];
        let element = slot.element.take().expect("`Arena::take()` - `handle` is invalid!");
        match slot.generation.next() {
            Some(generation) => {
                slot.generation = generation;
                self.free.push(handle);
            }
            None => self.retired += 1,
        }
        element
    }

    pub(crate) fn free(&mut self, handle: Handle) {
        drop(self.take(handle));
    }

    /// Returns the base pointer of the slot storage, for iterators that hand out disjoint
    /// mutable borrows of individual elements.
    pub(crate) fn slots_mut_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }

    /// Returns a mutable reference to the element in slot `handle`.
    ///
    /// # Safety
    /// - `base` must come from [`Arena::slots_mut_ptr`] on an arena that has not been resized or
    ///   dropped since.
    /// - `handle` must name an occupied slot of that arena.
    /// - No other reference to that slot may be alive for `'a`.
    #[inline]
    pub(crate) unsafe fn element_mut<'a>(base: *mut Slot<T>, handle: Handle) -> &'a mut T {
        // SAFETY: caller guarantees `base` is the live slot buffer, the slot is in bounds and the
        // borrow is exclusive. Only this one slot is reborrowed.
        let slot = unsafe { &mut *base.add(handle.to_index()) };
        slot.element.as_mut().expect("`Arena::element_mut()` - `handle` is invalid!")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
    }

    #[test]
    fn released_slot_is_no_longer_live() {
        let mut arena: Arena<u32> = Arena::new();
        let a = arena.alloc(1);
        let generation = arena.generation(a);
        assert!(arena.is_live(a, generation));

        arena.free(a);
        assert!(!arena.is_live(a, generation));

        // The slot comes back through the free list with a new generation.
        let b = arena.alloc(2);
        assert_eq!(a, b);
        assert!(!arena.is_live(b, generation));
        assert!(arena.is_live(b, arena.generation(b)));
    }

    #[test]
    fn exhausted_slot_is_retired() {
        let mut arena: Arena<u32> = Arena::new();
        let a = arena.alloc(1);
        arena.slots[a.to_index()].generation = Generation::LAST;
        assert!(arena.is_live(a, Generation::LAST));

        assert_eq!(arena.take(a), 1);
        assert!(arena.is_empty());
        assert!(!arena.is_live(a, Generation::LAST));

        // The retired slot is never handed out again.
        let b = arena.alloc(2);
        assert_ne!(a, b);
        assert!(!arena.is_live(a, Generation::LAST));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn out_of_range_handle_is_not_live() {
        let arena: Arena<u32> = Arena::new();
        assert!(!arena.is_live(Handle::from_index(3), Generation::FIRST));
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is invalid!")]
    fn get_released_slot_panics() {
        let mut arena: Arena<u32> = Arena::new();
        let h = arena.alloc(7);
        arena.free(h);
        let _ = arena.get(h);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is at maximum capacity")]
    fn alloc_past_capacity_panics() {
        let mut arena: Arena<()> = Arena::new();
        for _ in 0..=Handle::MAX {
            arena.alloc(());
        }
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, Generation, u32)> = Vec::new();
            let mut released: Vec<(Handle, Generation)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.alloc(value);
                        model.push((handle, arena.generation(handle), value));
                    }
                    Operation::GetMut(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].2 = value;
                    }
                    Operation::Take(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let (handle, generation, expected) = model.swap_remove(index);
                        prop_assert_eq!(arena.take(handle), expected);
                        released.push((handle, generation));
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                prop_assert_eq!(arena.is_empty(), model.is_empty());

                for &(handle, generation, value) in &model {
                    prop_assert!(arena.is_live(handle, generation));
                    prop_assert_eq!(*arena.get(handle), value);
                }
                for &(handle, generation) in &released {
                    prop_assert!(!arena.is_live(handle, generation));
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        GetMut(usize, u32),
        Take(usize),
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::GetMut(which, value)),
            10 => any::<usize>().prop_map(Operation::Take),
        ]
    }
}
