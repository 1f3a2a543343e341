use std::mem::MaybeUninit;
use std::ptr;

/// One storage cell of a [`FixedPool`][crate::FixedPool].
///
/// A slot is a block of uninitialized storage sized and aligned for one `T`,
/// plus an occupancy flag. The flag is the sole source of truth for whether
/// the storage currently holds a live item: it is set only after the item has
/// been fully written and cleared only after the item has been dropped, so a
/// slot is never observable in a partially-constructed state.
///
/// The slot owns the item it holds. Dropping an occupied slot drops the item.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    value: MaybeUninit<T>,

    occupied: bool,
}

impl<T> Slot<T> {
    /// Creates a vacant slot. The storage is uninitialized until an item is inserted.
    #[must_use]
    pub(crate) const fn vacant() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    #[must_use]
    pub(crate) fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Writes an item into the slot's storage and marks the slot occupied.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already occupied. The pool's vacant-slot scan
    /// never selects an occupied slot, so hitting this is an internal logic error.
    pub(crate) fn insert(&mut self, value: T) -> &mut T {
        assert!(
            !self.occupied,
            "attempted to insert into an occupied slot"
        );

        let item = self.value.write(value);
        self.occupied = true;

        item
    }

    /// Drops the item in place and marks the slot vacant.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant. Callers check occupancy before calling.
    pub(crate) fn remove(&mut self) {
        assert!(self.occupied, "attempted to remove from a vacant slot");

        // Clear the flag first so the slot is vacant even if the item's drop panics.
        self.occupied = false;

        // SAFETY: The slot was occupied, so the storage holds an initialized item
        // that no one has dropped yet (occupancy is cleared whenever an item is dropped).
        unsafe {
            self.value.assume_init_drop();
        }
    }

    /// # Panics
    ///
    /// Panics if the slot is vacant. Callers check occupancy before calling.
    #[must_use]
    pub(crate) fn value(&self) -> &T {
        assert!(self.occupied, "attempted to read a vacant slot");

        // SAFETY: Guarded by the occupancy assertion above - the storage holds
        // an initialized item.
        unsafe { self.value.assume_init_ref() }
    }

    /// # Panics
    ///
    /// Panics if the slot is vacant. Callers check occupancy before calling.
    #[must_use]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        assert!(self.occupied, "attempted to read a vacant slot");

        // SAFETY: Guarded by the occupancy assertion above - the storage holds
        // an initialized item.
        unsafe { self.value.assume_init_mut() }
    }

    /// Whether the slot is occupied and its storage is at the given address.
    ///
    /// This is how the pool resolves an item reference back to a slot index:
    /// an item lives inside the pool if and only if its address equals the
    /// address of some occupied slot's storage.
    #[must_use]
    pub(crate) fn holds(&self, item: *const T) -> bool {
        self.occupied && ptr::eq(self.value.as_ptr(), item)
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        if self.occupied {
            // SAFETY: The slot is occupied, so the storage holds an initialized
            // item that has not been dropped yet.
            unsafe {
                self.value.assume_init_drop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn starts_vacant() {
        let slot = Slot::<u32>::vacant();

        assert!(!slot.is_occupied());
    }

    #[test]
    fn insert_then_read_back() {
        let mut slot = Slot::<u32>::vacant();

        let value = slot.insert(42);
        assert_eq!(*value, 42);

        assert!(slot.is_occupied());
        assert_eq!(*slot.value(), 42);
    }

    #[test]
    fn remove_vacates() {
        let mut slot = Slot::<u32>::vacant();

        _ = slot.insert(42);
        slot.remove();

        assert!(!slot.is_occupied());
    }

    #[test]
    #[should_panic]
    fn insert_into_occupied_panics() {
        let mut slot = Slot::<u32>::vacant();

        _ = slot.insert(42);
        _ = slot.insert(43);
    }

    #[test]
    #[should_panic]
    fn remove_vacant_panics() {
        let mut slot = Slot::<u32>::vacant();

        slot.remove();
    }

    #[test]
    #[should_panic]
    fn read_vacant_panics() {
        let slot = Slot::<u32>::vacant();

        _ = slot.value();
    }

    #[test]
    fn holds_matches_own_storage_only() {
        let mut slot = Slot::<u32>::vacant();
        let other = 42_u32;

        let item: *const u32 = slot.insert(42);

        assert!(slot.holds(item));
        assert!(!slot.holds(&raw const other));
    }

    #[test]
    fn holds_is_false_when_vacant() {
        let mut slot = Slot::<u32>::vacant();

        let item: *const u32 = slot.insert(42);
        slot.remove();

        assert!(!slot.holds(item));
    }

    #[test]
    fn drops_item_on_remove() {
        struct Droppable {
            dropped: Rc<Cell<bool>>,
        }

        impl Drop for Droppable {
            fn drop(&mut self) {
                self.dropped.set(true);
            }
        }

        let dropped = Rc::new(Cell::new(false));
        let mut slot = Slot::<Droppable>::vacant();

        _ = slot.insert(Droppable {
            dropped: Rc::clone(&dropped),
        });

        assert!(!dropped.get());
        slot.remove();
        assert!(dropped.get());
    }

    #[test]
    fn drops_item_when_dropped_occupied() {
        struct Droppable {
            dropped: Rc<Cell<bool>>,
        }

        impl Drop for Droppable {
            fn drop(&mut self) {
                self.dropped.set(true);
            }
        }

        let dropped = Rc::new(Cell::new(false));

        {
            let mut slot = Slot::<Droppable>::vacant();
            _ = slot.insert(Droppable {
                dropped: Rc::clone(&dropped),
            });
        }

        assert!(dropped.get());
    }

    #[test]
    fn vacated_slot_does_not_double_drop() {
        struct DropCounter {
            drops: Rc<Cell<usize>>,
        }

        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.drops.set(self.drops.get().wrapping_add(1));
            }
        }

        let drops = Rc::new(Cell::new(0));

        {
            let mut slot = Slot::<DropCounter>::vacant();
            _ = slot.insert(DropCounter {
                drops: Rc::clone(&drops),
            });
            slot.remove();
        }

        assert_eq!(drops.get(), 1);
    }
}
