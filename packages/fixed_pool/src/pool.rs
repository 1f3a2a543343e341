use std::any::type_name;
use std::ptr;
use std::thread;

use crate::{DropPolicy, Error, FixedPoolBuilder, Result, Slot};

/// A fixed-capacity object pool that constructs and destroys items in place.
///
/// The pool owns `CAPACITY` slots of pre-allocated storage, embedded directly in the
/// pool value. Slots are addressed by index in `0..CAPACITY` and are independently
/// either vacant or occupied. Inserting an item constructs it in the lowest-indexed
/// vacant slot (first-fit, deterministic); removing an item drops it in place and
/// makes the slot available for reuse. The storage itself lives for as long as the
/// pool does - only the items come and go.
///
/// The pool exclusively owns every item it holds. Callers receive borrowed access
/// (references and slot indexes), never ownership, and every item is dropped exactly
/// once: either by [`remove()`][Self::remove] or when the pool itself is dropped.
///
/// There are two ways to insert an item:
///
/// * [`insert()`][Self::insert] - inserts a value and returns the slot index. This is
///   the simplest way to add an item but requires you to later look it up by index.
/// * [`begin_insert()`][Self::begin_insert] - returns an inserter that knows the
///   target index in advance and hands back a direct reference to the inserted item,
///   which may be useful if the item needs to know its own index in the pool.
///
/// All fallible operations report failures as values of the crate's
/// [`Error`] type; none of them mutate the pool on failure.
///
/// # Capacity
///
/// The capacity is fixed at compile time and the pool never grows, shrinks, or
/// relocates items. When every slot is occupied, insertion fails with
/// [`Error::CapacityExceeded`] until an item is removed.
///
/// # Thread safety
///
/// The pool is single-threaded by design: every mutating operation takes
/// `&mut self`, so the borrow checker sequences all access. The pool can move
/// between threads (or sit behind a `Mutex`) when `T` allows it.
///
/// # Examples
///
/// ```
/// use fixed_pool::FixedPool;
///
/// let mut pool = FixedPool::<String, 2>::new();
///
/// let index = pool.insert("Alice".to_string())?;
/// assert_eq!(pool.get(index)?, "Alice");
///
/// pool.remove(index)?;
/// assert!(pool.is_empty());
/// # Ok::<(), fixed_pool::Error>(())
/// ```
#[derive(Debug)]
pub struct FixedPool<T, const CAPACITY: usize> {
    /// The slots that provide the storage of the pool, embedded in the pool value
    /// itself. This sequence is index-addressed and never grows or shrinks.
    ///
    /// Each slot knows whether it is occupied; that flag is the sole source of
    /// truth for item liveness. The count below is bookkeeping derived from it.
    slots: [Slot<T>; CAPACITY],

    /// The number of occupied slots. Kept in sync with the slot flags so that
    /// callers can ask for the occupancy level without a scan.
    count: usize,

    drop_policy: DropPolicy,
}

impl<T, const CAPACITY: usize> FixedPool<T, CAPACITY> {
    /// # Panics
    ///
    /// Panics if `CAPACITY` is zero or `T` is zero-sized.
    #[must_use]
    pub(crate) fn new_inner(drop_policy: DropPolicy) -> Self {
        assert!(CAPACITY > 0, "FixedPool must have non-zero capacity");
        // Zero-sized items have no distinct storage address, which would make
        // slot lookup by reference meaningless.
        assert!(
            size_of::<T>() > 0,
            "FixedPool must have non-zero item size"
        );

        Self {
            slots: [const { Slot::vacant() }; CAPACITY],
            count: 0,
            drop_policy,
        }
    }

    /// Creates a new [`FixedPool`] with the default configuration.
    ///
    /// The pool starts with all slots vacant. No further allocation happens during
    /// the pool's lifetime - all storage is part of the pool value itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 4>::new();
    ///
    /// assert_eq!(pool.len(), 0);
    /// assert_eq!(pool.capacity(), 4);
    ///
    /// _ = pool.insert("Hello".to_string())?;
    /// assert_eq!(pool.len(), 1);
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `CAPACITY` is zero or `T` is zero-sized.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a new [`FixedPool`].
    ///
    /// Use this when you want to customize the pool configuration beyond the
    /// defaults, such as the [drop policy][DropPolicy].
    pub fn builder() -> FixedPoolBuilder<T, CAPACITY> {
        FixedPoolBuilder::new()
    }

    /// The number of occupied slots in the pool.
    ///
    /// This is always between zero and [`capacity()`][Self::capacity], inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<i32, 2>::new();
    /// assert_eq!(pool.len(), 0);
    ///
    /// let first = pool.insert(42)?;
    /// assert_eq!(pool.len(), 1);
    ///
    /// _ = pool.insert(24)?;
    /// assert_eq!(pool.len(), 2);
    ///
    /// pool.remove(first)?;
    /// assert_eq!(pool.len(), 1);
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// The number of slots in the pool, occupied or not.
    ///
    /// This is fixed at pool creation time and never changes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether every slot in the pool is occupied.
    ///
    /// Inserting into a full pool fails with [`Error::CapacityExceeded`].
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Inserts an item into the lowest-indexed vacant slot and returns that index.
    ///
    /// Slot selection is first-fit: the slots are scanned in index order and the
    /// first vacant one is used. This makes slot assignment deterministic - in
    /// particular, removing an item and inserting another reuses the freed slot
    /// if no lower-indexed slot is vacant.
    ///
    /// The returned index identifies the item until it is removed, regardless of
    /// what happens in other slots.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if every slot is occupied. The pool
    /// is not mutated in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<&str, 2>::new();
    ///
    /// assert_eq!(pool.insert("first")?, 0);
    /// assert_eq!(pool.insert("second")?, 1);
    ///
    /// assert!(pool.insert("third").is_err());
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    pub fn insert(&mut self, value: T) -> Result<usize> {
        let inserter = self.begin_insert()?;
        let index = inserter.index();
        _ = inserter.insert(value);
        Ok(index)
    }

    /// Begins inserting an item, letting the caller observe the target slot index
    /// before committing the value.
    ///
    /// The returned inserter holds the pool's lowest-indexed vacant slot. Consuming
    /// it via [`insert()`][FixedPoolInserter::insert] or
    /// [`insert_mut()`][FixedPoolInserter::insert_mut] constructs the item in that
    /// slot and returns a reference to it. Dropping the inserter without inserting
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityExceeded`] if every slot is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 2>::new();
    ///
    /// let inserter = pool.begin_insert()?;
    /// let index = inserter.index();
    /// let item = inserter.insert(format!("I live in slot {index}"));
    ///
    /// assert_eq!(item, "I live in slot 0");
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    pub fn begin_insert<'s, 'i>(&'s mut self) -> Result<FixedPoolInserter<'i, T, CAPACITY>>
    where
        's: 'i,
    {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let index = self
            .slots
            .iter()
            .position(|slot| !slot.is_occupied())
            .ok_or(Error::CapacityExceeded { len: self.count })?;

        Ok(FixedPoolInserter { pool: self, index })
    }

    /// Returns a reference to the item in the given slot.
    ///
    /// The reference borrows the pool, so it cannot outlive the item's removal or
    /// the pool itself.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidSlot`] if the index is out of bounds or the slot
    /// is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 2>::new();
    ///
    /// let index = pool.insert("Hello".to_string())?;
    /// assert_eq!(pool.get(index)?, "Hello");
    ///
    /// pool.remove(index)?;
    /// assert!(pool.get(index).is_err());
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self
            .slots
            .get(index)
            .filter(|slot| slot.is_occupied())
            .ok_or(Error::InvalidSlot { index })?;

        Ok(slot.value())
    }

    /// Returns an exclusive reference to the item in the given slot.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidSlot`] if the index is out of bounds or the slot
    /// is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 2>::new();
    ///
    /// let index = pool.insert("Hello".to_string())?;
    /// pool.get_mut(index)?.push_str(", World!");
    ///
    /// assert_eq!(pool.get(index)?, "Hello, World!");
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self
            .slots
            .get_mut(index)
            .filter(|slot| slot.is_occupied())
            .ok_or(Error::InvalidSlot { index })?;

        Ok(slot.value_mut())
    }

    /// Drops the item in the given slot and marks the slot vacant.
    ///
    /// The item's `Drop` implementation runs in place, inside the slot storage.
    /// The slot becomes available for reuse by later insertions.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidSlot`] if the index is out of bounds or the slot
    /// is vacant. No drop occurs and the occupancy level is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 2>::new();
    ///
    /// let index = pool.insert("transient".to_string())?;
    /// pool.remove(index)?;
    ///
    /// // Removing the same slot again is an error.
    /// assert!(pool.remove(index).is_err());
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .filter(|slot| slot.is_occupied())
            .ok_or(Error::InvalidSlot { index })?;

        slot.remove();

        self.count = self
            .count
            .checked_sub(1)
            .expect("slot was occupied, so the occupied count must be non-zero");

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Finds the slot index of an item previously obtained from this pool.
    ///
    /// The item is identified by its storage address: the pool compares the
    /// reference against each occupied slot's storage and returns the index of the
    /// match. A reference that does not point into this pool - an item of another
    /// pool, or unrelated memory - yields [`Error::NotFound`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFound`] if the item is not stored in any occupied
    /// slot of this pool.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 4>::new();
    ///
    /// let index = pool.insert("findable".to_string())?;
    /// let item = pool.get(index)?;
    ///
    /// assert_eq!(pool.index_of(item)?, index);
    ///
    /// let elsewhere = "not in the pool".to_string();
    /// assert!(pool.index_of(&elsewhere).is_err());
    /// # Ok::<(), fixed_pool::Error>(())
    /// ```
    pub fn index_of(&self, item: &T) -> Result<usize> {
        let item = ptr::from_ref(item);

        self.slots
            .iter()
            .position(|slot| slot.holds(item))
            .ok_or(Error::NotFound)
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    fn integrity_check(&self) {
        let observed_occupied_count = self
            .slots
            .iter()
            .filter(|slot| slot.is_occupied())
            .count();

        assert!(
            self.count == observed_occupied_count,
            "self.count {} does not match the observed occupied count {} in pool of {}",
            self.count,
            observed_occupied_count,
            type_name::<T>()
        );
    }
}

impl<T, const CAPACITY: usize> Default for FixedPool<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAPACITY: usize> Drop for FixedPool<T, CAPACITY> {
    fn drop(&mut self) {
        // The items themselves are dropped by the slot array after this body runs,
        // each occupied slot dropping its item, in ascending index order.
        //
        // If we are already panicking, we do not want to panic again because that
        // will simply obscure whatever the original panic was, leading to debug
        // difficulties.
        if self.drop_policy == DropPolicy::MustNotDropItems && !thread::panicking() {
            assert!(
                self.is_empty(),
                "dropped a non-empty pool of {} with a policy that says it must be empty when dropped",
                type_name::<T>()
            );
        }
    }
}

/// A pending insertion into a [`FixedPool`].
///
/// Obtained from [`FixedPool::begin_insert()`]. The inserter pins down the slot
/// index that the next insertion will use, so the caller can record it before the
/// item exists - or bake it into the item itself. Dropping the inserter without
/// inserting leaves the pool untouched.
#[derive(Debug)]
pub struct FixedPoolInserter<'p, T, const CAPACITY: usize> {
    pool: &'p mut FixedPool<T, CAPACITY>,

    /// Index at which the item will be inserted.
    index: usize,
}

impl<'p, T, const CAPACITY: usize> FixedPoolInserter<'p, T, CAPACITY> {
    /// The index of the slot the item will be inserted into.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Inserts the item and returns a shared reference to it.
    pub fn insert<'v>(self, value: T) -> &'v T
    where
        'p: 'v,
    {
        // Inserting an item always yields an exclusive reference, so this non-mut
        // method simply downgrades the exclusive reference to a shared one.
        self.insert_mut(value)
    }

    /// Inserts the item and returns an exclusive reference to it.
    pub fn insert_mut<'v>(self, value: T) -> &'v mut T
    where
        'p: 'v,
    {
        let index = self.index;
        let pool = self.pool;

        {
            let slot = pool
                .slots
                .get_mut(index)
                .expect("inserter index is selected from the pool's own slot range");

            _ = slot.insert(value);
        }

        // The item is fully constructed and the slot flagged occupied; account for it.
        pool.count = pool
            .count
            .checked_add(1)
            .expect("occupied count is bounded by CAPACITY, which is a valid usize");

        let slot = pool
            .slots
            .get_mut(index)
            .expect("the slot we just inserted into");

        slot.value_mut()
    }
}
