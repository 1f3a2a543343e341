//! A fixed-capacity object pool that constructs and destroys items in place.
//!
//! This crate provides [`FixedPool`], a pool whose entire storage is pre-allocated
//! as part of the pool value: `CAPACITY` slots, each sized and aligned for one item
//! of type `T`. Items are constructed directly into vacant slots and dropped
//! directly out of occupied ones - the general-purpose allocator is never involved
//! after the pool exists. Slots are addressed by index, and the pool retains
//! exclusive ownership of every item it holds.
//!
//! # Key features
//!
//! - **Fixed capacity**: the slot count is a compile-time constant; the pool never
//!   grows, shrinks, or relocates items
//! - **In-place lifecycle**: items are constructed into and dropped out of
//!   pre-allocated slot storage
//! - **First-fit slot selection**: insertion always uses the lowest-indexed vacant
//!   slot, so slot assignment is deterministic and reproducible
//! - **Index stability**: a slot index identifies the same item until that item is
//!   explicitly removed
//! - **Reverse lookup**: [`index_of()`][FixedPool::index_of] resolves an item
//!   reference back to its slot index by storage address
//! - **Guaranteed cleanup**: every item is dropped exactly once, no later than pool
//!   teardown, on every exit path from the owning scope
//! - **Structured errors**: expected failures ([`Error::CapacityExceeded`],
//!   [`Error::InvalidSlot`], [`Error::NotFound`]) are returned as values, never
//!   signaled by panic
//! - **Flexible drop policies**: configure behavior when the pool is dropped with
//!   items still present
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use fixed_pool::FixedPool;
//!
//! let mut pool = FixedPool::<String, 2>::new();
//!
//! // Inserting an item yields the index of the slot it went into.
//! let index = pool.insert("Hello, World!".to_string())?;
//! assert_eq!(index, 0);
//!
//! // The index resolves to the item until the item is removed.
//! assert_eq!(pool.get(index)?, "Hello, World!");
//!
//! // Items can be modified in place.
//! pool.get_mut(index)?.make_ascii_uppercase();
//! assert_eq!(pool.get(index)?, "HELLO, WORLD!");
//!
//! // Removing the item drops it and frees the slot for reuse.
//! pool.remove(index)?;
//! assert!(pool.is_empty());
//! # Ok::<(), fixed_pool::Error>(())
//! ```
//!
//! ## Exhaustion is a value, not a panic
//!
//! ```rust
//! use fixed_pool::{Error, FixedPool};
//!
//! let mut pool = FixedPool::<u64, 2>::new();
//!
//! _ = pool.insert(1)?;
//! _ = pool.insert(2)?;
//!
//! // Both slots are occupied, so the next insertion reports exhaustion,
//! // along with the occupancy level at the time.
//! let error = pool.insert(3).unwrap_err();
//! assert!(matches!(error, Error::CapacityExceeded { len: 2 }));
//!
//! // The failed insertion changed nothing; freeing a slot makes room again.
//! pool.remove(0)?;
//! assert_eq!(pool.insert(3)?, 0);
//! # Ok::<(), fixed_pool::Error>(())
//! ```
//!
//! ## Resolving an item back to its slot
//!
//! ```rust
//! use fixed_pool::FixedPool;
//!
//! let mut pool = FixedPool::<String, 4>::new();
//!
//! let index = pool.insert("locate me".to_string())?;
//!
//! // Given a reference into the pool, the owning slot can be recovered.
//! let item = pool.get(index)?;
//! assert_eq!(pool.index_of(item)?, index);
//! # Ok::<(), fixed_pool::Error>(())
//! ```

mod builder;
mod drop_policy;
mod error;
mod pool;
mod slot;

pub use builder::*;
pub use drop_policy::*;
pub use error::Error;
pub(crate) use error::Result;
pub use pool::*;
pub(crate) use slot::*;
