use thiserror::Error;

/// Errors that can occur when operating on a [`FixedPool`][crate::FixedPool].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller tried to insert an item but every slot in the pool is occupied.
    ///
    /// This is a recoverable condition - the caller may remove an existing item
    /// and try again, or treat the pool as exhausted.
    #[error("cannot insert into a full pool: all {len} slots are occupied")]
    CapacityExceeded {
        /// Number of occupied slots at the time of the failed insertion.
        /// As the pool was full, this equals the pool capacity.
        len: usize,
    },

    /// The caller referenced a slot that is out of bounds or not occupied by an item.
    ///
    /// This indicates a logic error in the caller, typically an index retained
    /// past the removal of the item it referred to.
    #[error("slot {index} is out of bounds or vacant")]
    InvalidSlot {
        /// The offending slot index.
        index: usize,
    },

    /// The caller asked for the slot index of an item that is not stored in the pool.
    #[error("the item is not stored in any occupied slot of this pool")]
    NotFound,
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn capacity_exceeded_reports_occupancy() {
        let error = Error::CapacityExceeded { len: 2 };

        assert_eq!(
            error.to_string(),
            "cannot insert into a full pool: all 2 slots are occupied"
        );
    }

    #[test]
    fn invalid_slot_reports_index() {
        let error = Error::InvalidSlot { index: 1234 };

        assert_eq!(error.to_string(), "slot 1234 is out of bounds or vacant");
    }

    #[test]
    fn not_found_is_error() {
        let error = Error::NotFound;

        // Verify it is a valid Error that can be used in Result context.
        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }
}
