/// Determines item dropping behavior when the pool is dropped.
///
/// By default, the pool will drop any items it still holds when it is dropped.
///
/// # Examples
///
/// ```
/// use fixed_pool::{DropPolicy, FixedPool};
///
/// // The drop policy is set at pool creation time.
/// let pool = FixedPool::<u32, 4>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The pool will drop its items when the pool is dropped. This is the default.
    #[default]
    MayDropItems,

    /// The pool will panic if it still contains items when it is dropped.
    ///
    /// This may be valuable if there are external requirements before the items can
    /// be dropped. For example, the caller may be required to release items back to
    /// the pool in a specific order, with an item surviving to pool teardown
    /// indicating a bookkeeping bug worth surfacing loudly.
    MustNotDropItems,
}
