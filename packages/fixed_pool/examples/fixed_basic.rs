//! Basic usage of the `fixed_pool` crate:
//!
//! * Creating a pool.
//! * Adding items.
//! * Retrieving items.
//! * Removing items.

use fixed_pool::{Error, FixedPool};

fn main() -> Result<(), Error> {
    let mut pool = FixedPool::<String, 4>::new();

    // Inserting an item gives you the index of the slot it went into.
    // Slots are handed out first-fit, so these are 0, 1 and 2.
    let alice_index = pool.insert("Alice".to_string())?;
    let bob_index = pool.insert("Bob".to_string())?;
    let charlie_index = pool.insert("Charlie".to_string())?;

    println!(
        "Pool holds {} items in {} slots",
        pool.len(),
        pool.capacity()
    );

    // Retrieving an item by index is fast, similar to `Vec[index]`.
    let alice = pool.get(alice_index)?;
    println!("Retrieved item: {alice}");

    // A reference into the pool can be resolved back to its slot index.
    let position = pool.index_of(alice)?;
    println!("That item lives in slot {position}");

    pool.remove(bob_index)?;
    pool.remove(charlie_index)?;

    // Retrieving an item borrows the pool for as long as you use the item, so we
    // re-lookup `alice` here because otherwise the above `remove()` would be blocked.
    let alice = pool.get(alice_index)?;
    println!("Retrieved item after removal of other items: {alice}");

    // You can also modify the items in-place.
    let alice = pool.get_mut(alice_index)?;
    alice.push_str(" Smith");
    println!("Modified item: {alice}");

    // Any items still in the pool are dropped with it.
    Ok(())
}
