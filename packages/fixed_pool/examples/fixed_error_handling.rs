//! Handling the failure modes of a `FixedPool`:
//!
//! * Exhaustion when every slot is occupied.
//! * Invalid slot references.
//! * Reverse lookup of items the pool does not hold.

use fixed_pool::{Error, FixedPool};

fn main() {
    let mut pool = FixedPool::<u64, 2>::new();

    let first = pool.insert(100).expect("pool is empty, insert cannot fail");
    _ = pool.insert(200).expect("one slot is still vacant");

    // The pool is now full. Insertion fails with a value describing the
    // exhaustion, and the pool is left untouched.
    match pool.insert(300) {
        Ok(index) => println!("unexpectedly inserted into slot {index}"),
        Err(error @ Error::CapacityExceeded { len }) => {
            println!("pool exhausted at {len} items: {error}");
        }
        Err(error) => println!("unexpected error: {error}"),
    }

    // Freeing a slot makes the same insertion succeed.
    pool.remove(first).expect("slot is occupied");
    let index = pool
        .insert(300)
        .expect("a slot was just freed, insert cannot fail");
    println!("inserted into freed slot {index}");

    // Referencing a slot that is out of bounds, or one that holds no item,
    // is reported rather than papered over.
    if let Err(error) = pool.get(17) {
        println!("lookup failed: {error}");
    }

    // Reverse lookup only recognizes items that live inside this pool.
    let outsider = 300_u64;
    if let Err(error) = pool.index_of(&outsider) {
        println!("reverse lookup failed: {error}");
    }
}
