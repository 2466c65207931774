//! Basic usage example for dequex
//!
//! This example walks through the full operation surface of the blocking deque:
//! insertion at both ends, peeking, positional inspection, and the snapshot
//! formatting.

use dequex::{BlockingDeque, Wait};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("dequex Basic Usage Example");
    println!("==========================");

    // An unbounded deque: inserts never wait.
    let deque = BlockingDeque::unbounded();

    println!("\n1. Insert and inspect:");
    deque.push_back(10, Wait::Block)?;
    println!("   get(0)      -> {:?}", deque.get(0));
    println!("   peek_front  -> {:?}", deque.peek_front(Wait::Block)?);
    println!("   try_peek    -> {:?}", deque.try_peek_front()?);

    println!("\n2. Jump the queue with push_front:");
    deque.push_front(20, Wait::Block)?;
    println!("   try_peek    -> {:?}", deque.try_peek_front()?);

    println!("\n3. Snapshots:");
    println!("   Debug       -> {:?}", deque);
    println!("   Display     -> {}", deque);

    println!("\n4. Drain in order:");
    while let Ok(item) = deque.try_pop_front() {
        println!("   popped {}", item);
        deque.task_done();
    }
    println!("   in_flight   -> {}", deque.in_flight());

    println!("\n5. Bounded behavior:");
    let bounded = BlockingDeque::new(1);
    bounded.push_back("first", Wait::Block)?;
    match bounded.try_push_back("second") {
        Err(e) => println!("   second push rejected: {}", e),
        Ok(()) => unreachable!(),
    }

    Ok(())
}
