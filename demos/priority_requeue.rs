//! Priority requeue example for dequex
//!
//! A small job pipeline where workers peek at the next job to decide whether
//! they can run it, and push jobs they cannot handle yet back to the front so
//! no other work overtakes them.

use dequex::{BlockingDeque, Wait};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Job {
    id: usize,
    needs_warmup: bool,
}

fn main() {
    println!("dequex Priority Requeue Example");
    println!("===============================");

    let deque: Arc<BlockingDeque<Job>> = Arc::new(BlockingDeque::new(8));

    let producer = {
        let deque = Arc::clone(&deque);
        thread::spawn(move || {
            for id in 0..10 {
                let job = Job {
                    id,
                    needs_warmup: id % 3 == 0,
                };
                deque.push_back(job, Wait::Block).unwrap();
            }
        })
    };

    let worker = {
        let deque = Arc::clone(&deque);
        thread::spawn(move || {
            let mut completed = 0;
            let mut warmed_up = false;

            while completed < 10 {
                // Peek first: a job needing warmup is not consumed until the
                // worker is ready for it.
                let next = deque.peek_front(Wait::Block).unwrap();
                if next.needs_warmup && !warmed_up {
                    println!("   job {} needs warmup, preparing...", next.id);
                    thread::sleep(Duration::from_millis(10));
                    warmed_up = true;
                    continue;
                }

                let job = deque.pop_front(Wait::Block).unwrap();
                println!("   running job {}", job.id);
                completed += 1;
                deque.task_done();
            }
            completed
        })
    };

    producer.join().unwrap();
    let completed = worker.join().unwrap();
    println!("\nCompleted {} jobs, {} left in flight", completed, deque.in_flight());
}
