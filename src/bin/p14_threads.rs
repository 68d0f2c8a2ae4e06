//! Threads: spawn/join, shared state, channels, parallel iterators
//!
//! Run with: cargo run --bin p14_threads

use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

fn spawn_and_join() {
    println!("=== Spawn and Join ===\n");

    let handle = thread::spawn(|| {
        thread::sleep(Duration::from_millis(10));
        "thread result"
    });

    // join() blocks until the thread finishes and hands back its value.
    match handle.join() {
        Ok(value) => println!("joined with: {}", value),
        Err(_) => println!("thread panicked"),
    }
}

fn worker_pool() {
    println!("\n=== Worker Pool ===\n");

    let handles: Vec<_> = (0..5)
        .map(|i| {
            thread::spawn(move || {
                // Stagger the finish times; join order is spawn order anyway.
                thread::sleep(Duration::from_millis(5 * (5 - i as u64)));
                format!("worker {} finished", i)
            })
        })
        .collect();

    // The workers complete in any order; collecting via join just waits
    // for each in turn and imposes no ordering of its own.
    for handle in handles {
        match handle.join() {
            Ok(message) => println!("  {}", message),
            Err(_) => println!("  a worker panicked"),
        }
    }
}

/// Ten threads, one hundred increments each, one lock.
fn mutex_counter(threads: usize, increments: usize) -> u64 {
    let counter = Arc::new(Mutex::new(0u64));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..increments {
                    let mut guard = counter.lock().expect("counter lock poisoned");
                    *guard += 1;
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("counter thread panicked");
    }

    let total = *counter.lock().expect("counter lock poisoned");
    total
}

/// Same workload without a lock: the hardware does the exclusion.
fn atomic_counter(threads: usize, increments: usize) -> u64 {
    let counter = Arc::new(AtomicU64::new(0));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..increments {
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("counter thread panicked");
    }

    counter.load(Ordering::Relaxed)
}

fn shared_counters() {
    println!("\n=== Shared Counter: Mutex vs Atomic ===\n");

    println!("mutex counter (10 x 100):  {}", mutex_counter(10, 100));
    println!("atomic counter (10 x 100): {}", atomic_counter(10, 100));
}

fn scoped_threads() {
    println!("\n=== Scoped Threads ===\n");

    let data = vec![1, 2, 3, 4, 5];

    // The scope joins everything before returning, so plain borrows work.
    thread::scope(|s| {
        s.spawn(|| println!("  sum: {}", data.iter().sum::<i32>()));
        s.spawn(|| println!("  product: {}", data.iter().product::<i32>()));
    });
    println!("data still owned here: {:?}", data);
}

thread_local! {
    static REQUEST_ID: std::cell::Cell<u64> = const { std::cell::Cell::new(0) };
}

fn thread_locals() {
    println!("\n=== Thread-Local Storage ===\n");

    REQUEST_ID.with(|id| id.set(41));

    let handle = thread::spawn(|| {
        // Fresh copy per thread: the main thread's 41 is invisible here.
        REQUEST_ID.with(|id| {
            id.set(99);
            id.get()
        })
    });

    let worker_view = handle.join().expect("worker panicked");
    let main_view = REQUEST_ID.with(|id| id.get());
    println!("worker saw {}, main still sees {}", worker_view, main_view);
}

fn channels() {
    println!("\n=== Channels ===\n");

    let (tx, rx) = mpsc::channel();
    for producer in 0..3 {
        let tx = tx.clone();
        thread::spawn(move || {
            for item in 0..2 {
                tx.send(format!("producer {} item {}", producer, item))
                    .expect("receiver dropped");
            }
        });
    }
    drop(tx);

    let mut received: Vec<String> = rx.iter().collect();
    received.sort();
    println!("mpsc collected {} messages", received.len());
    for message in &received {
        println!("  {}", message);
    }

    // Bounded channel: senders block once the buffer is full.
    let (btx, brx) = crossbeam::channel::bounded(2);
    let producer = thread::spawn(move || {
        for i in 0..4 {
            btx.send(i).expect("receiver dropped");
        }
    });
    thread::sleep(Duration::from_millis(5));
    let drained: Vec<i32> = brx.iter().collect();
    producer.join().expect("producer panicked");
    println!("bounded channel drained: {:?}", drained);
}

fn parallel_iterators() {
    println!("\n=== Parallel Iterators ===\n");

    let squares_sum: u64 = (1..=10_000u64).into_par_iter().map(|n| n * n).sum();
    println!("parallel sum of squares to 10_000: {}", squares_sum);

    let mut values: Vec<i32> = (0..1000).rev().collect();
    values.par_sort();
    println!("par_sort first/last: {} / {}", values[0], values[999]);
}

fn main() {
    println!("=== Threads Demo ===\n");

    spawn_and_join();
    worker_pool();
    shared_counters();
    scoped_threads();
    thread_locals();
    channels();
    parallel_iterators();

    println!("\n=== Key Points ===");
    println!("1. join() returns the thread's value, or Err if it panicked");
    println!("2. Arc<Mutex<T>> shares mutable state; atomics skip the lock");
    println!("3. thread::scope lets threads borrow stack data");
    println!("4. Channels move data; rayon parallelizes whole pipelines");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutex_counter_reaches_exact_total() {
        assert_eq!(mutex_counter(10, 100), 1000);
    }

    #[test]
    fn atomic_counter_reaches_exact_total() {
        assert_eq!(atomic_counter(10, 100), 1000);
    }

    #[test]
    fn channel_delivers_all_messages() {
        let (tx, rx) = mpsc::channel();
        for i in 0..3 {
            let tx = tx.clone();
            thread::spawn(move || tx.send(i).expect("receiver dropped"));
        }
        drop(tx);
        let mut got: Vec<i32> = rx.iter().collect();
        got.sort();
        assert_eq!(got, vec![0, 1, 2]);
    }

    #[test]
    fn scoped_threads_borrow() {
        let data = vec![1, 2, 3];
        let mut sum = 0;
        thread::scope(|s| {
            let handle = s.spawn(|| data.iter().sum::<i32>());
            sum = handle.join().expect("scoped thread panicked");
        });
        assert_eq!(sum, 6);
    }

    #[test]
    fn parallel_sum_matches_sequential() {
        let par: u64 = (1..=1000u64).into_par_iter().sum();
        let seq: u64 = (1..=1000u64).sum();
        assert_eq!(par, seq);
    }
}
