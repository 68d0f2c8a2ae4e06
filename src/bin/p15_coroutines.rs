//! Cooperative Generators: from_fn, successors, resumable state machines
//!
//! Run with: cargo run --bin p15_coroutines

use std::iter;

fn generator_from_fn() {
    println!("=== iter::from_fn ===\n");

    // A closure over mutable state is a single-threaded generator:
    // each pull resumes it, each return yields.
    let mut count = 0u32;
    let mut generator = iter::from_fn(move || {
        let value = count;
        count += 1;
        Some(value)
    });

    print!("three pulls: ");
    for _ in 0..3 {
        if let Some(value) = generator.next() {
            print!("{} ", value);
        }
    }
    println!();

    // A bounded variant ends itself.
    let countdown: Vec<u32> = {
        let mut n = 3;
        iter::from_fn(move || {
            if n == 0 {
                None
            } else {
                n -= 1;
                Some(n + 1)
            }
        })
        .collect()
    };
    println!("countdown: {:?}", countdown);
}

fn generator_successors() {
    println!("\n=== iter::successors ===\n");

    let powers: Vec<u64> = iter::successors(Some(1u64), |&prev| prev.checked_mul(2))
        .take(10)
        .collect();
    println!("powers of two: {:?}", powers);

    let collatz: Vec<u64> = iter::successors(Some(27u64), |&n| match n {
        1 => None,
        n if n % 2 == 0 => Some(n / 2),
        n => Some(3 * n + 1),
    })
    .collect();
    println!("collatz(27) reaches 1 in {} steps", collatz.len() - 1);
}

/// A resumable two-phase routine. Each call to resume() runs until the
/// next "yield point" and remembers where it stopped.
#[derive(Debug, PartialEq)]
enum Phase {
    Start,
    Middle,
    Done,
}

struct Stepper {
    phase: Phase,
}

impl Stepper {
    fn new() -> Self {
        Stepper { phase: Phase::Start }
    }

    fn resume(&mut self) -> Option<&'static str> {
        match self.phase {
            Phase::Start => {
                self.phase = Phase::Middle;
                Some("First")
            }
            Phase::Middle => {
                self.phase = Phase::Done;
                Some("Second")
            }
            Phase::Done => None,
        }
    }
}

fn resumable_stepper() {
    println!("\n=== Resumable Stepper ===\n");

    let mut stepper = Stepper::new();
    while let Some(output) = stepper.resume() {
        println!("resume() -> {}", output);
    }
    println!("resume() -> {:?} (exhausted)", stepper.resume());
}

fn adapters_as_generators() {
    println!("\n=== Adapters as Generators ===\n");

    // repeat_with makes a generator from any factory closure.
    let mut id = 0;
    let ids: Vec<String> = iter::repeat_with(|| {
        id += 1;
        format!("id-{:03}", id)
    })
    .take(3)
    .collect();
    println!("generated ids: {:?}", ids);

    let alternating: Vec<i32> = [1, -1].into_iter().cycle().take(6).collect();
    println!("alternating: {:?}", alternating);
}

fn main() {
    println!("=== Coroutines Demo ===\n");

    generator_from_fn();
    generator_successors();
    resumable_stepper();
    adapters_as_generators();

    println!("\n=== Key Points ===");
    println!("1. from_fn + captured state = a pull-driven generator");
    println!("2. successors expresses 'next from previous' sequences");
    println!("3. Returning None is the generator's way of finishing");
    println!("4. All of it is cooperative: nothing runs between pulls");
}
