//! Wall-Clock Timing with Instant and Duration
//!
//! Run with: cargo run --bin p24_timing
//!
//! For statistically sound numbers use the criterion benches in benches/;
//! this demo shows the raw building blocks.

use std::time::{Duration, Instant};

/// Run a closure, returning its result and how long it took.
fn time_it<T>(workload: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = workload();
    (result, start.elapsed())
}

fn measuring() {
    println!("=== Measuring a Workload ===\n");

    let (total, elapsed) = time_it(|| (0..1_000_000u64).sum::<u64>());
    println!("sum to 1e6 = {} in {:?}", total, elapsed);

    let (_, string_time) = time_it(|| {
        let mut s = String::new();
        for _ in 0..1000 {
            s.push_str("string");
        }
        s
    });
    println!("1000 string appends took {:?}", string_time);
}

fn comparing() {
    println!("\n=== Comparing Two Approaches ===\n");

    let rows: Vec<(&str, Duration)> = vec![
        ("push_str in a loop", time_it(build_by_push).1),
        ("collect from iter", time_it(build_by_collect).1),
    ];

    for (label, duration) in &rows {
        println!("  {:22} {:?}", label, duration);
    }
    println!("(one-shot wall clock; treat differences as anecdotes)");
}

fn build_by_push() -> String {
    let mut s = String::new();
    for i in 0..10_000 {
        s.push_str(&i.to_string());
    }
    s
}

fn build_by_collect() -> String {
    (0..10_000).map(|i| i.to_string()).collect()
}

fn durations() {
    println!("\n=== Duration Arithmetic ===\n");

    let d = Duration::from_millis(1500);
    println!("1500ms = {:?}", d);
    println!("as secs_f64: {}", d.as_secs_f64());
    println!("doubled: {:?}", d * 2);
    println!("sum: {:?}", Duration::from_secs(1) + Duration::from_millis(250));
    println!("checked_sub past zero: {:?}", Duration::from_secs(1).checked_sub(Duration::from_secs(2)));

    let earlier = Instant::now();
    std::thread::sleep(Duration::from_millis(10));
    println!("elapsed since marker: {:?} (monotonic, never negative)", earlier.elapsed());
}

fn main() {
    println!("=== Timing Demo ===\n");

    measuring();
    comparing();
    durations();

    println!("\n=== Key Points ===");
    println!("1. Instant is monotonic; SystemTime is the wall calendar");
    println!("2. A closure plus Instant::now is a serviceable stopwatch");
    println!("3. Real comparisons need criterion's statistics, not one run");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_it_returns_result_and_duration() {
        let (value, elapsed) = time_it(|| 2 + 2);
        assert_eq!(value, 4);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn both_builders_agree() {
        assert_eq!(build_by_push(), build_by_collect());
    }

    #[test]
    fn sleeping_advances_elapsed() {
        let (_, elapsed) = time_it(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }
}
