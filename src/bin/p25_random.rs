//! Random Numbers: ranges, sampling, shuffling, seeding
//!
//! Run with: cargo run --bin p25_random

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn integers_and_floats() {
    println!("=== Integers and Floats ===\n");

    let mut rng = rand::thread_rng();

    println!("0..100:      {}", rng.gen_range(0..100));
    println!("10..=20:     {}", rng.gen_range(10..=20));
    println!("0.0..1.0:    {}", rng.gen::<f64>());
    println!("1.0..2.0:    {}", rng.gen_range(1.0..2.0));
    println!("bool:        {}", rng.gen_bool(0.5));
    println!("80% bool:    {}", rng.gen_bool(0.8));
}

fn sampling() {
    println!("\n=== Sampling and Shuffling ===\n");

    let mut rng = rand::thread_rng();
    let options = [1, 2, 3];

    println!("choose: {:?}", options.choose(&mut rng));
    let empty: [i32; 0] = [];
    println!("choose from empty: {:?}", empty.choose(&mut rng));

    let mut deck: Vec<u8> = (1..=10).collect();
    deck.shuffle(&mut rng);
    println!("shuffled: {:?}", deck);

    let hand: Vec<&u8> = deck.choose_multiple(&mut rng, 3).collect();
    println!("three without replacement: {:?}", hand);
}

/// A fixed seed makes the whole sequence reproducible.
fn seeded_sequence(seed: u64, count: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..100)).collect()
}

fn seeding() {
    println!("\n=== Seeded Reproducibility ===\n");

    let first = seeded_sequence(12345, 5);
    let second = seeded_sequence(12345, 5);
    let different = seeded_sequence(54321, 5);

    println!("seed 12345: {:?}", first);
    println!("same seed:  {:?}", second);
    println!("other seed: {:?}", different);
    println!("reproducible: {}", first == second);
}

fn main() {
    println!("=== Random Numbers Demo ===\n");

    integers_and_floats();
    sampling();
    seeding();

    println!("\n=== Key Points ===");
    println!("1. thread_rng is the per-thread default generator");
    println!("2. choose/shuffle live on slices via SliceRandom");
    println!("3. Seed a StdRng when tests or replays need determinism");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sequences_are_deterministic() {
        assert_eq!(seeded_sequence(42, 10), seeded_sequence(42, 10));
        assert_ne!(seeded_sequence(42, 10), seeded_sequence(43, 10));
    }

    #[test]
    fn ranges_respect_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let n = rng.gen_range(10..=20);
            assert!((10..=20).contains(&n));
        }
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = rand::thread_rng();
        let empty: [i32; 0] = [];
        assert_eq!(empty.choose(&mut rng), None);
    }

    #[test]
    fn shuffle_keeps_all_elements() {
        let mut rng = rand::thread_rng();
        let mut values: Vec<u8> = (0..50).collect();
        values.shuffle(&mut rng);
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<u8>>());
    }
}
