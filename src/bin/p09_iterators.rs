//! Iterator Combinators, Custom Iterators, Lazy Pipelines
//!
//! Run with: cargo run --bin p09_iterators

use itertools::Itertools;

fn combinator_catalogue() {
    println!("=== Combinator Catalogue ===\n");

    let numbers = [1, 2, 3, 4, 5];

    let doubled: Vec<i32> = numbers.iter().map(|n| n * 2).collect();
    let evens: Vec<i32> = numbers.iter().copied().filter(|n| n % 2 == 0).collect();
    let odds: Vec<i32> = numbers.iter().copied().filter(|n| n % 2 != 0).collect();
    println!("map *2:   {:?}", doubled);
    println!("filter:   {:?}", evens);
    println!("reject:   {:?} (filter with the negated predicate)", odds);

    let sum: i32 = numbers.iter().sum();
    let product: i32 = numbers.iter().product();
    let folded = numbers.iter().fold(0, |acc, n| acc + n);
    let reduced = numbers.iter().copied().reduce(|a, b| a.max(b));
    println!("sum {}, product {}, fold {}, reduce(max) {:?}", sum, product, folded, reduced);

    println!("find even:    {:?}", numbers.iter().find(|&&n| n % 2 == 0));
    println!("position >3:  {:?}", numbers.iter().position(|&n| n > 3));
    println!("any even:     {}", numbers.iter().any(|&n| n % 2 == 0));
    println!("all positive: {}", numbers.iter().all(|&n| n > 0));

    let (even, odd): (Vec<i32>, Vec<i32>) = numbers.iter().partition(|&&n| n % 2 == 0);
    println!("partition:    {:?} / {:?}", even, odd);

    let letters = ["a", "b", "c"];
    let zipped: Vec<(i32, &str)> = numbers.iter().copied().zip(letters).collect();
    println!("zip:          {:?}", zipped);

    let take_drop: (Vec<i32>, Vec<i32>) = (
        numbers.iter().copied().take(3).collect(),
        numbers.iter().copied().skip(3).collect(),
    );
    println!("take/skip:    {:?} / {:?}", take_drop.0, take_drop.1);

    let chained: Vec<i32> = numbers.iter().copied().chain([6, 7]).collect();
    println!("chain:        {:?}", chained);

    let flat: Vec<i32> = [[1, 2], [3, 4]].iter().flat_map(|p| p.iter().copied()).collect();
    println!("flat_map:     {:?}", flat);

    let running: Vec<i32> = numbers
        .iter()
        .scan(0, |acc, &n| {
            *acc += n;
            Some(*acc)
        })
        .collect();
    println!("scan (running sum): {:?}", running);

    let cycled: Vec<i32> = [1, 2, 3].iter().copied().cycle().take(6).collect();
    println!("cycle x2:     {:?}", cycled);

    println!("windows(2):   {:?}", numbers.windows(2).collect::<Vec<_>>());
    println!("chunks(2):    {:?}", numbers.chunks(2).collect::<Vec<_>>());
}

fn itertools_extras() {
    println!("\n=== Itertools Extras ===\n");

    let words = ["apple", "apricot", "banana", "blueberry", "cherry"];

    // Group by first letter into a map.
    let grouped = words
        .iter()
        .into_group_map_by(|w| w.chars().next().unwrap_or('?'));
    let mut keys: Vec<_> = grouped.keys().copied().collect();
    keys.sort();
    for k in keys {
        println!("{}: {:?}", k, grouped[&k]);
    }

    // chunk_by groups consecutive runs; the adaptor itself must outlive
    // the groups borrowed from it.
    let chunked = [1, 3, 5, 2, 4, 7].into_iter().chunk_by(|n| n % 2 == 0);
    let runs: Vec<(bool, Vec<i32>)> = chunked
        .into_iter()
        .map(|(key, run)| (key, run.collect()))
        .collect();
    println!("consecutive parity runs: {:?}", runs);

    let by_length: Vec<&str> = ["apple", "pie", "cherry"].into_iter().sorted_by_key(|w| w.len()).collect();
    println!("sorted_by_key(len): {:?}", by_length);

    let deduped: Vec<i32> = [1, 2, 2, 3, 1].into_iter().unique().collect();
    println!("unique: {:?}", deduped);

    println!("join: {}", ["a", "b", "c"].iter().join("-"));

    let pairs: Vec<(i32, char)> = (1..=2).cartesian_product('a'..='b').collect();
    println!("cartesian product: {:?}", pairs);
}

/// An infinite counter, the minimal custom iterator.
struct Counter {
    count: u64,
}

impl Counter {
    fn new() -> Self {
        Counter { count: 0 }
    }
}

impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.count;
        self.count += 1;
        Some(current)
    }
}

/// Infinite Fibonacci that ends itself at u64 overflow.
struct Fibonacci {
    current: u64,
    next: u64,
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let result = self.current;
        let new_next = self.current.checked_add(self.next)?;
        self.current = self.next;
        self.next = new_next;
        Some(result)
    }
}

fn custom_iterators() {
    println!("\n=== Custom Iterators ===\n");

    let first_five: Vec<u64> = Counter::new().take(5).collect();
    println!("Counter.take(5): {:?}", first_five);

    let fib = Fibonacci { current: 0, next: 1 };
    let fibs: Vec<u64> = fib.take(10).collect();
    println!("Fibonacci.take(10): {:?}", fibs);

    let fitting = Fibonacci { current: 0, next: 1 }.count();
    println!("Fibonacci numbers that fit in u64: {}", fitting);
}

/// The canonical lazy pipeline: an unbounded source, two transformations,
/// and a take(5) that makes the whole thing finite. Nothing runs until
/// collect drives it.
fn lazy_pipeline() -> Vec<u64> {
    (1u64..)
        .map(|n| n * 2)
        .filter(|n| n % 3 == 0)
        .take(5)
        .collect()
}

fn laziness() {
    println!("\n=== Lazy Evaluation ===\n");

    let result = lazy_pipeline();
    println!("(1..).map(*2).filter(%3==0).take(5) = {:?}", result);

    let mut peeking = [10, 20, 30].iter().peekable();
    let peeked = peeking.peek().copied().copied();
    let nexted = peeking.next();
    println!("peek: {:?}, next: {:?}", peeked, nexted);
}

fn main() {
    println!("=== Iterators Demo ===\n");

    combinator_catalogue();
    itertools_extras();
    custom_iterators();
    laziness();

    println!("\n=== Key Points ===");
    println!("1. Adapters are lazy; collect, sum, or for loops drive them");
    println!("2. Infinite iterators are fine as long as something bounds them");
    println!("3. itertools fills the gaps: grouping, sorting keys, joining");
    println!("4. Implementing Iterator is one method: next()");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_pipeline_takes_five() {
        assert_eq!(lazy_pipeline(), vec![6, 12, 18, 24, 30]);
    }

    #[test]
    fn counter_is_sequential() {
        assert_eq!(Counter::new().take(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn fibonacci_prefix() {
        let fib = Fibonacci { current: 0, next: 1 };
        assert_eq!(
            fib.take(10).collect::<Vec<_>>(),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
    }

    #[test]
    fn fibonacci_terminates_at_overflow() {
        // F(k) is yielded only while F(k+2) still fits in u64; F(94) is the
        // first to overflow, so the last yielded value is F(91).
        let count = Fibonacci { current: 0, next: 1 }.count();
        assert_eq!(count, 92);
    }

    #[test]
    fn grouping_by_first_letter() {
        let grouped = ["ant", "ape", "bee"]
            .iter()
            .into_group_map_by(|w| w.chars().next().unwrap());
        assert_eq!(grouped[&'a'].len(), 2);
        assert_eq!(grouped[&'b'].len(), 1);
    }

    #[test]
    fn running_sum_with_scan() {
        let sums: Vec<i32> = [1, 2, 3]
            .iter()
            .scan(0, |acc, &n| {
                *acc += n;
                Some(*acc)
            })
            .collect();
        assert_eq!(sums, vec![1, 3, 6]);
    }
}
