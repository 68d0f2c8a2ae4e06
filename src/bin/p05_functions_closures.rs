//! Functions, Closures, and Higher-Order Patterns
//!
//! Run with: cargo run --bin p05_functions_closures

use std::collections::HashMap;

fn simple() -> &'static str {
    "Hello"
}

/// Optional argument via Option; callers pass None for the default.
fn greet(name: &str, greeting: Option<&str>) -> String {
    format!("{}, {}!", greeting.unwrap_or("Hello"), name)
}

/// Keyword-style arguments: a parameter struct with defaults.
#[derive(Debug, Default)]
struct UserParams<'a> {
    name: &'a str,
    age: u32,
    email: Option<&'a str>,
}

fn create_user(params: UserParams) -> String {
    match params.email {
        Some(email) => format!("{} ({}) <{}>", params.name, params.age, email),
        None => format!("{} ({})", params.name, params.age),
    }
}

/// Variadic input is just a slice.
fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// Multiple returns are a tuple.
fn min_max(values: &[i32]) -> Option<(i32, i32)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}

fn factorial(n: u64) -> Option<u64> {
    if n <= 1 {
        Some(1)
    } else {
        n.checked_mul(factorial(n - 1)?)
    }
}

fn basics() {
    println!("=== Functions ===\n");

    println!("{}", simple());
    println!("{}", greet("World", None));
    println!("{}", greet("World", Some("Howdy")));
    println!(
        "{}",
        create_user(UserParams {
            name: "Alice",
            age: 30,
            ..Default::default()
        })
    );
    println!("sum(&[1..=4]) = {}", sum(&[1, 2, 3, 4]));
    println!("min_max = {:?}", min_max(&[3, 1, 4, 1, 5]));
    println!("factorial(10) = {:?}", factorial(10));
    println!("factorial(25) = {:?} (overflows u64)", factorial(25));
}

fn closures() {
    println!("\n=== Closures ===\n");

    let double = |x: i32| x * 2;
    println!("double(5) = {}", double(5));

    let add = |a: i32, b: i32| a + b;
    println!("add(2, 3) = {}", add(2, 3));

    // Closures capture their environment; that captured scope is the
    // closest thing to a first-class binding.
    let greeting = String::from("hi");
    let say = move || format!("{} from a captured binding", greeting);
    println!("{}", say());

    // Fn: reads captures. FnMut: mutates them. FnOnce: consumes them.
    let counter_base = 10;
    let reads = || counter_base + 1;

    let mut tally = 0;
    let mut mutates = |n: i32| tally += n;

    let owned = String::from("consumed");
    let consumes = move || owned;

    println!("Fn:     {}", reads());
    mutates(3);
    mutates(4);
    println!("FnMut:  tally = {}", tally);
    println!("FnOnce: {}", consumes());
}

fn apply<F: Fn(i32) -> i32>(f: F, arg: i32) -> i32 {
    f(arg)
}

fn apply_twice<F: Fn(i32) -> i32>(f: F, arg: i32) -> i32 {
    f(f(arg))
}

fn make_adder(n: i32) -> impl Fn(i32) -> i32 {
    move |x| x + n
}

fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

fn higher_order() {
    println!("\n=== Higher-Order Functions ===\n");

    println!("apply(double, 21) = {}", apply(|x| x * 2, 21));
    println!("apply_twice(+1, 5) = {}", apply_twice(|x| x + 1, 5));

    let add_ten = make_adder(10);
    println!("make_adder(10)(32) = {}", add_ten(32));

    // Currying: a closure that returns a closure.
    let multiply = |x: i32| move |y: i32| x * y;
    let double = multiply(2);
    let triple = multiply(3);
    println!("curried double(5) = {}", double(5));
    println!("curried triple(5) = {}", triple(5));

    let add_one = |x: i32| x + 1;
    let times_two = |x: i32| x * 2;
    let add_then_double = compose(add_one, times_two);
    println!("compose(+1, *2)(5) = {}", add_then_double(5));

    // Boxed closures when the type must be nameable.
    let ops: Vec<(&str, Box<dyn Fn(i32) -> i32>)> = vec![
        ("negate", Box::new(|x| -x)),
        ("square", Box::new(|x| x * x)),
    ];
    for (name, op) in &ops {
        println!("{}(7) = {}", name, op(7));
    }
}

/// Recursive Fibonacci with a per-instance memo table. Without the cache
/// the call tree is exponential; with it each value is computed once.
struct Fibonacci {
    cache: HashMap<u64, u64>,
}

impl Fibonacci {
    fn new() -> Self {
        Fibonacci { cache: HashMap::new() }
    }

    fn calculate(&mut self, n: u64) -> u64 {
        if n <= 1 {
            return n;
        }
        if let Some(&hit) = self.cache.get(&n) {
            return hit;
        }
        let value = self.calculate(n - 1) + self.calculate(n - 2);
        self.cache.insert(n, value);
        value
    }
}

fn memoization() {
    println!("\n=== Memoized Fibonacci ===\n");

    let mut fib = Fibonacci::new();
    for n in [10, 40, 90] {
        println!("fib({}) = {}", n, fib.calculate(n));
    }
    println!("cache holds {} entries", fib.cache.len());
}

fn main() {
    println!("=== Functions and Closures Demo ===\n");

    basics();
    closures();
    higher_order();
    memoization();

    println!("\n=== Key Points ===");
    println!("1. Optional and keyword arguments become Option and param structs");
    println!("2. Fn / FnMut / FnOnce describe how a closure touches its captures");
    println!("3. Currying and composition fall out of closures returning closures");
    println!("4. A HashMap cache turns exponential recursion linear");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_edges() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(25), None);
    }

    #[test]
    fn min_max_handles_empty() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[5]), Some((5, 5)));
        assert_eq!(min_max(&[3, 1, 4]), Some((1, 4)));
    }

    #[test]
    fn currying() {
        let multiply = |x: i32| move |y: i32| x * y;
        let double = multiply(2);
        assert_eq!(double(5), 10);
        assert_eq!(multiply(3)(5), 15);
    }

    #[test]
    fn composition_order() {
        let f = compose(|x: i32| x + 1, |x: i32| x * 2);
        assert_eq!(f(5), 12);
    }

    #[test]
    fn memoized_fibonacci_matches_iterative() {
        let mut fib = Fibonacci::new();
        let (mut a, mut b) = (0u64, 1u64);
        for n in 0..30 {
            assert_eq!(fib.calculate(n), a, "mismatch at n={}", n);
            let next = a + b;
            a = b;
            b = next;
        }
    }

    #[test]
    fn memo_cache_fills() {
        let mut fib = Fibonacci::new();
        fib.calculate(20);
        // 2..=20 are cached; 0 and 1 are base cases.
        assert_eq!(fib.cache.len(), 19);
    }
}
