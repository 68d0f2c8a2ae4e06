//! Modules as Namespaces, Traits as Mixins, Extension Traits
//!
//! Run with: cargo run --bin p07_modules_mixins

use std::time::Duration;

mod utils {
    pub mod strings {
        pub fn reverse(input: &str) -> String {
            input.chars().rev().collect()
        }
    }

    pub mod math {
        pub fn square(n: i64) -> i64 {
            n * n
        }
    }

    // Re-export so callers can say utils::reverse.
    pub use strings::reverse;
}

fn namespaces() {
    println!("=== Modules as Namespaces ===\n");

    println!("utils::strings::reverse(\"hello\") = {}", utils::strings::reverse("hello"));
    println!("utils::math::square(12) = {}", utils::math::square(12));
    println!("re-exported: utils::reverse(\"abc\") = {}", utils::reverse("abc"));
}

const DEFAULT_GREETING: &str = "Hello";

/// A mixin: default methods that every implementor gets for free.
/// Implementors only supply the one method the defaults build on.
trait Greet {
    fn name(&self) -> String;

    fn say_hello(&self) -> String {
        format!("{} from {}", DEFAULT_GREETING, self.name())
    }

    fn say_hello_loudly(&self) -> String {
        self.say_hello().to_uppercase()
    }
}

struct Robot {
    id: u32,
}

struct Human {
    name: String,
}

impl Greet for Robot {
    fn name(&self) -> String {
        format!("robot-{}", self.id)
    }
}

impl Greet for Human {
    fn name(&self) -> String {
        self.name.clone()
    }

    // Overriding a default method.
    fn say_hello(&self) -> String {
        format!("Hi there, {} speaking", self.name)
    }
}

fn mixins() {
    println!("\n=== Traits as Mixins ===\n");

    let robot = Robot { id: 7 };
    let human = Human { name: "Alice".to_string() };

    println!("{}", robot.say_hello());
    println!("{}", robot.say_hello_loudly());
    println!("{}", human.say_hello());

    // Heterogeneous dispatch through the shared trait.
    let greeters: Vec<Box<dyn Greet>> = vec![Box::new(Robot { id: 1 }), Box::new(Human { name: "Bob".into() })];
    for g in &greeters {
        println!("- {}", g.say_hello());
    }
}

/// Extension trait: new methods on a type we don't own.
/// The method only exists where the trait is in scope, so the extension
/// is opt-in per module rather than a global patch.
trait Palindrome {
    fn is_palindrome(&self) -> bool;
}

impl Palindrome for str {
    fn is_palindrome(&self) -> bool {
        let normalized: Vec<char> = self
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_lowercase())
            .collect();
        normalized.iter().eq(normalized.iter().rev())
    }
}

/// Duration constructors on bare integers.
trait DurationExt {
    fn minutes(self) -> Duration;
    fn hours(self) -> Duration;
}

impl DurationExt for u64 {
    fn minutes(self) -> Duration {
        Duration::from_secs(self * 60)
    }

    fn hours(self) -> Duration {
        Duration::from_secs(self * 3600)
    }
}

fn extension_traits() {
    println!("\n=== Extension Traits ===\n");

    for phrase in ["racecar", "hello", "A man, a plan, a canal: Panama"] {
        println!("{:?} palindrome? {}", phrase, phrase.is_palindrome());
    }

    println!("5.minutes() = {:?}", 5u64.minutes());
    println!("2.hours()   = {:?}", 2u64.hours());
    println!("90.minutes() == 1.hours() + 30.minutes(): {}", 90u64.minutes() == 1u64.hours() + 30u64.minutes());
}

mod sealed_scope {
    // No `use super::Palindrome` here: "hello".is_palindrome() would not
    // compile in this module. Import scope is the refinement boundary.
    pub fn plain_len(s: &str) -> usize {
        s.len()
    }
}

fn scoping() {
    println!("\n=== Scoped Extensions ===\n");
    println!("extension methods vanish outside the importing scope");
    println!("sealed_scope::plain_len(\"abc\") = {}", sealed_scope::plain_len("abc"));
}

fn main() {
    println!("=== Modules and Mixins Demo ===\n");

    namespaces();
    mixins();
    extension_traits();
    scoping();

    println!("\n=== Key Points ===");
    println!("1. Modules nest into namespaces; pub use flattens them");
    println!("2. Trait default methods are mixins implementors can override");
    println!("3. Extension traits add methods to foreign types, scoped by use");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindromes() {
        assert!("racecar".is_palindrome());
        assert!("A man, a plan, a canal: Panama".is_palindrome());
        assert!(!"hello".is_palindrome());
        assert!("".is_palindrome());
    }

    #[test]
    fn duration_constructors() {
        assert_eq!(5u64.minutes(), Duration::from_secs(300));
        assert_eq!(2u64.hours(), Duration::from_secs(7200));
        assert_eq!(90u64.minutes(), 1u64.hours() + 30u64.minutes());
    }

    #[test]
    fn default_and_overridden_mixin_methods() {
        let robot = Robot { id: 3 };
        assert_eq!(robot.say_hello(), "Hello from robot-3");
        let human = Human { name: "Ada".into() };
        assert_eq!(human.say_hello(), "Hi there, Ada speaking");
        assert_eq!(human.say_hello_loudly(), "HI THERE, ADA SPEAKING");
    }
}
