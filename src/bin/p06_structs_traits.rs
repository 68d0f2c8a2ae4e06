//! Structs, Methods, and Inheritance by Composition
//!
//! Run with: cargo run --bin p06_structs_traits

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

// One counter shared by every Person, the way a class-level variable would be.
static PERSON_COUNT: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    age: u32,
    email: Option<String>,
}

impl Person {
    pub const SPECIES: &'static str = "Homo sapiens";

    pub fn new(name: impl Into<String>, age: u32) -> Self {
        PERSON_COUNT.fetch_add(1, Ordering::Relaxed);
        Person {
            name: name.into(),
            age,
            email: None,
        }
    }

    /// How many Person values have been constructed so far.
    pub fn count() -> usize {
        PERSON_COUNT.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn introduce(&self) -> String {
        format!("Hi, I'm {} and I'm {} years old.", self.name, self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// Shared behavior for anything that can introduce itself.
pub trait Introduce {
    fn introduce(&self) -> String;
}

impl Introduce for Person {
    fn introduce(&self) -> String {
        Person::introduce(self)
    }
}

/// Employee extends Person by embedding one, not by subclassing.
/// The override defers to the embedded person and adds to it.
pub struct Employee {
    person: Person,
    employee_id: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: u32, employee_id: u32) -> Self {
        Employee {
            person: Person::new(name, age),
            employee_id,
        }
    }
}

impl Introduce for Employee {
    fn introduce(&self) -> String {
        format!(
            "{} I work here with ID: {}",
            self.person.introduce(),
            self.employee_id
        )
    }
}

fn struct_basics() {
    println!("=== Struct Basics ===\n");

    let mut alice = Person::new("Alice", 30);
    alice.set_email("alice@example.com");

    println!("{}", alice.introduce());
    println!("Display: {}", alice);
    println!("Debug:   {:?}", alice);
    println!("species: {}", Person::SPECIES);
    println!("getter:  name={}, age={}, email={:?}", alice.name(), alice.age(), alice.email());

    let bob = Person::new("Bob", 25);
    println!("constructed so far: {} (after {})", Person::count(), bob.name());
}

fn composition_over_inheritance() {
    println!("\n=== Composition over Inheritance ===\n");

    let employee = Employee::new("Carol", 41, 1042);
    println!("{}", Introduce::introduce(&employee));

    // Trait objects dispatch dynamically over the shared trait.
    let speakers: Vec<Box<dyn Introduce>> = vec![
        Box::new(Person::new("Dave", 29)),
        Box::new(Employee::new("Erin", 35, 7)),
    ];
    for speaker in &speakers {
        println!("- {}", speaker.introduce());
    }
}

// Tuple structs: named types with positional fields.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point(f64, f64);

// Unit struct: a type with no data, useful as a marker.
#[derive(Debug)]
struct Sentinel;

#[derive(Debug, Clone, PartialEq)]
struct Cat {
    name: String,
    age: u32,
}

impl Cat {
    fn meow(&self) -> String {
        format!("{} says meow!", self.name)
    }
}

fn record_types() {
    println!("\n=== Tuple Structs and Records ===\n");

    let origin = Point(0.0, 0.0);
    let p = Point(10.5, 20.3);
    println!("points: {:?} {:?}, x of p = {}", origin, p, p.0);
    println!("marker: {:?}", Sentinel);

    let cat = Cat {
        name: "Whiskers".to_string(),
        age: 3,
    };
    println!("{}", cat.meow());

    // Struct update syntax copies the rest from an existing value.
    let older = Cat { age: 4, ..cat.clone() };
    println!("next year: {:?}", older);
}

/// Builder for values with many optional fields.
#[derive(Debug, Default)]
struct ServerConfig {
    host: String,
    port: u16,
    workers: usize,
    verbose: bool,
}

#[derive(Default)]
struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    workers: Option<usize>,
    verbose: bool,
}

impl ServerConfigBuilder {
    fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    fn build(self) -> ServerConfig {
        ServerConfig {
            host: self.host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: self.port.unwrap_or(8080),
            workers: self.workers.unwrap_or(4),
            verbose: self.verbose,
        }
    }
}

fn builders() {
    println!("\n=== Builder ===\n");

    let defaults = ServerConfigBuilder::default().build();
    let tuned = ServerConfigBuilder::default()
        .host("0.0.0.0")
        .port(3000)
        .workers(16)
        .verbose()
        .build();

    println!("defaults: {:?}", defaults);
    println!("tuned:    {:?}", tuned);
    println!("tuned listens on {}:{} with {} workers", tuned.host, tuned.port, tuned.workers);
}

mod vault {
    /// Only the checked constructor is public; the raw field stays private.
    pub struct Pin {
        digits: String,
    }

    impl Pin {
        pub fn new(digits: &str) -> Option<Self> {
            if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
                Some(Pin { digits: digits.to_string() })
            } else {
                None
            }
        }

        pub fn masked(&self) -> String {
            format!("{}***", &self.digits[..1])
        }
    }
}

fn visibility() {
    println!("\n=== Visibility ===\n");

    match vault::Pin::new("1234") {
        Some(pin) => println!("valid pin, shown as {}", pin.masked()),
        None => println!("rejected"),
    }
    println!("\"12ab\" accepted? {}", vault::Pin::new("12ab").is_some());
    // vault::Pin { digits: ... } would not compile: the field is private.
}

fn main() {
    println!("=== Structs and Traits Demo ===\n");

    struct_basics();
    composition_over_inheritance();
    record_types();
    builders();
    visibility();

    println!("\n=== Key Points ===");
    println!("1. Associated consts and functions hang off the type, not instances");
    println!("2. Inheritance becomes composition plus a shared trait");
    println!("3. Struct update syntax fills remaining fields from a value");
    println!("4. Private fields make invalid states unconstructible");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_construction_counts() {
        // Other tests construct Persons concurrently, so check the delta
        // as a lower bound rather than an exact value.
        let before = Person::count();
        let _a = Person::new("X", 1);
        let _b = Person::new("Y", 2);
        assert!(Person::count() >= before + 2);
    }

    #[test]
    fn employee_overrides_introduce() {
        let e = Employee::new("Zed", 50, 9);
        let text = Introduce::introduce(&e);
        assert!(text.contains("Zed"));
        assert!(text.contains("ID: 9"));
    }

    #[test]
    fn builder_defaults_and_overrides() {
        let cfg = ServerConfigBuilder::default().port(9999).build();
        assert_eq!(cfg.port, 9999);
        assert_eq!(cfg.host, "127.0.0.1");
        assert!(!cfg.verbose);
    }

    #[test]
    fn pin_validation() {
        assert!(vault::Pin::new("0000").is_some());
        assert!(vault::Pin::new("12345").is_none());
        assert!(vault::Pin::new("12a4").is_none());
        assert_eq!(vault::Pin::new("9876").map(|p| p.masked()), Some("9***".into()));
    }

    #[test]
    fn struct_update_keeps_rest() {
        let cat = Cat { name: "Tom".into(), age: 2 };
        let next = Cat { age: 3, ..cat.clone() };
        assert_eq!(next.name, "Tom");
        assert_eq!(next.age, 3);
    }
}
