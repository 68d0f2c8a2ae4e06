//! Declarative Macros: constructors, generated methods, a mini DSL
//!
//! Run with: cargo run --bin p19_macros

use std::collections::HashMap;

/// A map literal, the way vec! is a vector literal.
macro_rules! hashmap {
    () => { HashMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = HashMap::new();
        $(map.insert($key, $value);)+
        map
    }};
}

fn constructor_macro() {
    println!("=== Constructor Macro ===\n");

    let scores: HashMap<&str, u32> = hashmap! {
        "alice" => 95,
        "bob" => 88,
    };
    println!("hashmap! built {} entries", scores.len());
    println!("alice -> {:?}", scores.get("alice"));

    let empty: HashMap<u8, u8> = hashmap!();
    println!("empty variant: {} entries", empty.len());
}

/// Generate one record-action method per listed name. Each expansion
/// stamps out a method body parameterized by the action string.
macro_rules! record_actions {
    ($($action:ident),+ $(,)?) => {
        $(
            pub fn $action(&self, id: u64) -> String {
                format!("{} record {} in {}", stringify!($action), id, self.table)
            }
        )+
    };
}

struct Repository {
    table: String,
}

impl Repository {
    fn new(table: impl Into<String>) -> Self {
        Repository { table: table.into() }
    }

    record_actions!(create, read, update, delete);
}

fn generated_methods() {
    println!("\n=== Generated Methods ===\n");

    let repo = Repository::new("users");
    println!("{}", repo.create(1));
    println!("{}", repo.read(1));
    println!("{}", repo.update(2));
    println!("{}", repo.delete(3));
}

/// A measurement DSL: `quantity!(3 m)` style unit tagging.
macro_rules! duration_secs {
    ($n:literal s) => { $n };
    ($n:literal min) => { $n * 60 };
    ($n:literal h) => { $n * 3600 };
}

fn mini_dsl() {
    println!("\n=== Mini DSL ===\n");

    println!("duration_secs!(90 s)  = {}", duration_secs!(90 s));
    println!("duration_secs!(5 min) = {}", duration_secs!(5 min));
    println!("duration_secs!(2 h)   = {}", duration_secs!(2 h));
}

fn compile_time_introspection() {
    println!("\n=== Compile-Time Introspection ===\n");

    println!("stringify!(a + b)   = {}", stringify!(a + b));
    println!("concat!(\"ab\", 3)    = {}", concat!("ab", 3));
    println!("package version     = {}", env!("CARGO_PKG_VERSION"));
    println!("option_env!(unset)  = {:?}", option_env!("MISSING_VAR"));
    println!("cfg!(unix)          = {}", cfg!(unix));
    println!("cfg!(debug_assertions) = {}", cfg!(debug_assertions));
    println!("file!():line!()     = {}:{}", file!(), line!());
}

macro_rules! max_of {
    ($only:expr) => { $only };
    ($first:expr, $($rest:expr),+) => {
        { let rest = max_of!($($rest),+); if $first > rest { $first } else { rest } }
    };
}

fn recursive_expansion() {
    println!("\n=== Recursive Expansion ===\n");

    println!("max_of!(3)          = {}", max_of!(3));
    println!("max_of!(3, 9, 4, 7) = {}", max_of!(3, 9, 4, 7));
}

fn main() {
    println!("=== Declarative Macros Demo ===\n");

    constructor_macro();
    generated_methods();
    mini_dsl();
    compile_time_introspection();
    recursive_expansion();

    println!("\n=== Key Points ===");
    println!("1. macro_rules! matches token patterns, not values");
    println!("2. Repetition ($(...)+) stamps out methods and arms");
    println!("3. stringify!/env!/cfg! run entirely at compile time");
    println!("4. Macros are hygienic: expansion can't capture your locals");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashmap_macro_builds_entries() {
        let m: HashMap<&str, i32> = hashmap! { "a" => 1, "b" => 2 };
        assert_eq!(m.len(), 2);
        assert_eq!(m["b"], 2);
    }

    #[test]
    fn generated_methods_exist_per_action() {
        let repo = Repository::new("orders");
        assert_eq!(repo.create(7), "create record 7 in orders");
        assert_eq!(repo.delete(8), "delete record 8 in orders");
    }

    #[test]
    fn dsl_unit_conversions() {
        assert_eq!(duration_secs!(90 s), 90);
        assert_eq!(duration_secs!(5 min), 300);
        assert_eq!(duration_secs!(2 h), 7200);
    }

    #[test]
    fn recursive_max() {
        assert_eq!(max_of!(1), 1);
        assert_eq!(max_of!(1, 5, 3), 5);
        assert_eq!(max_of!(-2, -7), -2);
    }
}
