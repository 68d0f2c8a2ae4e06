//! The umbrella binary: prints the catalogue of demos with build and
//! platform information.
//!
//! Run with: cargo run --bin kitchen-sink

use colored::Colorize;

const DEMOS: &[(&str, &str)] = &[
    ("p01_literals", "numeric, string, char, and range literals"),
    ("p02_collections", "Vec, HashMap, BTreeMap, HashSet, VecDeque"),
    ("p03_operators", "arithmetic, overflow families, bitwise, destructuring"),
    ("p04_control_flow", "if/match/loops, slice patterns, labeled breaks"),
    ("p05_functions_closures", "Fn spectrum, currying, memoized Fibonacci"),
    ("p06_structs_traits", "methods, builders, composition over inheritance"),
    ("p07_modules_mixins", "namespaces, trait mixins, extension traits"),
    ("p08_operator_overloading", "a 2D vector with std::ops"),
    ("p09_iterators", "combinators, custom iterators, lazy pipelines"),
    ("p10_strings", "string methods, UTF-8, hashing"),
    ("p11_numbers", "integer/float methods, conversions, NaN"),
    ("p12_error_handling", "thiserror, ?, anyhow context, bounded retry"),
    ("p13_file_io", "files, paths, directory walks in scratch space"),
    ("p14_threads", "spawn/join, mutex counter, channels, rayon"),
    ("p15_coroutines", "generators from from_fn and successors"),
    ("p16_regex", "matching, captures, replacement, splitting"),
    ("p17_datetime", "chrono construction, parsing, arithmetic"),
    ("p18_serialization", "JSON, YAML, TOML, bincode with serde"),
    ("p19_macros", "macro_rules!: constructors, codegen, mini DSL"),
    ("p20_reflection", "Any downcasting, sizes, Drop order, Rc counts"),
    ("p21_patterns", "delegation, observer, singleton"),
    ("p22_cli_env", "clap parsing, environment variables"),
    ("p23_tasks", "a tiny task-runner DSL with dependencies"),
    ("p24_timing", "Instant stopwatches; criterion lives in benches/"),
    ("p25_random", "ranges, sampling, shuffling, seeded rngs"),
    ("p26_tracing", "structured events and spans"),
];

fn main() {
    let rule = "=".repeat(60);

    println!("{}", rule.bold());
    println!("{}", "rust-kitchen-sink - Rust Feature Demonstrations".bold().green());
    println!("{}", rule.bold());
    println!("Version:  {}", env!("CARGO_PKG_VERSION").cyan());
    println!("Platform: {} / {}", std::env::consts::OS.cyan(), std::env::consts::ARCH.cyan());
    println!(
        "Profile:  {}",
        if cfg!(debug_assertions) { "debug".yellow() } else { "release".green() }
    );
    println!("{}", rule.bold());
    println!("Each area of the language has its own runnable demo:\n");

    for (name, summary) in DEMOS {
        println!("  {}  {}", format!("{:24}", name).cyan(), summary);
    }

    println!("\nRun one with: {}", "cargo run --bin <name>".yellow());
    println!("{}", rule.bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_complete_and_unique() {
        assert_eq!(DEMOS.len(), 26);
        let names: std::collections::HashSet<&str> = DEMOS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), 26);
        assert!(DEMOS.iter().all(|(_, summary)| !summary.is_empty()));
    }
}
