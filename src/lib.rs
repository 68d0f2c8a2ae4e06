//! # Rust Kitchen Sink
//!
//! A tour of idiomatic Rust, one runnable demo binary per language area.
//! Every binary is self-contained: run it, read its output top to bottom,
//! then read the source alongside. Nothing here shares state with anything
//! else, so the demos can be read in any order.
//!
//! ## Demos
//!
//! 1.  **Literals** (`p01_literals`)
//!     - Integer bases and digit separators, floats, scientific notation
//!     - Rational and complex numbers
//!     - String, raw string, char, and byte-string literals
//!     - Ranges; `const` vs `static` vs `let`
//!
//! 2.  **Collections** (`p02_collections`)
//!     - `Vec`, arrays, slices, `HashMap`, `BTreeMap`, `HashSet`, `VecDeque`
//!     - The entry API, set algebra, ordered iteration
//!
//! 3.  **Operators** (`p03_operators`)
//!     - Arithmetic and the checked/wrapping/saturating families
//!     - Three-way comparison with `Ordering`
//!     - Bitwise operators, destructuring with rest patterns
//!     - `Option` combinators as safe navigation
//!
//! 4.  **Control flow** (`p04_control_flow`)
//!     - `if` as an expression, `if let`, `let`-`else`
//!     - `match` with ranges, multi-patterns, guards, slice patterns
//!     - Loops, `break` with value, labeled break
//!
//! 5.  **Functions and closures** (`p05_functions_closures`)
//!     - Default/keyword-style arguments, variadic input as slices
//!     - The `Fn`/`FnMut`/`FnOnce` spectrum, currying, composition
//!     - A memoizing recursive Fibonacci
//!
//! 6.  **Structs and traits** (`p06_structs_traits`)
//!     - Methods, associated consts and functions, builders
//!     - Inheritance re-expressed as composition plus traits
//!
//! 7.  **Modules and mixins** (`p07_modules_mixins`)
//!     - Modules as namespaces, trait default methods as mixins
//!     - Extension traits on foreign types, scoped by `use`
//!
//! 8.  **Operator overloading** (`p08_operator_overloading`)
//!     - A 2D vector implementing the `std::ops` traits
//!
//! 9.  **Iterators** (`p09_iterators`)
//!     - The combinator catalogue, custom and infinite iterators
//!     - Lazy pipelines over unbounded sources
//!
//! 10. **Strings** (`p10_strings`)
//!     - The method tour, UTF-8 handling, content hashing
//!
//! 11. **Numbers** (`p11_numbers`)
//!     - Integer and float methods, conversions, special values
//!
//! 12. **Error handling** (`p12_error_handling`)
//!     - Typed errors with `thiserror`, `?` propagation, `anyhow` context
//!     - A bounded retry loop, panic vs `Result`
//!
//! 13. **File I/O** (`p13_file_io`)
//!     - Reading, writing, paths, directory walks, all in scratch space
//!
//! 14. **Threads** (`p14_threads`)
//!     - Spawn/join, the mutex-guarded shared counter, atomics
//!     - Scoped threads, channels, parallel iterators
//!
//! 15. **Coroutines** (`p15_coroutines`)
//!     - Cooperative generators from `iter::from_fn` and `successors`
//!
//! 16. **Regular expressions** (`p16_regex`)
//!     - Matching, captures, replacement, splitting
//!
//! 17. **Date and time** (`p17_datetime`)
//!     - Construction, parsing, formatting, arithmetic with `chrono`
//!
//! 18. **Serialization** (`p18_serialization`)
//!     - JSON, YAML, TOML, and binary round-trips with `serde`
//!
//! 19. **Macros** (`p19_macros`)
//!     - Declarative macros: constructors, generated methods, a mini DSL
//!
//! 20. **Reflection and lifecycle** (`p20_reflection`)
//!     - `Any` downcasting, type names, sizes, `Drop` order, `Rc` counts
//!
//! 21. **Patterns** (`p21_patterns`)
//!     - Delegation, observer, singleton
//!
//! 22. **CLI and environment** (`p22_cli_env`)
//!     - Argument parsing with `clap`, environment variables
//!
//! 23. **Task runner** (`p23_tasks`)
//!     - A tiny build-tool DSL: named tasks, dependencies, topological runs
//!
//! 24. **Timing** (`p24_timing`)
//!     - Wall-clock measurement; the real benchmarks live in `benches/`
//!
//! 25. **Random** (`p25_random`)
//!     - Ranges, sampling, shuffling, seeded reproducibility
//!
//! 26. **Tracing** (`p26_tracing`)
//!     - Structured events and spans with `tracing`
//!
//! The `kitchen-sink` binary prints this catalogue along with build and
//! platform information.
