//! Command-Line Arguments and Environment Variables
//!
//! Run with: cargo run --bin p22_cli_env -- --verbose --name demo input.txt

use clap::Parser;
use std::env;

/// A small demo tool that echoes what it was asked to do.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "kitchen-sink-cli", version, about = "CLI parsing demo")]
struct Cli {
    /// Input file to pretend to process
    input: Option<String>,

    /// Print more detail
    #[arg(short, long)]
    verbose: bool,

    /// Name to greet
    #[arg(short, long, default_value = "world")]
    name: String,

    /// Repeat count
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

fn raw_args() {
    println!("=== Raw Arguments ===\n");

    // args() yields the program name first, then the rest.
    for (index, argument) in env::args().enumerate() {
        println!("  argv[{}] = {}", index, argument);
    }
}

fn parsed_args() {
    println!("\n=== Parsed Arguments (clap) ===\n");

    // Parse the real command line, falling back to defaults on error so
    // the demo keeps going no matter what was passed.
    let cli = Cli::try_parse().unwrap_or_else(|_| Cli {
        input: None,
        verbose: false,
        name: "world".to_string(),
        repeat: 1,
    });
    println!("parsed: {:?}", cli);

    // Parsing a synthesized argv is the testable path.
    let synthetic = Cli::try_parse_from(["demo", "--verbose", "--name", "alice", "data.csv"])
        .expect("synthetic argv is valid");
    println!("synthetic: {:?}", synthetic);

    for _ in 0..synthetic.repeat {
        println!("hello, {}!", synthetic.name);
    }
    if synthetic.verbose {
        println!("verbose mode on; input = {:?}", synthetic.input);
    }

    let invalid = Cli::try_parse_from(["demo", "--repeat", "not-a-number"]);
    println!("invalid argv rejected: {}", invalid.is_err());
}

fn environment() {
    println!("\n=== Environment Variables ===\n");

    match env::var("HOME") {
        Ok(home) => println!("HOME = {}", home),
        Err(e) => println!("HOME unreadable: {}", e),
    }

    // Fetch with a default.
    let custom = env::var("KITCHEN_SINK_MODE").unwrap_or_else(|_| "default".to_string());
    println!("KITCHEN_SINK_MODE (defaulted) = {}", custom);

    // Visible to this process and its children from here on.
    env::set_var("KITCHEN_SINK_MODE", "demo");
    println!("after set_var: {:?}", env::var("KITCHEN_SINK_MODE"));
    env::remove_var("KITCHEN_SINK_MODE");
    println!("after remove_var: {:?}", env::var("KITCHEN_SINK_MODE").ok());

    let path_like = env::vars().filter(|(key, _)| key.contains("PATH")).count();
    println!("variables mentioning PATH: {}", path_like);
}

fn compile_time_environment() {
    println!("\n=== Compile-Time Environment ===\n");

    println!("CARGO_PKG_NAME    = {}", env!("CARGO_PKG_NAME"));
    println!("CARGO_PKG_VERSION = {}", env!("CARGO_PKG_VERSION"));
    println!("OPTIONAL_MISSING  = {:?}", option_env!("OPTIONAL_MISSING"));
}

fn main() {
    println!("=== CLI and Environment Demo ===\n");

    raw_args();
    parsed_args();
    environment();
    compile_time_environment();

    println!("\n=== Key Points ===");
    println!("1. clap derives a parser from the struct definition");
    println!("2. try_parse_from makes argument parsing unit-testable");
    println!("3. env::var returns a Result; absence is not an error case to fear");
    println!("4. env! reads variables at compile time, not run time");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_options_and_positional() {
        let cli = Cli::try_parse_from(["demo", "--verbose", "--name", "alice", "in.txt"])
            .expect("valid argv");
        assert!(cli.verbose);
        assert_eq!(cli.name, "alice");
        assert_eq!(cli.input.as_deref(), Some("in.txt"));
        assert_eq!(cli.repeat, 1);
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let cli = Cli::try_parse_from(["demo"]).expect("valid argv");
        assert!(!cli.verbose);
        assert_eq!(cli.name, "world");
        assert_eq!(cli.input, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["demo", "--repeat", "x"]).is_err());
        assert!(Cli::try_parse_from(["demo", "--unknown-flag"]).is_err());
    }

    #[test]
    fn env_fetch_with_default() {
        let value = env::var("SURELY_UNSET_VARIABLE_12345").unwrap_or_else(|_| "fallback".into());
        assert_eq!(value, "fallback");
    }
}
