//! Error Handling: typed errors, propagation, retries, panics
//!
//! Run with: cargo run --bin p12_error_handling

use anyhow::Context;
use thiserror::Error;

/// The library-side error type. Variants carry exactly the context the
/// caller needs to react; the `code` mirrors an upstream protocol field.
#[derive(Error, Debug, PartialEq)]
pub enum DemoError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("service rejected request: {message} (code {code})")]
    Rejected { message: String, code: u32 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("gave up after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

impl DemoError {
    pub fn code(&self) -> Option<u32> {
        match self {
            DemoError::Rejected { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Division that reports instead of panicking.
fn safe_divide(numerator: i64, denominator: i64) -> Result<i64, DemoError> {
    numerator
        .checked_div(denominator)
        .ok_or(DemoError::DivisionByZero)
}

fn result_basics() {
    println!("=== Result Basics ===\n");

    match safe_divide(10, 2) {
        Ok(q) => println!("10 / 2 = {}", q),
        Err(e) => println!("error: {}", e),
    }

    // The canonical caught failure: divide by zero, log, move on.
    match safe_divide(10, 0) {
        Ok(q) => println!("10 / 0 = {}", q),
        Err(e) => println!("caught: {}", e),
    }

    println!("ok_or default: {}", safe_divide(9, 0).unwrap_or(0));
}

fn custom_errors() {
    println!("\n=== Custom Error Types ===\n");

    let rejected = DemoError::Rejected {
        message: "quota exceeded".to_string(),
        code: 429,
    };
    println!("display: {}", rejected);
    println!("debug:   {:?}", rejected);
    println!("code():  {:?}", rejected.code());
    println!("code() of other variant: {:?}", DemoError::DivisionByZero.code());
}

fn parse_positive(input: &str) -> Result<u32, DemoError> {
    let n: u32 = input
        .trim()
        .parse()
        .map_err(|_| DemoError::InvalidInput(input.to_string()))?;
    if n == 0 {
        return Err(DemoError::InvalidInput("zero is not positive".to_string()));
    }
    Ok(n)
}

/// Each ? bubbles the error up one layer; only the top decides what to do.
fn average_of_inputs(inputs: &[&str]) -> Result<u32, DemoError> {
    let mut total = 0;
    for input in inputs {
        total += parse_positive(input)?;
    }
    Ok(total / inputs.len() as u32)
}

fn propagation() {
    println!("\n=== Propagation with ? ===\n");

    println!("average [\"10\", \"20\"]: {:?}", average_of_inputs(&["10", "20"]));
    println!("average [\"10\", \"x\"]:  {:?}", average_of_inputs(&["10", "x"]));
}

fn load_config(path: &str) -> anyhow::Result<String> {
    // Context turns a bare io::Error into a story the operator can follow.
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path))?;
    Ok(text)
}

fn anyhow_context() {
    println!("\n=== anyhow Context ===\n");

    match load_config("/nonexistent/config.toml") {
        Ok(_) => println!("unexpectedly found a config"),
        Err(e) => {
            println!("error: {}", e);
            for (i, cause) in e.chain().skip(1).enumerate() {
                println!("  cause {}: {}", i + 1, cause);
            }
        }
    }
}

/// Retry a fallible operation up to `max_attempts` times, no backoff.
/// The caller always learns which way it went.
fn retry<T, F>(max_attempts: u32, mut operation: F) -> Result<T, DemoError>
where
    F: FnMut(u32) -> Result<T, DemoError>,
{
    for attempt in 1..=max_attempts {
        if let Ok(value) = operation(attempt) {
            return Ok(value);
        }
    }
    Err(DemoError::RetriesExhausted {
        attempts: max_attempts,
    })
}

fn retries() {
    println!("\n=== Bounded Retry ===\n");

    // Succeeds on the third try.
    let result = retry(3, |attempt| {
        println!("  attempt {}", attempt);
        if attempt < 3 {
            Err(DemoError::Rejected {
                message: "not yet".to_string(),
                code: 503,
            })
        } else {
            Ok("success on attempt 3")
        }
    });
    println!("flaky operation: {:?}", result);

    // Never succeeds: the caller sees exhaustion, not silence.
    let doomed: Result<(), _> = retry(3, |_| {
        Err(DemoError::Rejected {
            message: "always down".to_string(),
            code: 500,
        })
    });
    println!("doomed operation: {:?}", doomed);
}

fn panics_vs_results() {
    println!("\n=== Panic vs Result ===\n");

    // Panics are for bugs, Results for expected failures. catch_unwind
    // exists for isolation boundaries, not routine control flow.
    let caught = std::panic::catch_unwind(|| {
        let empty: Vec<i32> = Vec::new();
        empty[0]
    });
    println!("indexing an empty vec panicked? {}", caught.is_err());

    struct Guard(&'static str);
    impl Drop for Guard {
        fn drop(&mut self) {
            println!("  Guard {:?} dropped during unwind", self.0);
        }
    }

    let _ = std::panic::catch_unwind(|| {
        let _guard = Guard("cleanup");
        panic!("boom");
    });
    println!("drops still ran while unwinding");
}

fn main() {
    println!("=== Error Handling Demo ===\n");

    // Keep the expected panic messages out of the demo transcript.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));

    result_basics();
    custom_errors();
    propagation();
    anyhow_context();
    retries();
    panics_vs_results();

    std::panic::set_hook(default_hook);

    println!("\n=== Key Points ===");
    println!("1. checked_div turns division by zero into a value, not a crash");
    println!("2. thiserror variants carry the fields callers react to");
    println!("3. ? moves errors up; anyhow::Context narrates the path");
    println!("4. Retry loops should report exhaustion, never swallow it");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_caught() {
        assert_eq!(safe_divide(10, 0), Err(DemoError::DivisionByZero));
        assert_eq!(safe_divide(10, 2), Ok(5));
    }

    #[test]
    fn rejected_exposes_code() {
        let e = DemoError::Rejected {
            message: "m".into(),
            code: 429,
        };
        assert_eq!(e.code(), Some(429));
        assert_eq!(e.to_string(), "service rejected request: m (code 429)");
        assert_eq!(DemoError::DivisionByZero.code(), None);
    }

    #[test]
    fn propagation_stops_at_first_error() {
        assert_eq!(average_of_inputs(&["10", "20"]), Ok(15));
        assert!(matches!(
            average_of_inputs(&["10", "x", "20"]),
            Err(DemoError::InvalidInput(_))
        ));
    }

    #[test]
    fn retry_succeeds_on_third_attempt() {
        let mut calls = 0;
        let result = retry(3, |attempt| {
            calls += 1;
            if attempt < 3 {
                Err(DemoError::DivisionByZero)
            } else {
                Ok(attempt)
            }
        });
        assert_eq!(result, Ok(3));
        assert_eq!(calls, 3);
    }

    #[test]
    fn retry_reports_exhaustion() {
        let result: Result<(), _> = retry(3, |_| Err(DemoError::DivisionByZero));
        assert_eq!(result, Err(DemoError::RetriesExhausted { attempts: 3 }));
    }

    #[test]
    fn retry_short_circuits_on_success() {
        let mut calls = 0;
        let result = retry(5, |_| {
            calls += 1;
            Ok("done")
        });
        assert_eq!(result, Ok("done"));
        assert_eq!(calls, 1);
    }
}
