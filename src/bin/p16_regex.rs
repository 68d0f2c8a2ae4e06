//! Regular Expressions: matching, captures, replacement
//!
//! Run with: cargo run --bin p16_regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Compiled once, shared everywhere. Compilation is the expensive part.
    static ref EMAIL: Regex = Regex::new(r"(\w+)@(\w+\.\w+)").expect("email pattern");
    static ref ISO_DATE: Regex =
        Regex::new(r"(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})").expect("date pattern");
}

fn matching() {
    println!("=== Matching ===\n");

    let re = Regex::new(r"World").expect("pattern");
    println!("is_match(\"Hello World\"): {}", re.is_match("Hello World"));
    println!("find: {:?}", re.find("Hello World").map(|m| (m.start(), m.end())));

    let case_insensitive = Regex::new(r"(?i)rust").expect("pattern");
    println!("(?i)rust matches \"I love RUST\": {}", case_insensitive.is_match("I love RUST"));

    let anchored = Regex::new(r"^start.*end$").expect("pattern");
    println!("anchored match: {}", anchored.is_match("start middle end"));
}

fn captures() {
    println!("\n=== Captures ===\n");

    if let Some(caps) = EMAIL.captures("contact user@example.com today") {
        println!("whole:  {}", &caps[0]);
        println!("user:   {}", &caps[1]);
        println!("domain: {}", &caps[2]);
    }

    if let Some(caps) = ISO_DATE.captures("released on 2024-03-15") {
        println!(
            "named: year={} month={} day={}",
            &caps["year"], &caps["month"], &caps["day"]
        );
    }

    println!("no match -> {:?}", ISO_DATE.captures("not a date").map(|_| ()));
}

fn scanning() {
    println!("\n=== Scanning ===\n");

    let digits = Regex::new(r"\d+").expect("pattern");
    let found: Vec<&str> = digits
        .find_iter("The number is 42 and 100")
        .map(|m| m.as_str())
        .collect();
    println!("all numbers: {:?}", found);

    for caps in EMAIL.captures_iter("a@x.com, b@y.org") {
        println!("  user {} at {}", &caps[1], &caps[2]);
    }
}

fn replacement() {
    println!("\n=== Replacement ===\n");

    let world = Regex::new(r"World").expect("pattern");
    println!("replace_all: {}", world.replace_all("Hello World, World", "Rust"));

    let a = Regex::new(r"a").expect("pattern");
    println!("replace (first only): {}", a.replace("aaabbb", "x"));

    // Replacement strings can reference capture groups.
    let reordered = ISO_DATE.replace_all("due 2024-03-15", "$day/$month/$year");
    println!("group reference: {}", reordered);
}

fn splitting() {
    println!("\n=== Splitting ===\n");

    let comma = Regex::new(r"\s*,\s*").expect("pattern");
    let parts: Vec<&str> = comma.split("apple, banana ,cherry").collect();
    println!("split on padded commas: {:?}", parts);

    let whitespace = Regex::new(r"\s+").expect("pattern");
    println!("split words: {:?}", whitespace.split("one  two\tthree").collect::<Vec<_>>());
}

fn main() {
    println!("=== Regular Expressions Demo ===\n");

    matching();
    captures();
    scanning();
    replacement();
    splitting();

    println!("\n=== Key Points ===");
    println!("1. Compile patterns once; lazy_static makes that a habit");
    println!("2. Named captures document what each group means");
    println!("3. replace is first-match, replace_all is every match");
    println!("4. find_iter scans; split divides on the pattern");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_captures_extract_date_parts() {
        let caps = ISO_DATE.captures("2024-03-15").expect("should match");
        assert_eq!(&caps["year"], "2024");
        assert_eq!(&caps["month"], "03");
        assert_eq!(&caps["day"], "15");
    }

    #[test]
    fn email_captures() {
        let caps = EMAIL.captures("user@example.com").expect("should match");
        assert_eq!(&caps[1], "user");
        assert_eq!(&caps[2], "example.com");
        assert!(EMAIL.captures("not-an-email").is_none());
    }

    #[test]
    fn replace_first_vs_all() {
        let a = Regex::new(r"a").unwrap();
        assert_eq!(a.replace("aaa", "x"), "xaa");
        assert_eq!(a.replace_all("aaa", "x"), "xxx");
    }

    #[test]
    fn split_handles_padding() {
        let comma = Regex::new(r"\s*,\s*").unwrap();
        let parts: Vec<&str> = comma.split("a, b ,c").collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn find_iter_collects_all_numbers() {
        let digits = Regex::new(r"\d+").unwrap();
        let nums: Vec<&str> = digits.find_iter("42 and 100").map(|m| m.as_str()).collect();
        assert_eq!(nums, vec!["42", "100"]);
    }
}
