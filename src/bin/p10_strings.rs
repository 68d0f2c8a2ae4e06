//! String Processing, UTF-8, and Content Hashing
//!
//! Run with: cargo run --bin p10_strings

use sha2::{Digest, Sha256};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn method_tour() {
    println!("=== String Method Tour ===\n");

    println!("upcase:     {}", "hello".to_uppercase());
    println!("downcase:   {}", "HELLO".to_lowercase());
    println!("reverse:    {}", "hello".chars().rev().collect::<String>());
    println!("trim:       {:?}", "  hello  ".trim());
    println!("trim_start: {:?}", "  hello  ".trim_start());
    println!("repeat:     {}", "ab".repeat(3));

    let parts: Vec<&str> = "a,b,c".split(',').collect();
    println!("split:      {:?}", parts);
    println!("join:       {}", parts.join("-"));
    println!("splitn(2):  {:?}", "key=value=extra".splitn(2, '=').collect::<Vec<_>>());
    println!("lines:      {:?}", "one\ntwo".lines().collect::<Vec<_>>());

    println!("contains:   {}", "hello".contains("ell"));
    println!("starts:     {}", "hello".starts_with("hel"));
    println!("ends:       {}", "hello".ends_with("lo"));
    println!("find:       {:?}", "hello".find('l'));
    println!("replace:    {}", "Hello World".replace("World", "Rust"));
    println!("replacen:   {}", "aaabbb".replacen('a', "x", 1));
    println!("empty?:     {} / {}", "".is_empty(), "x".is_empty());

    // Capitalize is a three-liner, not a built-in.
    let capitalized = capitalize("rust");
    println!("capitalize: {}", capitalized);
}

fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn conversions() {
    println!("\n=== Parse and Format ===\n");

    let parsed: i32 = "42".parse().unwrap_or(0);
    let bad: Result<i32, _> = "not a number".parse::<i32>();
    println!("\"42\".parse::<i32>() = {}", parsed);
    println!("bad parse err: {}", bad.unwrap_err());

    println!("42.to_string()  = {:?}", 42.to_string());
    println!("format padded:  {:>8}|", "right");
    println!("format hex:     {:#06x}", 255);
    println!("format float:   {:.2}", 3.14159);
}

fn ownership_seam() {
    println!("\n=== String vs &str ===\n");

    let owned: String = String::from("owned heap data");
    let borrowed: &str = &owned;
    let literal: &'static str = "baked into the binary";

    // Functions should usually accept &str and let callers keep ownership.
    fn shout(s: &str) -> String {
        s.to_uppercase()
    }

    println!("borrowed view: {}", borrowed);
    println!("shout(&owned): {}", shout(&owned));
    println!("shout(literal): {}", shout(literal));
    println!("owned still usable: {} bytes", owned.len());
}

fn utf8() {
    println!("\n=== UTF-8 ===\n");

    let mixed = "Hello, 世界";
    println!("text:          {}", mixed);
    println!("len (bytes):   {}", mixed.len());
    println!("chars().count: {}", mixed.chars().count());
    println!("chars:         {:?}", mixed.chars().collect::<Vec<_>>());

    let bytes = mixed.as_bytes();
    println!("first 8 bytes: {:?}", &bytes[..8]);

    match std::str::from_utf8(bytes) {
        Ok(ok) => println!("from_utf8 ok:  {}", ok),
        Err(e) => println!("from_utf8 err: {}", e),
    }

    let invalid = [0xE4, 0xB8, 0xFF];
    println!("invalid bytes: {:?}", std::str::from_utf8(&invalid).err());
    println!("lossy:         {:?}", String::from_utf8_lossy(&invalid));
}

fn hashing() {
    println!("\n=== Hashing ===\n");

    // Hash for use in HashMap keys: fast, not cryptographic.
    let mut hasher = DefaultHasher::new();
    "hello".hash(&mut hasher);
    println!("DefaultHasher(\"hello\") = {:x}", hasher.finish());

    // Content digest: cryptographic, stable across runs.
    let digest = Sha256::digest(b"hello");
    println!("sha256(\"hello\") = {:x}", digest);
}

fn main() {
    println!("=== Strings Demo ===\n");

    method_tour();
    conversions();
    ownership_seam();
    utf8();
    hashing();

    println!("\n=== Key Points ===");
    println!("1. &str borrows, String owns; APIs should take &str");
    println!("2. len() counts bytes; chars().count() counts scalar values");
    println!("3. from_utf8 validates; from_utf8_lossy never fails");
    println!("4. DefaultHasher is for maps, Sha256 for stable digests");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("rust"), "Rust");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn multibyte_reversal_keeps_chars_intact() {
        let reversed: String = "ab界".chars().rev().collect();
        assert_eq!(reversed, "界ba");
    }

    #[test]
    fn byte_len_vs_char_count() {
        let s = "世界";
        assert_eq!(s.len(), 6);
        assert_eq!(s.chars().count(), 2);
    }

    #[test]
    fn invalid_utf8_is_rejected_then_replaced() {
        let bytes = [0xE4, 0xB8, 0xFF];
        assert!(std::str::from_utf8(&bytes).is_err());
        let lossy = String::from_utf8_lossy(&bytes);
        assert!(lossy.contains('\u{FFFD}'));
    }

    #[test]
    fn sha256_digest_is_stable() {
        let digest = format!("{:x}", Sha256::digest(b"hello"));
        assert_eq!(
            digest,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
