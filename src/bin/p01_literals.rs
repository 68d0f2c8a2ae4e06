//! Basic Data Types and Literals
//!
//! Run with: cargo run --bin p01_literals

use num_complex::Complex64;
use num_rational::Rational64;

fn integer_literals() {
    println!("=== Integer Literals ===\n");

    let plain = 42;
    let separated = 1_000_000_000;
    let binary = 0b1010;
    let octal = 0o755;
    let hex = 0xFF;

    println!("plain:     {}", plain);
    println!("separated: {}", separated);
    println!("binary:    0b1010 = {}", binary);
    println!("octal:     0o755 = {}", octal);
    println!("hex:       0xFF = {}", hex);

    // Suffixes pin the type; otherwise inference picks i32 by default.
    let as_u8 = 255u8;
    let as_i64 = 9_000_000_000i64;
    println!("suffixed:  {}u8, {}i64", as_u8, as_i64);
}

fn float_literals() {
    println!("\n=== Float Literals ===\n");

    let pi = 3.14159;
    let scientific = 1.23e-4;
    let as_f32 = 2.5f32;

    println!("pi:         {}", pi);
    println!("scientific: {}", scientific);
    println!("f32:        {}", as_f32);
}

fn rational_and_complex() {
    println!("\n=== Rational and Complex Numbers ===\n");

    // Exact fractions: no rounding until you ask for a float.
    let three_quarters = Rational64::new(3, 4);
    let half = Rational64::new(1, 2);
    let sum = three_quarters + half;
    println!("3/4 + 1/2 = {}", sum);
    println!("3/4 as f64 ~ {}", *three_quarters.numer() as f64 / *three_quarters.denom() as f64);

    let c = Complex64::new(2.0, 3.0);
    let squared = c * c;
    println!("(2+3i)^2 = {}", squared);
    println!("|2+3i| = {}", c.norm());
}

fn string_literals() {
    println!("\n=== String Literals ===\n");

    let plain = "Hello, World!";
    let with_escapes = "Line 1\nLine 2\tTabbed";
    let raw = r"C:\no\escapes\here";
    let raw_with_quotes = r#"She said "hello""#;

    // Multi-line literals keep the line breaks as written.
    let multiline = "This is a multiline string\nwith explicit line breaks";

    let value = 42;
    let interpolated = format!("Hello, {}", value);
    let named = format!("{name} version {version}", name = "Rust", version = "2021");

    println!("plain:        {}", plain);
    println!("escapes:      {:?}", with_escapes);
    println!("raw:          {}", raw);
    println!("raw quoted:   {}", raw_with_quotes);
    println!("multiline:\n{}", multiline);
    println!("interpolated: {}", interpolated);
    println!("named args:   {}", named);
}

fn chars_bytes_bools() {
    println!("\n=== Chars, Bytes, Booleans ===\n");

    let letter = 'R';
    let unicode = '界';
    let byte = b'A';
    let byte_string: &[u8] = b"raw bytes";

    println!("char:        {} (U+{:04X})", letter, letter as u32);
    println!("unicode:     {}", unicode);
    println!("byte:        {} = {}", byte, byte as char);
    println!("byte string: {:?}", byte_string);

    let truthy = true;
    let falsy = false;
    println!("bools:       {} / {}", truthy, falsy);

    // There is no nil. Absence is a value of type Option<T>.
    let nothing: Option<i32> = None;
    let something = Some(7);
    println!("Option:      {:?} / {:?}", nothing, something);
}

fn ranges() {
    println!("\n=== Ranges ===\n");

    let exclusive: Vec<i32> = (1..10).collect();
    let inclusive: Vec<i32> = (1..=10).collect();
    let letters: Vec<char> = ('a'..='e').collect();

    println!("1..10  -> {:?}", exclusive);
    println!("1..=10 -> {:?}", inclusive);
    println!("'a'..='e' -> {:?}", letters);
    println!("(1..10).contains(&5) = {}", (1..10).contains(&5));
}

// Compile-time constant: inlined wherever used, must have an explicit type.
const MAX_RETRIES: u32 = 3;

// Static: a single memory location for the whole program.
static PROGRAM_NAME: &str = "kitchen-sink";

fn bindings_and_constants() {
    println!("\n=== Bindings and Constants ===\n");

    println!("const MAX_RETRIES = {}", MAX_RETRIES);
    println!("static PROGRAM_NAME = {}", PROGRAM_NAME);

    let immutable = 10;
    let mut mutable = 10;
    mutable += 5;
    println!("immutable: {}, mutable after +=5: {}", immutable, mutable);

    // Shadowing rebinds the name, even to a different type.
    let value = "42";
    let value: i32 = value.parse().unwrap_or(0);
    println!("shadowed \"42\" into {} + 1 = {}", value, value + 1);
}

fn main() {
    println!("=== Basic Data Types and Literals ===\n");

    integer_literals();
    float_literals();
    rational_and_complex();
    string_literals();
    chars_bytes_bools();
    ranges();
    bindings_and_constants();

    println!("\n=== Key Points ===");
    println!("1. Integer literals support binary, octal, hex, and _ separators");
    println!("2. Absence is Option<T>, never a null reference");
    println!("3. Shadowing rebinds a name; mut changes a value in place");
    println!("4. Exact rationals and complex numbers come from the num crates");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_arithmetic_is_exact() {
        let sum = Rational64::new(3, 4) + Rational64::new(1, 2);
        assert_eq!(sum, Rational64::new(5, 4));
    }

    #[test]
    fn complex_square() {
        let c = Complex64::new(2.0, 3.0);
        let sq = c * c;
        assert_eq!(sq, Complex64::new(-5.0, 12.0));
    }

    #[test]
    fn ranges_collect() {
        assert_eq!((1..4).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!((1..=4).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
