//! Operators: arithmetic, comparison, bitwise, destructuring
//!
//! Run with: cargo run --bin p03_operators

use std::cmp::Ordering;

fn arithmetic() {
    println!("=== Arithmetic ===\n");

    println!("10 + 5  = {}", 10 + 5);
    println!("10 - 5  = {}", 10 - 5);
    println!("10 * 5  = {}", 10 * 5);
    println!("10 / 5  = {}", 10 / 5);
    println!("10 % 3  = {}", 10 % 3);
    println!("2u32.pow(8) = {}", 2u32.pow(8));

    // Integer division truncates; float division does not.
    println!("7 / 2   = {} (integer)", 7 / 2);
    println!("7.0/2.0 = {} (float)", 7.0 / 2.0);

    // % follows the sign of the dividend; rem_euclid is always non-negative.
    println!("-7 % 3           = {}", -7 % 3);
    println!("(-7).rem_euclid(3) = {}", (-7i32).rem_euclid(3));
}

fn overflow_families() {
    println!("\n=== Overflow: checked / wrapping / saturating ===\n");

    let max = u8::MAX;
    println!("u8::MAX = {}", max);
    println!("checked_add(1)    = {:?}", max.checked_add(1));
    println!("wrapping_add(1)   = {}", max.wrapping_add(1));
    println!("saturating_add(1) = {}", max.saturating_add(1));
    println!("overflowing_add(1)= {:?}", max.overflowing_add(1));
}

fn comparison() {
    println!("\n=== Comparison ===\n");

    println!("5 == 5: {}", 5 == 5);
    println!("5 != 4: {}", 5 != 4);
    println!("3 < 5:  {}", 3 < 5);
    println!("3 <= 3: {}", 3 <= 3);

    // Three-way comparison returns an Ordering rather than -1/0/1.
    let ord = 5.cmp(&3);
    println!("5.cmp(&3) = {:?}", ord);
    match ord {
        Ordering::Less => println!("  -> less"),
        Ordering::Equal => println!("  -> equal"),
        Ordering::Greater => println!("  -> greater"),
    }

    let mut values = vec![3, 1, 4, 1, 5];
    values.sort_by(|a, b| b.cmp(a));
    println!("sorted descending via cmp: {:?}", values);

    println!("min/max/clamp: {} {} {}", 3.min(7), 3.max(7), 12.clamp(0, 10));
}

fn logical_and_bitwise() {
    println!("\n=== Logical and Bitwise ===\n");

    println!("true && false = {}", true && false);
    println!("true || false = {}", true || false);
    println!("!true         = {}", !true);

    println!("5 & 3  = {}", 5 & 3);
    println!("5 | 3  = {}", 5 | 3);
    println!("5 ^ 3  = {}", 5 ^ 3);
    println!("!5i32  = {}", !5i32);
    println!("5 << 1 = {}", 5 << 1);
    println!("5 >> 1 = {}", 5 >> 1);
}

fn compound_assignment() {
    println!("\n=== Compound Assignment ===\n");

    let mut x = 10;
    x += 5;
    x -= 3;
    x *= 2;
    x /= 4;
    println!("10 += 5 -= 3 *= 2 /= 4 -> {}", x);

    // The assign-if-absent idiom uses Option, not a falsiness rule.
    let mut setting: Option<u32> = None;
    setting.get_or_insert(20);
    println!("get_or_insert(20) -> {:?}", setting);
}

fn destructuring() {
    println!("\n=== Destructuring with Rest Patterns ===\n");

    let numbers = [1, 2, 3, 4];
    let [init @ .., last] = numbers;
    println!("init: {:?}, last: {}", init, last);

    let [first, middle @ .., last] = [1, 2, 3, 4, 5];
    println!("first: {}, middle: {:?}, last: {}", first, middle, last);

    let (a, b) = (1, "two");
    println!("tuple: {} {}", a, b);

    // Merging maps, the spread-like way.
    use std::collections::HashMap;
    let base = HashMap::from([("name", "Rust"), ("edition", "2021")]);
    let mut merged = base.clone();
    merged.extend([("extra", "value")]);
    println!("merged map has {} entries", merged.len());
}

fn safe_navigation() {
    println!("\n=== Safe Navigation via Option ===\n");

    let present: Option<&str> = Some("hello");
    let absent: Option<&str> = None;

    // map / and_then never panic on None; they just stay None.
    println!("present.map(upcase) = {:?}", present.map(|s| s.to_uppercase()));
    println!("absent.map(upcase)  = {:?}", absent.map(|s| s.to_uppercase()));

    let length = absent.map(str::len).unwrap_or(0);
    println!("absent length with default: {}", length);

    fn first_char_upper(input: Option<&str>) -> Option<char> {
        let c = input?.chars().next()?;
        Some(c.to_ascii_uppercase())
    }
    println!("chained ?: {:?} / {:?}", first_char_upper(Some("rust")), first_char_upper(None));
}

fn main() {
    println!("=== Operators Demo ===\n");

    arithmetic();
    overflow_families();
    comparison();
    logical_and_bitwise();
    compound_assignment();
    destructuring();
    safe_navigation();

    println!("\n=== Key Points ===");
    println!("1. Overflow handling is explicit: checked, wrapping, saturating");
    println!("2. cmp returns an Ordering, which drives sort_by directly");
    println!("3. Rest patterns split a slice into head/middle/tail");
    println!("4. Option combinators replace null-safe navigation operators");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_families_behave() {
        assert_eq!(u8::MAX.checked_add(1), None);
        assert_eq!(u8::MAX.wrapping_add(1), 0);
        assert_eq!(u8::MAX.saturating_add(1), u8::MAX);
    }

    #[test]
    fn rem_euclid_is_non_negative() {
        assert_eq!(-7 % 3, -1);
        assert_eq!((-7i32).rem_euclid(3), 2);
    }

    #[test]
    fn rest_patterns_split() {
        let [first, middle @ .., last] = [1, 2, 3, 4, 5];
        assert_eq!(first, 1);
        assert_eq!(middle, [2, 3, 4]);
        assert_eq!(last, 5);
    }

    #[test]
    fn ordering_three_way() {
        assert_eq!(5.cmp(&3), Ordering::Greater);
        assert_eq!(3.cmp(&3), Ordering::Equal);
        assert_eq!(1.cmp(&3), Ordering::Less);
    }
}
