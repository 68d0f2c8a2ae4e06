//! Operator Overloading with std::ops
//!
//! Run with: cargo run --bin p08_operator_overloading

use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Scalar multiplication: v * 2.0
impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn main() {
    println!("=== Operator Overloading Demo ===\n");

    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 4.0);

    println!("a = {}, b = {}", a, b);
    println!("a + b  = {}", a + b);
    println!("a - b  = {}", a - b);
    println!("b * 2.0 = {}", b * 2.0);
    println!("-a      = {}", -a);
    println!("a == a  = {}", a == a);
    println!("a[0], a[1] = {}, {}", a[0], a[1]);
    println!("a . b   = {}", a.dot(b));
    println!("|b|     = {}", b.length());

    let mut acc = Vec2::new(0.0, 0.0);
    for v in [a, b, Vec2::new(5.0, 6.0)] {
        acc += v;
    }
    println!("sum via += : {}", acc);

    println!("\n=== Key Points ===");
    println!("1. Each operator is a trait: Add, Sub, Mul, Neg, Index, ...");
    println!("2. Mul<f64> overloads against a different right-hand type");
    println!("3. Display defines the human-readable form used by {{}}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_sub_roundtrip() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(Vec2::new(3.0, 4.0) * 2.0, Vec2::new(6.0, 8.0));
    }

    #[test]
    fn negation_and_assign() {
        let mut v = Vec2::new(1.0, -2.0);
        assert_eq!(-v, Vec2::new(-1.0, 2.0));
        v += Vec2::new(1.0, 2.0);
        assert_eq!(v, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn indexing() {
        let v = Vec2::new(7.0, 8.0);
        assert_eq!(v[0], 7.0);
        assert_eq!(v[1], 8.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let v = Vec2::new(0.0, 0.0);
        let _ = v[2];
    }

    #[test]
    fn length_of_3_4_triangle() {
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn addition_commutes(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(a + b, b + a);
        }
    }
}
