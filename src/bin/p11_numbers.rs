//! Numeric Operations: integers, floats, conversions
//!
//! Run with: cargo run --bin p11_numbers

fn integers() {
    println!("=== Integer Methods ===\n");

    println!("(-5).abs()      = {}", (-5i32).abs());
    println!("4 even?         = {}", 4 % 2 == 0);
    println!("5 odd?          = {}", 5 % 2 != 0);
    println!("(-3).signum()   = {}", (-3i32).signum());
    println!("2i32.pow(10)    = {}", 2i32.pow(10));
    println!("i32::MAX        = {}", i32::MAX);
    println!("i32::MIN        = {}", i32::MIN);
    println!("u8 range        = {}..={}", u8::MIN, u8::MAX);
    println!("7.div_euclid(2) = {}, 7.rem_euclid(2) = {}", 7i32.div_euclid(2), 7i32.rem_euclid(2));
    println!("count_ones(0b1011) = {}", 0b1011u8.count_ones());
    println!("leading_zeros(1u32) = {}", 1u32.leading_zeros());
}

fn conversions() {
    println!("\n=== Conversions ===\n");

    let wide: i64 = 300;
    let lossy = wide as u8;
    println!("300 as u8 = {} (truncates)", lossy);

    // try_from surfaces the loss instead of silently truncating.
    println!("u8::try_from(300i64) = {:?}", u8::try_from(wide));
    println!("u8::try_from(42i64)  = {:?}", u8::try_from(42i64));

    let promoted: f64 = 42i32.into();
    println!("42i32 into f64 = {}", promoted);
    println!("3.99f64 as i32 = {} (truncates toward zero)", 3.99f64 as i32);
    println!("42.to_string() = {:?}", 42.to_string());
}

/// Round to a fixed number of decimal places.
fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

fn floats() {
    println!("\n=== Float Methods ===\n");

    println!("3.14159 round(2) = {}", round_to(3.14159, 2));
    println!("3.14.ceil()   = {}", 3.14f64.ceil());
    println!("3.99.floor()  = {}", 3.99f64.floor());
    println!("(-3.5).trunc()= {}", (-3.5f64).trunc());
    println!("2.0.sqrt()    = {}", 2.0f64.sqrt());

    let inf = 1.0f64 / 0.0;
    let nan = f64::NAN;
    println!("1.0/0.0       = {} (is_infinite: {})", inf, inf.is_infinite());
    println!("NAN == NAN    = {} (is_nan: {})", nan == nan, nan.is_nan());

    // Never compare floats with ==; use a tolerance.
    let computed: f64 = 0.1 + 0.2;
    println!("0.1 + 0.2     = {:.17}", computed);
    println!("within 1e-10 of 0.3: {}", (computed - 0.3).abs() < 1e-10);
}

fn numeric_iteration() {
    println!("\n=== Numeric Iteration ===\n");

    print!("1 up to 5:   ");
    for i in 1..=5 {
        print!("{} ", i);
    }
    println!();

    print!("5 down to 1: ");
    for i in (1..=5).rev() {
        print!("{} ", i);
    }
    println!();

    print!("1 to 10 by 2: ");
    for i in (1..=10).step_by(2) {
        print!("{} ", i);
    }
    println!();

    let squares: Vec<i32> = (1..=3).map(|i| i * i).collect();
    println!("3 squares: {:?}", squares);
}

fn main() {
    println!("=== Numeric Operations Demo ===\n");

    integers();
    conversions();
    floats();
    numeric_iteration();

    println!("\n=== Key Points ===");
    println!("1. `as` truncates silently; try_from reports the loss");
    println!("2. NaN compares unequal to everything, including itself");
    println!("3. Compare floats with a tolerance, never ==");
    println!("4. Ranges plus rev/step_by cover the counting loops");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_to_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.675, 0), 3.0);
        // round() goes half away from zero
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn try_from_detects_overflow() {
        assert!(u8::try_from(300i64).is_err());
        assert_eq!(u8::try_from(255i64), Ok(255));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = f64::NAN;
        assert!(nan != nan);
        assert!(nan.is_nan());
    }

    #[test]
    fn stepped_range() {
        let stepped: Vec<i32> = (1..=10).step_by(3).collect();
        assert_eq!(stepped, vec![1, 4, 7, 10]);
    }
}
