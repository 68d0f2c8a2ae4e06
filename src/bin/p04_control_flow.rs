//! Control Flow: if, match, loops, labeled breaks
//!
//! Run with: cargo run --bin p04_control_flow

fn conditionals() {
    println!("=== Conditionals ===\n");

    let value = 7;
    if value > 10 {
        println!("big");
    } else if value > 5 {
        println!("medium");
    } else {
        println!("small");
    }

    // if is an expression, so it replaces the ternary operator.
    let answer = if value % 2 == 0 { "yes" } else { "no" };
    println!("even? {}", answer);

    let maybe: Option<i32> = Some(3);
    if let Some(n) = maybe {
        println!("if let unwrapped {}", n);
    }

    // let-else diverges on the miss arm.
    let Some(n) = maybe else {
        println!("nothing there");
        return;
    };
    println!("let-else bound {}", n);
}

/// Letter grade from a numeric score.
fn letter_grade(score: u32) -> char {
    match score {
        90..=100 => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}

fn day_type(day: &str) -> &'static str {
    match day {
        "Saturday" | "Sunday" => "Weekend",
        "Monday" | "Tuesday" | "Wednesday" | "Thursday" | "Friday" => "Weekday",
        _ => "Unknown",
    }
}

fn matching() {
    println!("\n=== Match ===\n");

    println!("85 -> {}", letter_grade(85));
    println!("Monday -> {}", day_type("Monday"));
    println!("Sunday -> {}", day_type("Sunday"));

    // Guards and @ bindings
    let pair = (2, -2);
    let described = match pair {
        (x, y) if x + y == 0 => format!("({}, {}) sums to zero", x, y),
        (x, _) if x % 2 == 0 => format!("first element {} is even", x),
        other => format!("nothing special about {:?}", other),
    };
    println!("{}", described);

    let age = 35;
    match age {
        n @ 13..=19 => println!("teenager at {}", n),
        n @ 20..=64 => println!("adult at {}", n),
        n => println!("age {}", n),
    }

    println!("matches!(3, 1..=5) = {}", matches!(3, 1..=5));
}

fn slice_patterns() {
    println!("\n=== Slice Patterns ===\n");

    let describe = |input: &[i32]| match input {
        [1, 2, 3] => "exactly [1, 2, 3]".to_string(),
        [1, rest @ ..] => format!("starts with 1, rest: {:?}", rest),
        [.., last] => format!("any non-empty, ends with {}", last),
        [] => "empty".to_string(),
    };

    println!("{}", describe(&[1, 2, 3]));
    println!("{}", describe(&[1, 9, 9]));
    println!("{}", describe(&[7, 8]));
    println!("{}", describe(&[]));
}

fn loops() {
    println!("\n=== Loops ===\n");

    let mut counter = 0;
    while counter < 5 {
        counter += 1;
    }
    println!("after while: {}", counter);

    while counter != 0 {
        counter -= 1;
    }
    println!("counted back down to {}", counter);

    // loop is an expression: break can carry a value out.
    let found = loop {
        counter += 1;
        if counter * counter > 50 {
            break counter;
        }
    };
    println!("first n with n^2 > 50: {}", found);

    for i in 1..=5 {
        print!("{} ", i);
    }
    println!();

    for (index, item) in ["a", "b", "c"].iter().enumerate() {
        println!("  {}: {}", index, item);
    }

    (0..5).for_each(|i| print!("{} ", i));
    println!();

    let mut skipped = Vec::new();
    for n in 0..10 {
        if n % 2 == 0 {
            continue;
        }
        skipped.push(n);
    }
    println!("odds via continue: {:?}", skipped);
}

/// Search a grid for the first pair whose product hits the target,
/// escaping both loops at once.
fn first_product_pair(target: i32) -> Option<(i32, i32)> {
    let mut hit = None;
    'rows: for i in 1..=3 {
        for j in 4..=6 {
            if i * j == target {
                hit = Some((i, j));
                break 'rows;
            }
        }
    }
    hit
}

fn labeled_breaks() {
    println!("\n=== Labeled Breaks ===\n");
    println!("i*j == 12 first at {:?}", first_product_pair(12));
    println!("i*j == 99 -> {:?}", first_product_pair(99));
}

fn main() {
    println!("=== Control Flow Demo ===\n");

    conditionals();
    matching();
    slice_patterns();
    loops();
    labeled_breaks();

    println!("\n=== Key Points ===");
    println!("1. if, match, and loop are expressions that produce values");
    println!("2. match arms take ranges, alternatives, guards, and @ bindings");
    println!("3. Slice patterns destructure by shape, with .. for the rest");
    println!("4. Labeled break escapes nested loops in one step");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries() {
        assert_eq!(letter_grade(100), 'A');
        assert_eq!(letter_grade(90), 'A');
        assert_eq!(letter_grade(89), 'B');
        assert_eq!(letter_grade(60), 'D');
        assert_eq!(letter_grade(59), 'F');
    }

    #[test]
    fn day_classification() {
        assert_eq!(day_type("Sunday"), "Weekend");
        assert_eq!(day_type("Thursday"), "Weekday");
        assert_eq!(day_type("Someday"), "Unknown");
    }

    #[test]
    fn labeled_break_search() {
        assert_eq!(first_product_pair(12), Some((2, 6)));
        assert_eq!(first_product_pair(4), Some((1, 4)));
        assert_eq!(first_product_pair(99), None);
    }
}
