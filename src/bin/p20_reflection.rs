//! Runtime Reflection and Value Lifecycle
//!
//! Run with: cargo run --bin p20_reflection

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

fn type_names() {
    println!("=== Type Names and Ids ===\n");

    println!("type_name of 42:        {}", std::any::type_name::<i32>());
    println!("type_name of \"s\":       {}", std::any::type_name::<&str>());
    println!("type_name of Vec<u8>:   {}", std::any::type_name::<Vec<u8>>());

    println!("TypeId i32 == i32:  {}", TypeId::of::<i32>() == TypeId::of::<i32>());
    println!("TypeId i32 == u32:  {}", TypeId::of::<i32>() == TypeId::of::<u32>());
}

fn describe(value: &dyn Any) -> String {
    // Downcasting is the runtime type query: ask, don't assume.
    if let Some(n) = value.downcast_ref::<i32>() {
        format!("an i32: {}", n)
    } else if let Some(s) = value.downcast_ref::<String>() {
        format!("a String: {:?}", s)
    } else if value.is::<f64>() {
        "some f64".to_string()
    } else {
        "something else".to_string()
    }
}

fn any_downcasting() {
    println!("\n=== Any Downcasting ===\n");

    let mixed: Vec<Box<dyn Any>> = vec![
        Box::new(42i32),
        Box::new(String::from("hello")),
        Box::new(2.5f64),
        Box::new(vec![1u8]),
    ];

    for value in &mixed {
        println!("  {}", describe(value.as_ref()));
    }
}

fn sizes_and_alignment() {
    println!("\n=== Sizes and Alignment ===\n");

    println!("size_of::<u8>()        = {}", mem::size_of::<u8>());
    println!("size_of::<u64>()       = {}", mem::size_of::<u64>());
    println!("size_of::<Option<u8>>()= {}", mem::size_of::<Option<u8>>());
    println!("size_of::<&u64>()      = {}", mem::size_of::<&u64>());
    println!("size_of::<String>()    = {}", mem::size_of::<String>());
    println!("align_of::<u64>()      = {}", mem::align_of::<u64>());

    // Niche optimization: Option<&T> costs nothing extra.
    println!("size_of::<Option<&u64>>() = {}", mem::size_of::<Option<&u64>>());
}

fn reference_counts() {
    println!("\n=== Rc Strong Counts ===\n");

    let shared = Rc::new(vec![1, 2, 3]);
    println!("after creation:   {}", Rc::strong_count(&shared));

    let second = Rc::clone(&shared);
    let third = Rc::clone(&shared);
    println!("after two clones: {}", Rc::strong_count(&shared));

    drop(second);
    println!("after one drop:   {}", Rc::strong_count(&shared));
    drop(third);
    println!("back to:          {}", Rc::strong_count(&shared));
}

/// Drop is the finalizer, except it runs deterministically at scope exit.
struct Tracked {
    label: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.label);
        println!("  dropping {}", self.label);
    }
}

fn drop_order() {
    println!("\n=== Drop Order ===\n");

    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let _first = Tracked { label: "first", log: Rc::clone(&log) };
        let _second = Tracked { label: "second", log: Rc::clone(&log) };
        println!("leaving scope:");
    }
    // Locals drop in reverse declaration order.
    println!("observed order: {:?}", log.borrow());

    let early = Tracked { label: "early", log: Rc::clone(&log) };
    drop(early);
    println!("explicit drop runs immediately, before scope end");
}

fn main() {
    println!("=== Reflection and Lifecycle Demo ===\n");

    type_names();
    any_downcasting();
    sizes_and_alignment();
    reference_counts();
    drop_order();

    println!("\n=== Key Points ===");
    println!("1. Reflection is opt-in and narrow: type_name, TypeId, Any");
    println!("2. downcast_ref asks 'is this a T?' at runtime");
    println!("3. Drop replaces finalizers and runs at a known point");
    println!("4. Rc counts are inspectable; there is no garbage collector");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_identifies_types() {
        assert_eq!(describe(&42i32), "an i32: 42");
        assert_eq!(describe(&String::from("x")), "a String: \"x\"");
        assert_eq!(describe(&1.5f64), "some f64");
        assert_eq!(describe(&vec![1u8]), "something else");
    }

    #[test]
    fn type_ids_distinguish_types() {
        assert_eq!(TypeId::of::<String>(), TypeId::of::<String>());
        assert_ne!(TypeId::of::<i32>(), TypeId::of::<i64>());
    }

    #[test]
    fn drop_runs_in_reverse_declaration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let _a = Tracked { label: "a", log: Rc::clone(&log) };
            let _b = Tracked { label: "b", log: Rc::clone(&log) };
        }
        assert_eq!(*log.borrow(), vec!["b", "a"]);
    }

    #[test]
    fn strong_count_tracks_clones() {
        let rc = Rc::new(1);
        assert_eq!(Rc::strong_count(&rc), 1);
        let clone = Rc::clone(&rc);
        assert_eq!(Rc::strong_count(&rc), 2);
        drop(clone);
        assert_eq!(Rc::strong_count(&rc), 1);
    }

    #[test]
    fn niche_optimization_keeps_option_ref_thin() {
        assert_eq!(mem::size_of::<Option<&u64>>(), mem::size_of::<&u64>());
    }
}
