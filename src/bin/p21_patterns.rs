//! Delegation, Observer, Singleton
//!
//! Run with: cargo run --bin p21_patterns

use std::ops::Deref;
use std::sync::OnceLock;

/// Explicit delegation: the wrapper owns the policy, the Vec does the work.
/// Only the forwarded methods become part of the wrapper's API.
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Decoration over delegation: same surface plus one new ability.
pub struct EchoStack<T: Clone> {
    inner: Stack<T>,
}

impl<T: Clone> EchoStack<T> {
    pub fn new() -> Self {
        EchoStack { inner: Stack::new() }
    }

    pub fn push_twice(&mut self, item: T) {
        self.inner.push(item.clone());
        self.inner.push(item);
    }
}

// Deref exposes the delegate's whole read surface. Convenient, but it
// leaks every inner method into the wrapper's API, so use it sparingly.
impl<T: Clone> Deref for EchoStack<T> {
    type Target = Stack<T>;

    fn deref(&self) -> &Stack<T> {
        &self.inner
    }
}

fn delegation() {
    println!("=== Delegation ===\n");

    let mut stack = Stack::new();
    stack.push("a");
    stack.push("b");
    println!("len {}, popped {:?}", stack.len(), stack.pop());
    println!("empty? {}", stack.is_empty());

    let mut echo = EchoStack::new();
    echo.push_twice(7);
    // len() reaches the inner stack through Deref.
    println!("after push_twice: len = {}", echo.len());
}

/// Observer: subscribers implement one trait, the subject owns them.
pub trait Observer {
    fn update(&mut self, event: &str);
}

#[derive(Default)]
pub struct Subject {
    observers: Vec<Box<dyn Observer>>,
}

impl Subject {
    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn notify_observers(&mut self, event: &str) {
        for observer in &mut self.observers {
            observer.update(event);
        }
    }
}

struct Logger {
    seen: Vec<String>,
}

impl Observer for Logger {
    fn update(&mut self, event: &str) {
        self.seen.push(event.to_string());
        println!("  logger recorded: {} ({} so far)", event, self.seen.len());
    }
}

struct Alarm;

impl Observer for Alarm {
    fn update(&mut self, event: &str) {
        if event.contains("critical") {
            println!("  ALARM: {}", event);
        }
    }
}

/// Closure-based variant: no trait, just boxed callbacks.
#[derive(Default)]
pub struct Signal {
    handlers: Vec<Box<dyn FnMut(&str)>>,
}

impl Signal {
    pub fn connect(&mut self, handler: impl FnMut(&str) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn emit(&mut self, event: &str) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }
}

fn observers() {
    println!("\n=== Observer ===\n");

    let mut subject = Subject::default();
    subject.add_observer(Box::new(Logger { seen: Vec::new() }));
    subject.add_observer(Box::new(Alarm));

    subject.notify_observers("deploy finished");
    subject.notify_observers("critical: disk full");

    let mut signal = Signal::default();
    let mut count = 0;
    signal.connect(move |event| println!("  closure handler got: {}", event));
    signal.connect(move |_| {
        count += 1;
        println!("  counting handler at {}", count);
    });
    signal.emit("something happened");
    signal.emit("something else");
}

/// One shared instance for the whole process, created on first use.
#[derive(Debug)]
pub struct AppRegistry {
    pub name: &'static str,
}

static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();

pub fn registry() -> &'static AppRegistry {
    REGISTRY.get_or_init(|| AppRegistry { name: "kitchen-sink" })
}

fn singleton() {
    println!("\n=== Singleton ===\n");

    let first = registry();
    let second = registry();
    println!("registry name: {}", first.name);
    println!("same instance: {}", std::ptr::eq(first, second));
}

fn main() {
    println!("=== Patterns Demo ===\n");

    delegation();
    observers();
    singleton();

    println!("\n=== Key Points ===");
    println!("1. Forwarding methods keeps the wrapper's API intentional");
    println!("2. Deref delegation trades control for convenience");
    println!("3. Observers are trait objects or boxed closures");
    println!("4. OnceLock gives a lazy, thread-safe process singleton");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_delegates() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Some(2));
        assert!(!s.is_empty());
    }

    #[test]
    fn echo_stack_doubles() {
        let mut e = EchoStack::new();
        e.push_twice("x");
        assert_eq!(e.len(), 2);
    }

    struct Counting {
        count: std::rc::Rc<std::cell::Cell<u32>>,
    }

    impl Observer for Counting {
        fn update(&mut self, _event: &str) {
            self.count.set(self.count.get() + 1);
        }
    }

    #[test]
    fn all_observers_are_notified() {
        let count = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut subject = Subject::default();
        subject.add_observer(Box::new(Counting { count: count.clone() }));
        subject.add_observer(Box::new(Counting { count: count.clone() }));

        subject.notify_observers("event");
        subject.notify_observers("event");
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn signal_calls_every_handler() {
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut signal = Signal::default();
        for _ in 0..3 {
            let hits = hits.clone();
            signal.connect(move |_| hits.set(hits.get() + 1));
        }
        signal.emit("e");
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn singleton_returns_same_instance() {
        assert!(std::ptr::eq(registry(), registry()));
    }
}
