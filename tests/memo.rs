use std::cell::Cell;
use std::sync::atomic::Ordering;

use memofn::{Memo, Prehashed};

#[test]
fn test_sum() {
    let calls = Cell::new(0);
    let mut sum = Memo::new(|a: i32, b: i32| {
        calls.set(calls.get() + 1);
        a + b
    });

    assert_eq!(sum.invoke((1, 2)), 3); // [Miss] The store is empty.
    assert_eq!(sum.invoke((1, 2)), 3); // [Hit] Same arguments.
    assert_eq!(sum.invoke((2, 1)), 3); // [Miss] Distinct key, same result.
    assert_eq!(calls.get(), 2);

    sum.clear();
    assert!(sum.is_empty());

    assert_eq!(sum.invoke((1, 2)), 3); // [Miss] The store was cleared.
    assert_eq!(calls.get(), 3);
    assert_eq!(sum.len(), 1);
}

#[test]
fn test_zero_arity() {
    let calls = Cell::new(0);
    let mut greeting = Memo::new(|| {
        calls.set(calls.get() + 1);
        format!("The world is {}", "big")
    });

    assert_eq!(greeting.invoke(()), "The world is big"); // [Miss] The store is empty.
    assert_eq!(greeting.invoke(()), "The world is big"); // [Hit] Always a hit from now on.
    assert_eq!(greeting.invoke(()), "The world is big"); // [Hit] Always a hit from now on.
    assert_eq!(calls.get(), 1);
}

mod arith {
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static CALLS: AtomicUsize = AtomicUsize::new(0);

    pub fn apply(a: i32, b: i32) -> i32 {
        CALLS.fetch_add(1, Ordering::Relaxed);
        a - b
    }
}

mod text {
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static CALLS: AtomicUsize = AtomicUsize::new(0);

    pub fn apply(a: String, b: String) -> String {
        CALLS.fetch_add(1, Ordering::Relaxed);
        format!("{a}{b}")
    }
}

#[test]
fn test_same_named_bindings() {
    // Two same-named functions with different signatures. The cast fixes
    // which signature each wrapper binds to, once, at construction.
    let mut sub = Memo::new(arith::apply as fn(i32, i32) -> i32);
    let mut concat = Memo::new(text::apply as fn(String, String) -> String);

    assert_eq!(sub.invoke((4, 3)), 1); // [Miss] The store is empty.
    assert_eq!(sub.invoke((4, 3)), 1); // [Hit] Same numbers.
    assert_eq!(sub.invoke((1, 3)), -2); // [Miss] Different numbers.

    assert_eq!(concat.invoke(("z ".into(), "y".into())), "z y"); // [Miss]
    assert_eq!(concat.invoke(("z ".into(), "y".into())), "z y"); // [Hit]
    assert_eq!(concat.invoke(("c ".into(), "s".into())), "c s"); // [Miss]

    // Each wrapper invoked only its own binding and kept its own store.
    assert_eq!(arith::CALLS.load(Ordering::Relaxed), 2);
    assert_eq!(text::CALLS.load(Ordering::Relaxed), 2);
    assert_eq!(sub.len(), 2);
    assert_eq!(concat.len(), 2);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Lexicon {
    suffix: String,
}

impl Lexicon {
    /// Pure: reads only the receiver and the argument.
    fn decorate(&self, word: &str) -> String {
        format!("{word}{}", self.suffix)
    }
}

#[test]
fn test_bound_method() {
    // A bound method is wrapped as a closure that forwards the receiver as
    // an explicit leading argument. The receiver is an ordinary key
    // component, so calls on different receivers are distinct keys.
    let mut decorated = Memo::new(|recv: Lexicon, word: String| recv.decorate(&word));

    let bang = Lexicon { suffix: "!".into() };
    let dot = Lexicon { suffix: ".".into() };

    assert_eq!(decorated.invoke((bang.clone(), "hi".into())), "hi!"); // [Miss]
    assert_eq!(decorated.invoke((bang, "hi".into())), "hi!"); // [Hit]
    assert_eq!(decorated.invoke((dot, "hi".into())), "hi."); // [Miss] Different receiver.
    assert_eq!(decorated.len(), 2);
}

#[test]
fn test_clone_diverges() {
    let mut original = Memo::new(|x: u32| x * x);
    assert_eq!(original.invoke((3,)), 9);

    let mut copy = original.clone();
    assert_eq!(copy.invoke((4,)), 16);

    // The copy took the whole store with it and then diverged.
    assert!(copy.contains(&(3,)));
    assert_eq!(copy.len(), 2);
    assert!(!original.contains(&(4,)));
    assert_eq!(original.len(), 1);
}

#[test]
fn test_prehashed_key() {
    let calls = Cell::new(0);
    let mut total = Memo::new(|xs: Prehashed<Vec<u64>>| {
        calls.set(calls.get() + 1);
        xs.iter().sum::<u64>()
    });

    let xs = Prehashed::new(vec![1, 2, 3]);
    assert_eq!(total.invoke((xs.clone(),)), 6); // [Miss] The store is empty.
    assert_eq!(total.invoke((xs,)), 6); // [Hit] Same value, cached hash.
    assert_eq!(total.invoke((Prehashed::new(vec![4]),)), 4); // [Miss]
    assert_eq!(calls.get(), 2);
}
