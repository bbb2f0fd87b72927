//! Argument-keyed memoization.
//!
//! A [`Memo`] wraps a pure callable together with a store from argument
//! tuples to results. Calling [`invoke`](Memo::invoke) with arguments seen
//! before returns the stored result without running the callable again;
//! calling it with a new argument tuple runs the callable once and stores
//! the result. The store grows unbounded until [`clear`](Memo::clear).
//!
//! ```
//! use std::cell::Cell;
//! use memofn::Memo;
//!
//! let calls = Cell::new(0);
//! let mut sum = Memo::new(|a: u32, b: u32| {
//!     calls.set(calls.get() + 1);
//!     a + b
//! });
//!
//! assert_eq!(sum.invoke((1, 2)), 3); // Computed.
//! assert_eq!(sum.invoke((1, 2)), 3); // Cached.
//! assert_eq!(sum.invoke((2, 1)), 3); // Computed: a distinct key.
//! assert_eq!(calls.get(), 2);
//!
//! sum.clear();
//! assert_eq!(sum.invoke((1, 2)), 3); // Computed again.
//! assert_eq!(calls.get(), 3);
//! ```
//!
//! Caching is only sound for _pure_ callables: the result must depend on
//! nothing but the arguments. The wrapper cannot check this; a callable with
//! observable side effects is unsupported and simply has those effects
//! skipped on cache hits.

mod cache;
mod call;
mod prehashed;

pub use crate::cache::{Memo, TryMemo};
pub use crate::call::{Callable, FallibleCallable, Key};
pub use crate::prehashed::Prehashed;
