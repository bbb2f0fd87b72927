use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Formatter};

use rustc_hash::FxHashMap;

use crate::call::{Callable, FallibleCallable, Key};

/// A memoizing wrapper around a pure callable.
///
/// Owns one callable and a store from argument keys to results. The store
/// starts empty, grows by one entry per distinct key and is emptied only by
/// [`clear`](Self::clear). There is no eviction; a long-lived wrapper fed
/// ever-new keys grows without bound.
///
/// The key type usually follows from the callable, but binding to one
/// signature among same-named candidates requires fixing it explicitly, with
/// a turbofish or an `as fn(..) -> _` cast:
///
/// ```
/// let mut sub = memofn::Memo::new(i32::wrapping_sub as fn(i32, i32) -> i32);
/// assert_eq!(sub.invoke((4, 3)), 1);
/// ```
///
/// The wrapper is `&mut self` throughout, so sharing one instance across
/// threads without external synchronization is unrepresentable in safe code.
pub struct Memo<A, F>
where
    F: Callable<A>,
{
    function: F,
    store: FxHashMap<A, F::Output>,
}

impl<A, F> Memo<A, F>
where
    A: Key,
    F: Callable<A>,
{
    /// Wrap a callable.
    ///
    /// The store starts empty; the callable is not invoked.
    pub fn new(function: F) -> Self {
        Self { function, store: FxHashMap::default() }
    }

    /// Return the cached result for `args`, or invoke the callable and
    /// store its result.
    ///
    /// The callable runs at most once per distinct key: the first time the
    /// key appears and never again until the store is cleared. The lookup
    /// and the insertion share a single search through the entry API. A
    /// panic unwinding out of the callable leaves the store without an
    /// entry for the key.
    pub fn invoke(&mut self, args: A) -> F::Output
    where
        F::Output: Clone,
    {
        match self.store.entry(args) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(slot) => {
                let output = self.function.call(slot.key().clone());
                slot.insert(output).clone()
            }
        }
    }

    /// Empty the store.
    ///
    /// The bound callable is retained; every previously cached key is a
    /// miss on its next call.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// The number of cached results.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store holds no results.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether a result for `args` is cached.
    pub fn contains(&self, args: &A) -> bool {
        self.store.contains_key(args)
    }
}

impl<A, F> Clone for Memo<A, F>
where
    A: Key,
    F: Callable<A> + Clone,
    F::Output: Clone,
{
    /// Duplicates the callable and the entire store. The copies diverge
    /// afterwards: an entry added to one does not appear in the other.
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            store: self.store.clone(),
        }
    }
}

impl<A, F> Debug for Memo<A, F>
where
    F: Callable<A>,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Memo")
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}

/// A memoizing wrapper around a fallible pure callable.
///
/// Like [`Memo`], but for callables returning `Result<T, E>`. Only
/// successful results enter the store; an `Err` propagates to the caller
/// unchanged and the failing key stays absent, so the next call with that
/// key invokes the callable again.
///
/// ```
/// let mut parse = memofn::TryMemo::new(|s: String| s.parse::<u32>());
/// assert_eq!(parse.invoke(("42".into(),)), Ok(42));
/// assert!(parse.invoke(("nope".into(),)).is_err());
/// assert_eq!(parse.len(), 1); // The failure was not stored.
/// ```
pub struct TryMemo<A, F>
where
    F: FallibleCallable<A>,
{
    function: F,
    store: FxHashMap<A, F::Ok>,
}

impl<A, F> TryMemo<A, F>
where
    A: Key,
    F: FallibleCallable<A>,
{
    /// Wrap a fallible callable.
    ///
    /// The store starts empty; the callable is not invoked.
    pub fn new(function: F) -> Self {
        Self { function, store: FxHashMap::default() }
    }

    /// Return the cached result for `args`, or invoke the callable and
    /// store its result on success.
    ///
    /// A hit never invokes the callable and therefore never fails. On a
    /// miss, an `Err` is returned verbatim and nothing is stored.
    pub fn invoke(&mut self, args: A) -> Result<F::Ok, F::Error>
    where
        F::Ok: Clone,
    {
        match self.store.entry(args) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(slot) => {
                let value = self.function.try_call(slot.key().clone())?;
                Ok(slot.insert(value).clone())
            }
        }
    }

    /// Empty the store.
    ///
    /// The bound callable is retained; every previously cached key is a
    /// miss on its next call.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// The number of cached results.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store holds no results.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether a result for `args` is cached.
    pub fn contains(&self, args: &A) -> bool {
        self.store.contains_key(args)
    }
}

impl<A, F> Clone for TryMemo<A, F>
where
    A: Key,
    F: FallibleCallable<A> + Clone,
    F::Ok: Clone,
{
    /// Duplicates the callable and the entire store. The copies diverge
    /// afterwards: an entry added to one does not appear in the other.
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            store: self.store.clone(),
        }
    }
}

impl<A, F> Debug for TryMemo<A, F>
where
    F: FallibleCallable<A>,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("TryMemo")
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}
