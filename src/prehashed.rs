use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use siphasher::sip128::{Hasher128, SipHasher13};

/// A key component with a precomputed hash.
///
/// Useful when a large value recurs as an argument to a memoized callable:
/// the value is hashed once with a 128-bit SipHash at construction, and every
/// store lookup afterwards writes the cached hash instead of traversing the
/// value again. Recursive structures like trees benefit from prehashed
/// intermediate nodes.
///
/// Equality compares the wrapped values, with the cached hashes as a fast
/// negative check. Two keys are therefore equal exactly when their components
/// compare equal, the same contract as for plain key components.
#[derive(Copy, Clone)]
pub struct Prehashed<T> {
    /// The precomputed hash.
    hash: u128,
    /// The wrapped value.
    value: T,
}

impl<T: Hash> Prehashed<T> {
    /// Compute a value's hash and wrap it.
    #[inline]
    pub fn new(value: T) -> Self {
        let mut state = SipHasher13::new();
        value.hash(&mut state);
        Self { hash: state.finish128().as_u128(), value }
    }

    /// Return the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Prehashed<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: Hash> From<T> for Prehashed<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Hash for Prehashed<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u128(self.hash);
    }
}

impl<T: Debug> Debug for Prehashed<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: Default + Hash> Default for Prehashed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Eq> Eq for Prehashed<T> {}

impl<T: PartialEq> PartialEq for Prehashed<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.value == other.value
    }
}
