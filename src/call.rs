use std::hash::Hash;

/// A type that can serve as a component of an argument key.
///
/// The store keeps keys as owned copies, locates them by hash and compares
/// them component-wise with `Eq`. A type without a well-defined equality
/// relation cannot be a key component; this surfaces as a missing trait
/// bound at compile time, never at runtime.
pub trait Key: Hash + Eq + Clone {}

impl<T: Hash + Eq + Clone> Key for T {}

/// A value that is invocable with the argument tuple `A`.
///
/// This is implemented for functions, function pointers and closures of
/// arity up to twelve. The tuple type pins down one concrete signature, so
/// binding among same-named candidates is resolved statically at
/// construction of the wrapper.
///
/// The callable must be pure: its result may depend only on its arguments.
pub trait Callable<A> {
    /// The type of value the callable produces.
    type Output;

    /// Invoke the callable with the given arguments.
    fn call(&self, args: A) -> Self::Output;
}

/// A callable that can fail.
///
/// Blanket-implemented for every [`Callable`] returning `Result<T, E>`.
/// Splitting the success and failure types apart lets [`TryMemo`] store only
/// successful results.
///
/// [`TryMemo`]: crate::TryMemo
pub trait FallibleCallable<A> {
    /// The success type, stored by the cache.
    type Ok;

    /// The failure type, propagated to the caller uncached.
    type Error;

    /// Invoke the callable with the given arguments.
    fn try_call(&self, args: A) -> Result<Self::Ok, Self::Error>;
}

impl<A, F, T, E> FallibleCallable<A> for F
where
    F: Callable<A, Output = Result<T, E>>,
{
    type Ok = T;
    type Error = E;

    fn try_call(&self, args: A) -> Result<T, E> {
        self.call(args)
    }
}

macro_rules! callable {
    ($($param:ident $idx:tt),*) => {
        #[allow(unused_variables)]
        impl<Ret, Fun, $($param),*> Callable<($($param,)*)> for Fun
        where
            Fun: Fn($($param),*) -> Ret,
        {
            type Output = Ret;

            fn call(&self, args: ($($param,)*)) -> Ret {
                self($(args.$idx),*)
            }
        }
    };
}

callable! {}
callable! { A 0 }
callable! { A 0, B 1 }
callable! { A 0, B 1, C 2 }
callable! { A 0, B 1, C 2, D 3 }
callable! { A 0, B 1, C 2, D 3, E 4 }
callable! { A 0, B 1, C 2, D 3, E 4, F 5 }
callable! { A 0, B 1, C 2, D 3, E 4, F 5, G 6 }
callable! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 }
callable! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8 }
callable! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9 }
callable! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10 }
callable! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11 }
