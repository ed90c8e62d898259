// Copyright (c) 2026 The Mayhap Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Fallbacks for absent values.
//!
//! `otherwise` and `or` accept three spellings of a fallback: a ready value
//! (`otherwise(8080)`), an explicit slot (`otherwise(Slot::Null)`, to clear
//! instead of fill), and a deferred computation (`otherwise(Defer(|| ...))`)
//! that runs only if the wrapper is actually absent. The `Fallback` trait
//! unifies the three behind one method parameter.

use crate::slot::Slot;

/// Marker for fallbacks given as ready values or slots.
#[derive(Debug, Clone, Copy)]
pub struct Immediate;

/// Marker for fallbacks computed on demand.
#[derive(Debug, Clone, Copy)]
pub struct Deferred;

/// Wraps a closure so the fallback is computed only when it is needed.
///
/// The closure returns a `Slot`, so a deferred fallback can itself decide to
/// stay absent (`Defer(|| Slot::Null)`) or to abort the chain by panicking
/// (see `error::fail`).
///
/// # Examples
///
/// ```rust
/// use mayhap_core::fp::fallback::{Defer, Fallback};
/// use mayhap_core::slot::Slot;
///
/// let fallback = Defer(|| Slot::Value(expensive_default()));
/// assert_eq!(fallback.resolve(), Slot::Value(42));
///
/// fn expensive_default() -> i32 {
///     42
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Defer<F>(pub F);

/// A replacement for an absent value.
///
/// The `M` marker parameter distinguishes the ready-value impls from the
/// deferred-closure impl so that all three can coexist; callers never name
/// it, inference always picks the single matching impl.
///
/// # Examples
///
/// ```rust
/// use mayhap_core::fp::fallback::{Defer, Fallback};
/// use mayhap_core::slot::Slot;
///
/// fn resolve<M>(fallback: impl Fallback<i32, M>) -> Slot<i32> {
///     fallback.resolve()
/// }
///
/// assert_eq!(resolve(7), Slot::Value(7));
/// assert_eq!(resolve(Slot::Null), Slot::Null);
/// assert_eq!(resolve(Defer(|| Slot::Value(7))), Slot::Value(7));
/// ```
pub trait Fallback<T, M> {
    /// Resolves the fallback into a slot.
    fn resolve(self) -> Slot<T>;
}

impl<T> Fallback<T, Immediate> for T {
    /// A plain value is always a present fallback.
    #[inline]
    fn resolve(self) -> Slot<T> {
        Slot::Value(self)
    }
}

impl<T> Fallback<T, Immediate> for Slot<T> {
    /// An explicit slot stands for itself, absence kind included.
    #[inline]
    fn resolve(self) -> Slot<T> {
        self
    }
}

impl<T, F> Fallback<T, Deferred> for Defer<F>
where
    F: FnOnce() -> Slot<T>,
{
    #[inline]
    fn resolve(self) -> Slot<T> {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve<M>(fallback: impl Fallback<i32, M>) -> Slot<i32> {
        fallback.resolve()
    }

    #[test]
    fn test_plain_value_resolves_present() {
        assert_eq!(resolve(9), Slot::Value(9));
    }

    #[test]
    fn test_slot_resolves_to_itself() {
        assert_eq!(resolve(Slot::Value(9)), Slot::Value(9));
        assert_eq!(resolve(Slot::Missing), Slot::Missing);
        assert_eq!(resolve(Slot::Null), Slot::Null);
    }

    #[test]
    fn test_deferred_resolves_lazily() {
        assert_eq!(resolve(Defer(|| Slot::Value(9))), Slot::Value(9));
        assert_eq!(resolve(Defer(|| Slot::Null)), Slot::Null);
    }

    #[test]
    fn test_deferred_is_not_run_until_resolved() {
        // Constructing and dropping the fallback must not run the closure.
        let _fallback = Defer(|| -> Slot<i32> { panic!("resolved too early") });
    }

    #[test]
    fn test_slot_of_slot_reads_as_plain_value() {
        // When the target type is itself a slot, a slot argument is the
        // plain-value fallback for it.
        let nested: Slot<Slot<i32>> = Fallback::<Slot<i32>, _>::resolve(Slot::Value(1));
        assert_eq!(nested, Slot::Value(Slot::Value(1)));
    }
}
