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

//! # Optional Wrapper
//!
//! The collapsed-absence family that reads every emptiness as "never set".
//! `Optional<T>` carries a plain `Option<T>` worth of state and offers the
//! same combinator surface as `Maybe<T>`; fallbacks that resolve to either
//! absence kind collapse into `None`.
//!
//! Use it at boundaries where the missing/cleared distinction carries no
//! meaning and a single absent state keeps signatures simple.

use crate::maybe::Maybe;
use mayhap_core::error::AbsentError;
use mayhap_core::fp::fallback::Fallback;
use mayhap_core::fp::proposition::Proposition;
use mayhap_core::slot::Slot;

/// An optional value with a single, "never set" absent state.
///
/// # Examples
///
/// ```rust
/// use mayhap_maybe::optional::{none, some};
///
/// let port = some("8080")
///     .pick(|raw| raw.parse::<u16>().ok())
///     .that(|port| *port >= 1024)
///     .otherwise(8080);
///
/// assert_eq!(port, some(8080));
/// assert_eq!(none::<u16>().or(4242), Some(4242));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

/// Wraps a present value.
#[inline]
pub fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// The absent wrapper.
#[inline]
pub fn none<T>() -> Optional<T> {
    Optional::None
}

/// Classifies an option into the matching wrapper variant.
#[inline]
pub fn optional<T>(value: Option<T>) -> Optional<T> {
    Optional::from(value)
}

impl<T> Optional<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the wrapper is empty.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Unwraps into a slot; this family's absence is the "never set" kind.
    #[inline]
    pub fn into_slot(self) -> Slot<T> {
        match self {
            Self::Some(value) => Slot::Value(value),
            Self::None => Slot::Missing,
        }
    }

    /// Unwraps into the raw `Option` carrier.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Extracts the present value, or reports the absence.
    #[inline]
    pub fn into_value(self) -> Result<T, AbsentError> {
        self.into_slot().into_value()
    }

    /// Chains a computation that itself may come up empty.
    #[inline]
    pub fn onto<U, F>(self, bind: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => bind(value),
            Self::None => Optional::None,
        }
    }

    /// Transforms the present value; a `None` result empties the wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_maybe::optional::{none, some};
    ///
    /// assert_eq!(some(3.14).to(|x| Some(-x)), some(-3.14));
    /// assert_eq!(some(3.14).to(|_| Option::<f64>::None), none());
    /// assert_eq!(none::<f64>().to(|x| Some(-x)), none());
    /// ```
    #[inline]
    pub fn to<U, F>(self, map: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => Optional::from(map(value)),
            Self::None => Optional::None,
        }
    }

    /// Extracts a field that may itself be unset.
    #[inline]
    pub fn pick<U, F>(self, property: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.to(property)
    }

    /// Keeps the value only if the predicate holds; never evaluated when
    /// absent.
    #[inline]
    pub fn that<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Keeps the value only if the guard narrows it; `Err` empties the
    /// wrapper like a failed [`that`](Self::that).
    #[inline]
    pub fn which<U, F>(self, guard: F) -> Optional<U>
    where
        F: FnOnce(T) -> Result<U, T>,
    {
        match self {
            Self::Some(value) => match guard(value) {
                Ok(narrowed) => Optional::Some(narrowed),
                Err(_) => Optional::None,
            },
            Self::None => Optional::None,
        }
    }

    /// Keeps the value only if a value-independent condition holds.
    #[inline]
    pub fn when<C>(self, condition: C) -> Self
    where
        C: Proposition,
    {
        match self {
            Self::Some(value) => {
                if condition.holds() {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Replaces an absent wrapper with a fallback; both absence kinds a
    /// fallback can resolve to collapse into `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_core::slot::Slot;
    /// use mayhap_maybe::optional::{none, some};
    ///
    /// assert_eq!(none::<f64>().otherwise(2.71), some(2.71));
    /// assert_eq!(some(3.14).otherwise(2.71), some(3.14));
    /// assert_eq!(none::<f64>().otherwise(Slot::Null), none());
    /// ```
    #[inline]
    pub fn otherwise<M, F>(self, fallback: F) -> Self
    where
        F: Fallback<T, M>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => Optional::from(fallback.resolve()),
        }
    }

    /// Unwraps with a fallback, returning the raw `Option` carrier.
    ///
    /// Equivalent to `otherwise(fallback).into_option()` for every
    /// combination of wrapper state and fallback shape.
    #[inline]
    pub fn or<M, F>(self, fallback: F) -> Option<T>
    where
        F: Fallback<T, M>,
    {
        match self {
            Self::Some(value) => Some(value),
            Self::None => fallback.resolve().into_option(),
        }
    }

    /// Runs a side-effecting procedure on the present value, then passes the
    /// wrapper through unchanged.
    #[inline]
    pub fn run<F>(self, procedure: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            procedure(value);
        }
        self
    }

    /// Transforms the raw carrier, absence included, and re-classifies.
    #[inline]
    pub fn lift<U, F>(self, map: F) -> Optional<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        Optional::from(map(self.into_option()))
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Slot<T>> for Optional<T> {
    /// Collapses both absence kinds into `None`.
    #[inline]
    fn from(value: Slot<T>) -> Self {
        match value {
            Slot::Value(value) => Self::Some(value),
            Slot::Missing | Slot::Null => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Optional<T> {
    /// Collapses both absence kinds into `None`.
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        Optional::from(value.into_slot())
    }
}

impl<T> From<Optional<T>> for Maybe<T> {
    /// Reads this family's absence as "never set".
    #[inline]
    fn from(value: Optional<T>) -> Self {
        Maybe::from(value.into_slot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nil, nothing};
    use mayhap_core::error::AbsentKind;
    use mayhap_core::fp::fallback::Defer;
    use std::cell::Cell;

    fn half(x: i32) -> Optional<i32> {
        if x % 2 == 0 {
            some(x / 2)
        } else {
            none()
        }
    }

    fn third(x: i32) -> Optional<i32> {
        if x % 3 == 0 {
            some(x / 3)
        } else {
            none()
        }
    }

    #[test]
    fn test_factories_classify() {
        assert_eq!(optional(Some(1)), some(1));
        assert_eq!(optional(None::<i32>), none());
        assert_eq!(Optional::<i32>::default(), none());
    }

    #[test]
    fn test_onto_binds_present() {
        assert_eq!(some(8).onto(half), some(4));
        assert_eq!(some(3).onto(half), none());
        assert_eq!(none::<i32>().onto(half), none());
    }

    #[test]
    fn test_monad_left_identity() {
        for x in [-4, 3, 8, 18] {
            assert_eq!(some(x).onto(half), half(x));
            assert_eq!(some(x).onto(third), third(x));
        }
    }

    #[test]
    fn test_monad_right_identity() {
        assert_eq!(some(8).onto(some), some(8));
        assert_eq!(none::<i32>().onto(some), none());
    }

    #[test]
    fn test_monad_associativity() {
        let wrappers = [some(18), some(9), some(4), none()];
        for o in wrappers {
            assert_eq!(o.onto(half).onto(third), o.onto(|x| half(x).onto(third)));
        }
    }

    #[test]
    fn test_to_and_pick_collapse_on_none() {
        assert_eq!(some(3.14).to(|x| Some(-x)), some(-3.14));
        assert_eq!(some(1).to(|_| Option::<i32>::None), none());
        assert_eq!(none::<f64>().to(|x| Some(-x)), none());

        struct Berth {
            name: Option<&'static str>,
        }
        assert_eq!(some(Berth { name: Some("east") }).pick(|b| b.name), some("east"));
        assert_eq!(some(Berth { name: None }).pick(|b| b.name), none());
    }

    #[test]
    fn test_filters() {
        assert_eq!(some(10).that(|x| *x > 5), some(10));
        assert_eq!(some(2).that(|x| *x > 5), none());

        let narrow = |x: i64| u8::try_from(x).map_err(|_| x);
        assert_eq!(some(12_i64).which(narrow), some(12_u8));
        assert_eq!(some(3000_i64).which(narrow), none());

        assert_eq!(some(1).when(true), some(1));
        assert_eq!(some(1).when(false), none());

        let poisoned = |_: &i32| -> bool { panic!("predicate evaluated") };
        assert_eq!(none::<i32>().that(poisoned), none());
    }

    #[test]
    fn test_otherwise_collapses_absent_fallbacks() {
        assert_eq!(none::<f64>().otherwise(2.71), some(2.71));
        assert_eq!(some(3.14).otherwise(2.71), some(3.14));

        // Both absence kinds a fallback can resolve to read as None here.
        assert_eq!(none::<f64>().otherwise(Slot::Null), none());
        assert_eq!(none::<f64>().otherwise(Slot::Missing), none());
        assert_eq!(none::<f64>().otherwise(Defer(|| Slot::Value(2.71))), some(2.71));
    }

    #[test]
    fn test_otherwise_never_resolves_on_present() {
        let poisoned = Defer(|| -> Slot<i32> { panic!("fallback resolved") });
        assert_eq!(some(1).otherwise(poisoned), some(1));
    }

    #[test]
    fn test_or_matches_otherwise_into_option() {
        let states = [some(1), none()];
        for o in states {
            assert_eq!(o.or(9), o.otherwise(9).into_option());
            assert_eq!(o.or(Slot::Value(9)), o.otherwise(Slot::Value(9)).into_option());
            assert_eq!(o.or(Slot::Missing), o.otherwise(Slot::Missing).into_option());
            assert_eq!(o.or(Slot::Null), o.otherwise(Slot::Null).into_option());
            assert_eq!(
                o.or(Defer(|| Slot::Value(9))),
                o.otherwise(Defer(|| Slot::Value(9))).into_option()
            );
            assert_eq!(
                o.or(Defer(|| Slot::Null)),
                o.otherwise(Defer(|| Slot::Null)).into_option()
            );
        }
    }

    #[test]
    fn test_run_observes_present_only() {
        let seen = Cell::new(0);
        assert_eq!(some(7).run(|value| seen.set(*value)), some(7));
        assert_eq!(seen.get(), 7);

        assert_eq!(none::<i32>().run(|value| seen.set(*value)), none());
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_lift_observes_absence() {
        assert_eq!(none::<i32>().lift(|o| Some(o.is_none())), some(true));
        assert_eq!(some(1).lift(|o| Some(o.is_none())), some(false));
        assert_eq!(some(1).lift(|_| Option::<i32>::None), none());
    }

    #[test]
    fn test_into_value_reports_missing() {
        assert_eq!(some(1).into_value(), Ok(1));
        assert_eq!(
            none::<i32>().into_value().unwrap_err().kind(),
            AbsentKind::Missing
        );
    }

    #[test]
    fn test_maybe_conversions() {
        // Toward Maybe, this family's absence reads as "never set".
        assert_eq!(Maybe::from(some(1)), just(1));
        assert_eq!(Maybe::from(none::<i32>()), nothing());

        // Toward Optional, both kinds collapse.
        assert_eq!(Optional::from(just(1)), some(1));
        assert_eq!(Optional::from(nothing::<i32>()), none());
        assert_eq!(Optional::from(nil::<i32>()), none());
    }

    #[test]
    fn test_as_ref_keeps_original_usable() {
        let wrapper = some(String::from("pier"));
        assert_eq!(wrapper.as_ref().to(|s| Some(s.len())), some(4));
        assert_eq!(wrapper, some(String::from("pier")));
    }
}
