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

//! # Maybe Wrapper
//!
//! The distinguished-absence wrapper family. `Maybe<T>` is either `Just(T)`,
//! `Nothing` (no value was ever set), or `Nil` (the value was explicitly
//! cleared), and every combinator carries the absence kind through the chain
//! untouched.
//!
//! ## Motivation
//!
//! Chains over optional data read best when the happy path is linear and the
//! empty cases take care of themselves. `Maybe` short-circuits every
//! value-dependent step on absence, while remembering which kind of absence
//! it is propagating, so the end of the chain can still distinguish "was
//! never set" from "was cleared".
//!
//! ## Highlights
//!
//! - Monadic bind (`onto`) satisfying the left identity, right identity, and
//!   associativity laws.
//! - Re-classifying maps (`to`, `pick`, `lift`) driven by the same rules as
//!   the `maybe` factory.
//! - Filters (`that`, `which`, `when`) that never evaluate their condition
//!   on an absent wrapper.
//! - Lazy fallbacks (`otherwise`, `or`) that can fill, clear, or abort the
//!   chain.
//!
//! ## Usage
//!
//! ```rust
//! use mayhap_core::slot::Slot;
//! use mayhap_maybe::maybe::{just, nothing};
//!
//! let port = just("8080")
//!     .to(|raw| Slot::from(raw.parse::<u16>().ok()))
//!     .that(|port| *port >= 1024)
//!     .otherwise(8080);
//!
//! assert_eq!(port, just(8080));
//! assert_eq!(nothing::<u16>().or(4242), Slot::Value(4242));
//! ```

use mayhap_core::error::AbsentError;
use mayhap_core::fp::fallback::Fallback;
use mayhap_core::fp::proposition::Proposition;
use mayhap_core::slot::Slot;

/// An optional value that remembers why it is absent.
///
/// `Nothing` and `Nil` are unit variants: zero-sized, allocation-free, and
/// equal wherever they occur.
///
/// # Examples
///
/// ```rust
/// use mayhap_maybe::maybe::{just, nil, Maybe};
///
/// let label = nil::<String>()
///     .otherwise(String::from("unnamed"))
///     .to(|name| mayhap_core::slot::Slot::Value(name.to_uppercase()));
///
/// assert_eq!(label, just(String::from("UNNAMED")));
/// assert!(Maybe::<String>::Nil.is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value was ever set.
    Nothing,
    /// The value was explicitly cleared.
    Nil,
}

/// Wraps a present value.
#[inline]
pub fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// The never-set absent wrapper.
#[inline]
pub fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

/// The explicitly-cleared absent wrapper.
#[inline]
pub fn nil<T>() -> Maybe<T> {
    Maybe::Nil
}

/// Classifies a slot into the matching wrapper variant.
///
/// This is the classification rule every re-wrapping combinator uses.
///
/// # Examples
///
/// ```rust
/// use mayhap_core::slot::Slot;
/// use mayhap_maybe::maybe::{just, maybe, nil, nothing};
///
/// assert_eq!(maybe(Slot::Value(1)), just(1));
/// assert_eq!(maybe(Slot::<i32>::Missing), nothing());
/// assert_eq!(maybe(Slot::<i32>::Null), nil());
/// ```
#[inline]
pub fn maybe<T>(value: Slot<T>) -> Maybe<T> {
    Maybe::from(value)
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value was ever set.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` if the value was explicitly cleared.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if the wrapper is empty, regardless of the kind.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Nothing | Self::Nil)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>` for non-consuming chains.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
            Self::Nil => Maybe::Nil,
        }
    }

    /// Unwraps into the raw slot, preserving the absence kind.
    #[inline]
    pub fn into_slot(self) -> Slot<T> {
        match self {
            Self::Just(value) => Slot::Value(value),
            Self::Nothing => Slot::Missing,
            Self::Nil => Slot::Null,
        }
    }

    /// Collapses into an `Option`, discarding the absence kind.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into_slot().into_option()
    }

    /// Extracts the present value, or reports which absence kind was found.
    #[inline]
    pub fn into_value(self) -> Result<T, AbsentError> {
        self.into_slot().into_value()
    }

    /// Chains a computation that itself may come up empty.
    ///
    /// On an absent wrapper the computation is skipped and the absence kind
    /// propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_maybe::maybe::{just, nil, nothing, Maybe};
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { just(x / 2) } else { nothing() }
    /// }
    ///
    /// assert_eq!(just(8).onto(half), just(4));
    /// assert_eq!(just(3).onto(half), nothing());
    /// assert_eq!(nil::<i32>().onto(half), nil());
    /// ```
    #[inline]
    pub fn onto<U, F>(self, bind: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => bind(value),
            Self::Nothing => Maybe::Nothing,
            Self::Nil => Maybe::Nil,
        }
    }

    /// Transforms the present value and re-classifies the result.
    ///
    /// The mapping returns a slot, so it can produce a present value, clear
    /// the wrapper, or leave it unset; an absent input short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_core::slot::Slot;
    /// use mayhap_maybe::maybe::{just, nil, nothing};
    ///
    /// assert_eq!(just(3.14).to(|x| Slot::Value(-x)), just(-3.14));
    /// assert_eq!(just(3.14).to(|_| Slot::<f64>::Null), nil());
    /// assert_eq!(nothing::<f64>().to(|x| Slot::Value(-x)), nothing());
    /// ```
    #[inline]
    pub fn to<U, F>(self, map: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Slot<U>,
    {
        match self {
            Self::Just(value) => Maybe::from(map(value)),
            Self::Nothing => Maybe::Nothing,
            Self::Nil => Maybe::Nil,
        }
    }

    /// Extracts a field that may itself be unset.
    ///
    /// A `None` classifies as `Nothing`: a field that is not there was never
    /// set, it was not cleared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_maybe::maybe::{just, nothing};
    ///
    /// struct Account {
    ///     nickname: Option<String>,
    /// }
    ///
    /// let named = Account { nickname: Some(String::from("kae")) };
    /// let anonymous = Account { nickname: None };
    ///
    /// assert_eq!(just(named).pick(|a| a.nickname), just(String::from("kae")));
    /// assert_eq!(just(anonymous).pick(|a| a.nickname), nothing());
    /// ```
    #[inline]
    pub fn pick<U, F>(self, property: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Just(value) => match property(value) {
                Some(picked) => Maybe::Just(picked),
                None => Maybe::Nothing,
            },
            Self::Nothing => Maybe::Nothing,
            Self::Nil => Maybe::Nil,
        }
    }

    /// Keeps the value only if the predicate holds.
    ///
    /// A dropped value becomes `Nothing`; an absent wrapper passes through
    /// without the predicate ever being evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_maybe::maybe::{just, nothing};
    ///
    /// assert_eq!(just(10).that(|x| *x > 5), just(10));
    /// assert_eq!(just(2).that(|x| *x > 5), nothing());
    /// ```
    #[inline]
    pub fn that<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            absent => absent,
        }
    }

    /// Keeps the value only if the guard narrows it.
    ///
    /// `Ok` carries the (possibly narrowed) value on; `Err` hands the
    /// original back and the wrapper empties like a failed [`that`](Self::that).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_maybe::maybe::{just, nothing};
    ///
    /// let narrow = |x: i64| u8::try_from(x).map_err(|_| x);
    ///
    /// assert_eq!(just(12_i64).which(narrow), just(12_u8));
    /// assert_eq!(just(3000_i64).which(narrow), nothing());
    /// ```
    #[inline]
    pub fn which<U, F>(self, guard: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Result<U, T>,
    {
        match self {
            Self::Just(value) => match guard(value) {
                Ok(narrowed) => Maybe::Just(narrowed),
                Err(_) => Maybe::Nothing,
            },
            Self::Nothing => Maybe::Nothing,
            Self::Nil => Maybe::Nil,
        }
    }

    /// Keeps the value only if a value-independent condition holds.
    ///
    /// The condition is a `bool` or a nullary closure; it is not evaluated
    /// on an absent wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_maybe::maybe::{just, nothing};
    ///
    /// assert_eq!(just("draft").when(true), just("draft"));
    /// assert_eq!(just("draft").when(false), nothing());
    /// assert_eq!(just("draft").when(|| 2 + 2 == 4), just("draft"));
    /// ```
    #[inline]
    pub fn when<C>(self, condition: C) -> Self
    where
        C: Proposition,
    {
        match self {
            Self::Just(value) => {
                if condition.holds() {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            absent => absent,
        }
    }

    /// Replaces an absent wrapper with a fallback.
    ///
    /// The fallback is a plain value, an explicit slot, or a deferred
    /// computation; it is resolved only when the wrapper is actually absent,
    /// and its result is re-classified like any other slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_core::fp::fallback::Defer;
    /// use mayhap_core::slot::Slot;
    /// use mayhap_maybe::maybe::{just, nil, nothing};
    ///
    /// assert_eq!(nil::<f64>().otherwise(2.71), just(2.71));
    /// assert_eq!(just(3.14).otherwise(2.71), just(3.14));
    ///
    /// // A fallback may clear instead of fill, or stay lazy.
    /// assert_eq!(nothing::<f64>().otherwise(Slot::Null), nil());
    /// assert_eq!(nil::<f64>().otherwise(Defer(|| Slot::Value(2.71))), just(2.71));
    /// ```
    #[inline]
    pub fn otherwise<M, F>(self, fallback: F) -> Self
    where
        F: Fallback<T, M>,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            _ => Maybe::from(fallback.resolve()),
        }
    }

    /// Unwraps with a fallback, returning the raw slot.
    ///
    /// Equivalent to `otherwise(fallback).into_slot()` for every combination
    /// of wrapper state and fallback shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_core::slot::Slot;
    /// use mayhap_maybe::maybe::{just, nil, nothing};
    ///
    /// assert_eq!(just(3.14).or(2.71), Slot::Value(3.14));
    /// assert_eq!(nil::<f64>().or(2.71), Slot::Value(2.71));
    /// assert_eq!(nothing::<f64>().or(Slot::Null), Slot::Null);
    /// ```
    #[inline]
    pub fn or<M, F>(self, fallback: F) -> Slot<T>
    where
        F: Fallback<T, M>,
    {
        match self {
            Self::Just(value) => Slot::Value(value),
            _ => fallback.resolve(),
        }
    }

    /// Runs a side-effecting procedure on the present value, then passes the
    /// wrapper through unchanged.
    ///
    /// The procedure only borrows the value, so it cannot change what the
    /// chain sees downstream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use mayhap_maybe::maybe::{just, nothing};
    ///
    /// let seen = Cell::new(0);
    /// let kept = just(7).run(|value| seen.set(*value));
    ///
    /// assert_eq!(kept, just(7));
    /// assert_eq!(seen.get(), 7);
    ///
    /// nothing::<i32>().run(|value| seen.set(*value));
    /// assert_eq!(seen.get(), 7);
    /// ```
    #[inline]
    pub fn run<F>(self, procedure: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            procedure(value);
        }
        self
    }

    /// Transforms the raw slot, absence included, and re-classifies.
    ///
    /// This is the one combinator that observes absence instead of
    /// short-circuiting on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_core::slot::Slot;
    /// use mayhap_maybe::maybe::{just, nil, nothing};
    ///
    /// assert_eq!(nothing::<i32>().lift(|slot| Slot::Value(slot.is_missing())), just(true));
    /// assert_eq!(just(1).lift(|slot| Slot::Value(slot.is_missing())), just(false));
    ///
    /// // Absence kinds can be rewritten wholesale.
    /// assert_eq!(nothing::<i32>().lift(|_| Slot::<i32>::Null), nil());
    /// ```
    #[inline]
    pub fn lift<U, F>(self, map: F) -> Maybe<U>
    where
        F: FnOnce(Slot<T>) -> Slot<U>,
    {
        Maybe::from(map(self.into_slot()))
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::Nothing`, the state of a value that was never set.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Slot<T>> for Maybe<T> {
    #[inline]
    fn from(value: Slot<T>) -> Self {
        match value {
            Slot::Value(value) => Self::Just(value),
            Slot::Missing => Self::Nothing,
            Slot::Null => Self::Nil,
        }
    }
}

impl<T> From<Maybe<T>> for Slot<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_slot()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `None` reads as "never set", matching `Slot`'s reading of `Option`.
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    /// `Just` serializes transparently; both absence kinds serialize as
    /// `null`. To drop `Nothing` fields from the output entirely, combine
    /// with `skip_serializing_if = "Maybe::is_nothing"`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing | Self::Nil => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    /// An explicit `null` deserializes as `Nil`. A field that is absent from
    /// the payload never reaches the deserializer; pair the field with
    /// `#[serde(default)]` so it falls back to `Nothing`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Just(value),
            None => Self::Nil,
        })
    }
}
