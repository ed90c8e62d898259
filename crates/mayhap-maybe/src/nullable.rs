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

//! # Nullable Wrapper
//!
//! The collapsed-absence family that reads every emptiness as "explicitly
//! cleared". `Nullable<T>` is the mirror image of `Optional<T>`: one present
//! variant (`Solum`), one absent variant (`Nil`), the same combinator
//! surface, and a `Null`-kind reading whenever the absence crosses into the
//! distinguished `Maybe` family.

use crate::maybe::Maybe;
use mayhap_core::error::AbsentError;
use mayhap_core::fp::fallback::Fallback;
use mayhap_core::fp::proposition::Proposition;
use mayhap_core::slot::Slot;

/// An optional value with a single, "explicitly cleared" absent state.
///
/// # Examples
///
/// ```rust
/// use mayhap_maybe::nullable::{nil, solum};
///
/// assert_eq!(nil::<f64>().otherwise(2.71), solum(2.71));
/// assert_eq!(solum(2).to(|x| Some(x * 3)), solum(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// A present value.
    Solum(T),
    /// The value was cleared.
    Nil,
}

/// Wraps a present value.
#[inline]
pub fn solum<T>(value: T) -> Nullable<T> {
    Nullable::Solum(value)
}

/// The absent wrapper.
#[inline]
pub fn nil<T>() -> Nullable<T> {
    Nullable::Nil
}

/// Classifies an option into the matching wrapper variant; `None` reads as
/// "cleared" in this family.
#[inline]
pub fn nullable<T>(value: Option<T>) -> Nullable<T> {
    Nullable::from(value)
}

impl<T> Nullable<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_solum(&self) -> bool {
        matches!(self, Self::Solum(_))
    }

    /// Returns `true` if the wrapper is empty.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Converts from `&Nullable<T>` to `Nullable<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Solum(value) => Nullable::Solum(value),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Unwraps into a slot; this family's absence is the "cleared" kind.
    #[inline]
    pub fn into_slot(self) -> Slot<T> {
        match self {
            Self::Solum(value) => Slot::Value(value),
            Self::Nil => Slot::Null,
        }
    }

    /// Unwraps into the raw `Option` carrier.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Solum(value) => Some(value),
            Self::Nil => None,
        }
    }

    /// Extracts the present value, or reports the absence.
    #[inline]
    pub fn into_value(self) -> Result<T, AbsentError> {
        self.into_slot().into_value()
    }

    /// Chains a computation that itself may come up empty.
    #[inline]
    pub fn onto<U, F>(self, bind: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Nullable<U>,
    {
        match self {
            Self::Solum(value) => bind(value),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Transforms the present value; a `None` result empties the wrapper.
    #[inline]
    pub fn to<U, F>(self, map: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Solum(value) => Nullable::from(map(value)),
            Self::Nil => Nullable::Nil,
        }
    }

    /// Extracts a field that may itself be unset.
    #[inline]
    pub fn pick<U, F>(self, property: F) -> Nullable<U>
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
            Self::Solum(value) => {
                if predicate(&value) {
                    Self::Solum(value)
                } else {
                    Self::Nil
                }
            }
            Self::Nil => Self::Nil,
        }
    }

    /// Keeps the value only if the guard narrows it; `Err` empties the
    /// wrapper like a failed [`that`](Self::that).
    #[inline]
    pub fn which<U, F>(self, guard: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Result<U, T>,
    {
        match self {
            Self::Solum(value) => match guard(value) {
                Ok(narrowed) => Nullable::Solum(narrowed),
                Err(_) => Nullable::Nil,
            },
            Self::Nil => Nullable::Nil,
        }
    }

    /// Keeps the value only if a value-independent condition holds.
    #[inline]
    pub fn when<C>(self, condition: C) -> Self
    where
        C: Proposition,
    {
        match self {
            Self::Solum(value) => {
                if condition.holds() {
                    Self::Solum(value)
                } else {
                    Self::Nil
                }
            }
            Self::Nil => Self::Nil,
        }
    }

    /// Replaces an absent wrapper with a fallback; both absence kinds a
    /// fallback can resolve to collapse into `Nil`.
    #[inline]
    pub fn otherwise<M, F>(self, fallback: F) -> Self
    where
        F: Fallback<T, M>,
    {
        match self {
            Self::Solum(value) => Self::Solum(value),
            Self::Nil => Nullable::from(fallback.resolve()),
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
            Self::Solum(value) => Some(value),
            Self::Nil => fallback.resolve().into_option(),
        }
    }

    /// Runs a side-effecting procedure on the present value, then passes the
    /// wrapper through unchanged.
    #[inline]
    pub fn run<F>(self, procedure: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Solum(value) = &self {
            procedure(value);
        }
        self
    }

    /// Transforms the raw carrier, absence included, and re-classifies.
    #[inline]
    pub fn lift<U, F>(self, map: F) -> Nullable<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        Nullable::from(map(self.into_option()))
    }
}

impl<T> Default for Nullable<T> {
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Solum(value),
            None => Self::Nil,
        }
    }
}

impl<T> From<Slot<T>> for Nullable<T> {
    /// Collapses both absence kinds into `Nil`.
    #[inline]
    fn from(value: Slot<T>) -> Self {
        match value {
            Slot::Value(value) => Self::Solum(value),
            Slot::Missing | Slot::Null => Self::Nil,
        }
    }
}

impl<T> From<Maybe<T>> for Nullable<T> {
    /// Collapses both absence kinds into `Nil`.
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        Nullable::from(value.into_slot())
    }
}

impl<T> From<Nullable<T>> for Maybe<T> {
    /// Reads this family's absence as "explicitly cleared".
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        Maybe::from(value.into_slot())
    }
}
