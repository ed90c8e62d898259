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

//! # Zero-Or-One Iteration
//!
//! Iterator integration for the wrapper families. A present wrapper yields
//! its value exactly once; an absent wrapper yields nothing, whatever its
//! absence kind.
//!
//! ## Motivation
//!
//! Wrappers frequently end up inside iterator pipelines: flattening a list
//! of optional fields, summing present values, chaining a wrapper onto a
//! collection. Implementing `IntoIterator` lets the standard adaptors do the
//! branching instead of sprinkling `is_absent` checks through the pipeline.
//!
//! ## Highlights
//!
//! - Implements `Iterator` with exact `size_hint` (`(0, Some(0))` or
//!   `(1, Some(1))`).
//! - Supports `DoubleEndedIterator`, `ExactSizeIterator`, and
//!   `FusedIterator`.
//! - `IntoIterator` by value and by shared reference for all three families.
//!
//! ## Usage
//!
//! ```rust
//! use mayhap_maybe::maybe::{just, nil, nothing};
//!
//! let wrappers = vec![just(1), nothing(), just(3), nil()];
//! let total: i32 = wrappers.into_iter().flatten().sum();
//!
//! assert_eq!(total, 4);
//! ```

use crate::maybe::Maybe;
use crate::nullable::Nullable;
use crate::optional::Optional;
use std::iter::FusedIterator;

/// An iterator over the present value of a wrapper, yielding it at most
/// once.
///
/// # Examples
///
/// ```rust
/// use mayhap_maybe::maybe::{just, nil};
///
/// let mut present = just(7).into_iter();
/// assert_eq!(present.next(), Some(7));
/// assert_eq!(present.next(), None);
///
/// let mut absent = nil::<i32>().into_iter();
/// assert_eq!(absent.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.inner.is_some())
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> IntoIter<&'a T> {
        IntoIter::new(self.as_ref().into_option())
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> IntoIter<&'a T> {
        IntoIter::new(self.as_ref().into_option())
    }
}

impl<T> IntoIterator for Nullable<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a Nullable<T> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> IntoIter<&'a T> {
        IntoIter::new(self.as_ref().into_option())
    }
}

impl<T> Maybe<T> {
    /// Iterates over the present value by reference.
    #[inline]
    pub fn iter(&self) -> IntoIter<&T> {
        self.into_iter()
    }
}

impl<T> Optional<T> {
    /// Iterates over the present value by reference.
    #[inline]
    pub fn iter(&self) -> IntoIter<&T> {
        self.into_iter()
    }
}

impl<T> Nullable<T> {
    /// Iterates over the present value by reference.
    #[inline]
    pub fn iter(&self) -> IntoIter<&T> {
        self.into_iter()
    }
}
