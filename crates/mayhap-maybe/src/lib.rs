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

//! # Mayhap Maybe
//!
//! Monadic optional-value wrappers with chainable combinators. Built on the
//! tri-state `Slot` carrier from `mayhap-core`, the wrappers keep track of
//! *why* a value is absent instead of collapsing every emptiness into one
//! `None`.
//!
//! ## Modules
//!
//! - `maybe`: The distinguished-absence family. `Maybe<T>` is `Just(T)`,
//!   `Nothing` (never set), or `Nil` (explicitly cleared), and every
//!   combinator preserves the absence kind.
//! - `optional`: The collapsed family that reads absence as "never set".
//!   `Optional<T>` is `Some(T)` or `None` over a plain `Option` carrier.
//! - `nullable`: The collapsed family that reads absence as "explicitly
//!   cleared". `Nullable<T>` is `Solum(T)` or `Nil`.
//! - `iter`: Zero-or-one iteration for all three families, so wrappers
//!   compose with the standard iterator adaptors the way `Option` does.
//!
//! ## Purpose
//!
//! All three families share one combinator surface: `onto`, `to`, `pick`,
//! `that`, `which`, `when`, `otherwise`, `or`, `run`, and `lift`. Chains
//! short-circuit on absence, fallbacks resolve lazily, and extraction is
//! either checked (`into_value`) or deliberately fatal (`or(fail(...))`).
//!
//! Refer to each module for detailed APIs and examples.

pub mod iter;
pub mod maybe;
pub mod nullable;
pub mod optional;
