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

//! # Mayhap Core
//!
//! Foundational primitives for the mayhap optional-value ecosystem. This crate
//! consolidates the tri-state value carrier, the absence classification rules,
//! and the functional argument seams that the higher-level wrapper crates
//! build their combinator surfaces on.
//!
//! ## Modules
//!
//! - `slot`: Tri-state value carrier (`Slot<T>`) distinguishing a present
//!   value from the two absence kinds (never set vs. explicitly cleared),
//!   with classification predicates, mapping, and checked extraction.
//! - `fp`: Functional argument primitives: conditions that are either given
//!   or computed (`Proposition`) and fallbacks that are either ready values,
//!   explicit slots, or deferred computations (`Fallback`, `Defer`).
//! - `error`: The extraction error carrying the observed absence kind
//!   (`AbsentError`), plus deferred fallbacks that abort the chain with a
//!   panic (`fail`, `raise`).
//!
//! ## Purpose
//!
//! `Option<T>` collapses every kind of emptiness into `None`. Patch-style
//! data exchange needs one more distinction: a field that was never set is a
//! different instruction from a field that was explicitly cleared. These
//! primitives keep that distinction represented in the type system with zero
//! runtime overhead.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod fp;
pub mod slot;
