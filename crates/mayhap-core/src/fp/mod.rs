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

//! # Functional Argument Primitives
//!
//! Small traits that let combinator methods accept several spellings of the
//! same intent without separate method names per spelling.
//!
//! ## Submodules
//!
//! - `proposition`: A condition that is either given directly as a `bool` or
//!   computed on demand by a nullary closure (`Proposition`).
//! - `fallback`: A replacement for an absent value that is either a ready
//!   value, an explicit slot, or a deferred computation wrapped in `Defer`
//!   (`Fallback`).
//!
//! ## Motivation
//!
//! Wrapper chains read best when the call site states intent directly:
//! `when(enabled)` next to `when(|| registry.contains(key))`, or
//! `otherwise(8080)` next to `otherwise(Defer(|| lookup_default()))`. Both
//! traits resolve lazily enough that a present wrapper never pays for a
//! fallback it does not use.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod fallback;
pub mod proposition;
