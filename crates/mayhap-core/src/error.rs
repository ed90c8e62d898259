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

//! Absence errors and chain-aborting fallbacks.
//!
//! `AbsentError` is the checked side of extraction: `into_value` returns it
//! when a slot or wrapper turns out to be empty, tagged with the absence kind
//! that was observed. `fail` and `raise` are the unchecked side: deferred
//! fallbacks for `or`/`otherwise` that promote absence to a panic at the call
//! site, for values the surrounding code has declared must exist.

use crate::fp::fallback::Defer;
use crate::slot::Slot;

/// The two ways a slot can be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsentKind {
    /// The value was never set.
    Missing,
    /// The value was explicitly cleared.
    Null,
}

/// The error returned when extracting a value from an empty slot or wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsentError {
    kind: AbsentKind,
}

impl AbsentError {
    /// Creates an `AbsentError` for the given absence kind.
    #[inline]
    pub const fn new(kind: AbsentKind) -> Self {
        Self { kind }
    }

    /// The absence kind that was observed.
    #[inline]
    pub const fn kind(&self) -> AbsentKind {
        self.kind
    }
}

impl std::fmt::Display for AbsentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            AbsentKind::Missing => write!(f, "Value is missing"),
            AbsentKind::Null => write!(f, "Value is null"),
        }
    }
}

impl std::error::Error for AbsentError {}

/// A deferred fallback that panics with `message` when resolved.
///
/// Present wrappers never resolve their fallback, so this only fires when
/// the value is actually absent.
///
/// # Examples
///
/// ```rust
/// use mayhap_core::error::fail;
///
/// // Nothing happens until a chain actually resolves the fallback.
/// let _fallback = fail::<u16>("port must be configured");
/// ```
///
/// ```rust,should_panic
/// use mayhap_core::error::fail;
/// use mayhap_core::fp::fallback::Fallback;
/// use mayhap_core::slot::Slot;
///
/// // Panics with "port must be configured".
/// let _resolved: Slot<u16> = fail("port must be configured").resolve();
/// ```
pub fn fail<T>(message: impl Into<String>) -> Defer<impl FnOnce() -> Slot<T>> {
    let message = message.into();
    Defer(move || panic!("{message}"))
}

/// A deferred fallback that panics with the `Display` rendering of `error`
/// when resolved.
///
/// Like [`fail`], but for callers that already hold an error value.
pub fn raise<T, E>(error: E) -> Defer<impl FnOnce() -> Slot<T>>
where
    E: std::fmt::Display,
{
    Defer(move || panic!("{error}"))
}
