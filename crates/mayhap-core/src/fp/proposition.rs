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

//! Conditions that are either given or computed.

/// A condition accepted by value-independent filters such as `when`.
///
/// Implemented for `bool` (the condition is already known) and for nullary
/// closures returning `bool` (the condition is computed only if the wrapper
/// is present).
///
/// # Examples
///
/// ```rust
/// use mayhap_core::fp::proposition::Proposition;
///
/// assert!(true.holds());
/// assert!(!(false.holds()));
/// assert!((|| 2 + 2 == 4).holds());
/// ```
pub trait Proposition {
    /// Evaluates the condition.
    fn holds(self) -> bool;
}

impl Proposition for bool {
    #[inline]
    fn holds(self) -> bool {
        self
    }
}

impl<F> Proposition for F
where
    F: FnOnce() -> bool,
{
    #[inline]
    fn holds(self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_holds() {
        assert!(true.holds());
        assert!(!false.holds());
    }

    #[test]
    fn test_closure_holds() {
        assert!((|| true).holds());
        assert!(!(|| false).holds());

        let threshold = 10;
        assert!((move || threshold > 5).holds());
    }

    #[test]
    fn test_fn_item_holds() {
        fn always() -> bool {
            true
        }
        assert!(always.holds());
    }
}
