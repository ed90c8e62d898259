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

//! # Tri-State Value Slot
//!
//! The raw carrier underneath every mayhap wrapper. `Slot<T>` holds either a
//! present value or one of two distinguishable kinds of nothing: `Missing`
//! (the value was never set) and `Null` (the value was explicitly cleared).
//!
//! ## Motivation
//!
//! In patch-style data exchange the two absences carry different
//! instructions: a missing field means "leave it unchanged" while a null
//! field means "clear it". Collapsing both into `Option::None` loses that
//! intent at the first conversion. `Slot` keeps the kind attached to the
//! value until the caller decides to collapse it.
//!
//! ## Highlights
//!
//! - Classification predicates (`is_present`, `is_missing`, `is_null`, ...)
//!   usable in `const` contexts.
//! - `map`/`as_ref` preserve the absence kind through transformations.
//! - Checked extraction via `into_value`, reporting which kind of absence was
//!   observed.
//! - `Default` is `Missing`, so a slot-typed field that is left out of a
//!   deserialized payload reads as "never set".
//!
//! ## Usage
//!
//! ```rust
//! use mayhap_core::slot::Slot;
//!
//! let present = Slot::Value(3.14);
//! let cleared: Slot<f64> = Slot::Null;
//!
//! assert!(present.is_present());
//! assert!(cleared.is_null());
//! assert_eq!(present.map(|x| -x), Slot::Value(-3.14));
//! assert_eq!(cleared.map(|x| -x), Slot::Null);
//! ```

use crate::error::{AbsentError, AbsentKind};

/// A value that is present, never set, or explicitly cleared.
///
/// The two empty states classify differently (`is_missing` vs. `is_null`)
/// but both count as absent (`is_absent`).
///
/// # Examples
///
/// ```rust
/// use mayhap_core::slot::Slot;
///
/// let value = Slot::Value(42);
/// let missing: Slot<i32> = Slot::Missing;
/// let null: Slot<i32> = Slot::Null;
///
/// assert!(value.is_present());
/// assert!(missing.is_absent() && missing.is_missing());
/// assert!(null.is_absent() && null.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// A present value.
    Value(T),
    /// No value was ever set.
    Missing,
    /// The value was explicitly cleared.
    Null,
}

impl<T> Slot<T> {
    /// Returns `true` if the slot holds a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if the slot is empty, regardless of the absence kind.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Missing | Self::Null)
    }

    /// Returns `true` if the slot was never set.
    #[inline]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` if the slot is anything but `Missing`.
    ///
    /// Note that a `Null` slot counts as defined: it was deliberately set to
    /// nothing.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        !self.is_missing()
    }

    /// Returns `true` if the slot was explicitly cleared.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the slot is anything but `Null`.
    #[inline]
    pub const fn is_not_null(&self) -> bool {
        !self.is_null()
    }

    /// Transforms the present value, preserving the absence kind otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_core::slot::Slot;
    ///
    /// assert_eq!(Slot::Value(2).map(|x| x * 3), Slot::Value(6));
    /// assert_eq!(Slot::<i32>::Missing.map(|x| x * 3), Slot::Missing);
    /// assert_eq!(Slot::<i32>::Null.map(|x| x * 3), Slot::Null);
    /// ```
    #[inline]
    pub fn map<U, F>(self, map: F) -> Slot<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Slot::Value(map(value)),
            Self::Missing => Slot::Missing,
            Self::Null => Slot::Null,
        }
    }

    /// Converts from `&Slot<T>` to `Slot<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Slot<&T> {
        match self {
            Self::Value(value) => Slot::Value(value),
            Self::Missing => Slot::Missing,
            Self::Null => Slot::Null,
        }
    }

    /// Collapses the slot into an `Option`, discarding the absence kind.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }

    /// Extracts the present value, or reports which absence kind was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhap_core::error::AbsentKind;
    /// use mayhap_core::slot::Slot;
    ///
    /// assert_eq!(Slot::Value(7).into_value(), Ok(7));
    ///
    /// let err = Slot::<i32>::Null.into_value().unwrap_err();
    /// assert_eq!(err.kind(), AbsentKind::Null);
    /// ```
    #[inline]
    pub fn into_value(self) -> Result<T, AbsentError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Missing => Err(AbsentError::new(AbsentKind::Missing)),
            Self::Null => Err(AbsentError::new(AbsentKind::Null)),
        }
    }
}

impl<T> Default for Slot<T> {
    /// Returns `Slot::Missing`, the state of a field that was never set.
    #[inline]
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> From<Option<T>> for Slot<T> {
    /// `None` reads as "never set"; an explicitly cleared value must be
    /// spelled `Slot::Null` by the caller.
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Missing,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Slot<T> {
    /// A present value serializes transparently; both absence kinds
    /// serialize as `null`. To drop `Missing` fields from the output
    /// entirely, combine with `skip_serializing_if = "Slot::is_missing"`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Slot<T> {
    /// An explicit `null` deserializes as `Slot::Null`. A field that is
    /// absent from the payload never reaches the deserializer; pair the field
    /// with `#[serde(default)]` so it falls back to `Slot::Missing`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let value = Slot::Value(1);
        let missing: Slot<i32> = Slot::Missing;
        let null: Slot<i32> = Slot::Null;

        assert!(value.is_present());
        assert!(!value.is_absent());
        assert!(value.is_defined());
        assert!(value.is_not_null());

        assert!(missing.is_absent());
        assert!(missing.is_missing());
        assert!(!missing.is_defined());
        assert!(missing.is_not_null());

        assert!(null.is_absent());
        assert!(null.is_null());
        assert!(null.is_defined());
        assert!(!null.is_not_null());
    }

    #[test]
    fn test_map_preserves_absence_kind() {
        assert_eq!(Slot::Value(3.14).map(|x| -x), Slot::Value(-3.14));
        assert_eq!(Slot::<f64>::Missing.map(|x| -x), Slot::Missing);
        assert_eq!(Slot::<f64>::Null.map(|x| -x), Slot::Null);
    }

    #[test]
    fn test_as_ref() {
        let slot = Slot::Value(String::from("pier"));
        assert_eq!(slot.as_ref().map(String::len), Slot::Value(4));
        // The original is still usable afterwards.
        assert_eq!(slot, Slot::Value(String::from("pier")));
    }

    #[test]
    fn test_into_option_collapses() {
        assert_eq!(Slot::Value(5).into_option(), Some(5));
        assert_eq!(Slot::<i32>::Missing.into_option(), None);
        assert_eq!(Slot::<i32>::Null.into_option(), None);
    }

    #[test]
    fn test_into_value_reports_kind() {
        assert_eq!(Slot::Value(5).into_value(), Ok(5));
        assert_eq!(
            Slot::<i32>::Missing.into_value().unwrap_err().kind(),
            AbsentKind::Missing
        );
        assert_eq!(
            Slot::<i32>::Null.into_value().unwrap_err().kind(),
            AbsentKind::Null
        );
    }

    #[test]
    fn test_default_is_missing() {
        assert_eq!(Slot::<i32>::default(), Slot::Missing);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Slot::from(Some(2)), Slot::Value(2));
        assert_eq!(Slot::from(None::<i32>), Slot::Missing);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Slot::is_missing")]
        nickname: Slot<String>,
    }

    #[test]
    fn test_serialize_value() {
        let patch = Patch {
            nickname: Slot::Value(String::from("kae")),
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"nickname":"kae"}"#
        );
    }

    #[test]
    fn test_serialize_null_is_kept_and_missing_is_dropped() {
        let cleared = Patch {
            nickname: Slot::Null,
        };
        assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"nickname":null}"#);

        let untouched = Patch {
            nickname: Slot::Missing,
        };
        assert_eq!(serde_json::to_string(&untouched).unwrap(), "{}");
    }

    #[test]
    fn test_deserialize_distinguishes_absences() {
        let with_value: Patch = serde_json::from_str(r#"{"nickname":"kae"}"#).unwrap();
        assert_eq!(with_value.nickname, Slot::Value(String::from("kae")));

        let with_null: Patch = serde_json::from_str(r#"{"nickname":null}"#).unwrap();
        assert_eq!(with_null.nickname, Slot::Null);

        let without: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(without.nickname, Slot::Missing);
    }

    #[test]
    fn test_top_level_roundtrip() {
        assert_eq!(serde_json::to_string(&Slot::Value(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Slot::<i32>::Null).unwrap(), "null");

        assert_eq!(serde_json::from_str::<Slot<i32>>("7").unwrap(), Slot::Value(7));
        assert_eq!(serde_json::from_str::<Slot<i32>>("null").unwrap(), Slot::Null);
    }
}
