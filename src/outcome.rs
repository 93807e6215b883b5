//! The caught/not-caught result type.

use core::fmt;

use crate::fault::Panic;

/// Outcome of running a computation under capture.
///
/// Exactly one variant is produced per call. `Success` carries the value the
/// computation returned; `Failure` carries whatever was caught, unmodified.
///
/// # Type Parameters
///
/// - `D` - The success value.
/// - `E` - The failure payload. Defaults to [`Panic`], which is what
///   [`try_sync`](crate::try_sync) produces; [`try_async`](crate::try_async)
///   produces [`Fault<E>`](crate::Fault).
///
/// # Examples
///
/// ```
/// use caught::{try_sync, Outcome};
///
/// let outcome = try_sync(|s: &str| format!("string {s}"), ("value",));
/// assert!(!outcome.caught());
/// assert!(matches!(outcome, Outcome::Success(ref v) if v == "string value"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an Outcome may hold a caught failure that should be inspected"]
pub enum Outcome<D, E = Panic> {
    /// The computation completed normally.
    Success(D),
    /// The computation failed; the payload is the captured fault.
    Failure(E),
}

impl<D, E> Outcome<D, E> {
    /// `true` for `Failure`, `false` for `Success`.
    #[inline]
    pub const fn caught(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// `true` for `Failure`; same as [`caught`](Self::caught).
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.caught()
    }

    /// The success value, if any.
    #[inline]
    pub fn success(&self) -> Option<&D> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// The captured failure, if any.
    #[inline]
    pub fn failure(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    /// Consume and return the success value, dropping any failure.
    #[inline]
    pub fn into_success(self) -> Option<D> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// Consume and return the failure payload, dropping any success value.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    /// Borrow both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&D, &E> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(D) -> U,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transform the failure payload.
    pub fn map_failure<O, F>(self, f: F) -> Outcome<D, O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(f(e)),
        }
    }

    /// Convert to a standard `Result`, so `?` can be used again.
    #[inline]
    pub fn into_result(self) -> core::result::Result<D, E> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }
}

impl<D, E> From<core::result::Result<D, E>> for Outcome<D, E> {
    #[inline]
    fn from(result: core::result::Result<D, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e),
        }
    }
}

impl<D, E> From<Outcome<D, E>> for core::result::Result<D, E> {
    #[inline]
    fn from(outcome: Outcome<D, E>) -> Self {
        outcome.into_result()
    }
}

// Mirrors the `{ caught, value }` shape so logs read the same in both variants.
impl<D: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(match self {
            Outcome::Success(_) => "Success",
            Outcome::Failure(_) => "Failure",
        });
        s.field("caught", &self.caught());
        match self {
            Outcome::Success(v) => s.field("value", v),
            Outcome::Failure(e) => s.field("value", e),
        };
        s.finish()
    }
}

// ============================================================
// Serde support
// ============================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::ser::SerializeStruct;
    use serde::{Serialize, Serializer};

    impl<D: Serialize, E: Serialize> Serialize for Outcome<D, E> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Outcome", 2)?;
            state.serialize_field("caught", &self.caught())?;
            match self {
                Outcome::Success(v) => state.serialize_field("value", v)?,
                Outcome::Failure(e) => state.serialize_field("value", e)?,
            }
            state.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_matches_variant() {
        let ok: Outcome<i32, &str> = Outcome::Success(1);
        let err: Outcome<i32, &str> = Outcome::Failure("bad");
        assert!(!ok.caught() && ok.is_success());
        assert!(err.caught() && err.is_failure());
        assert_eq!(ok.success(), Some(&1));
        assert_eq!(ok.failure(), None);
        assert_eq!(err.failure(), Some(&"bad"));
        assert_eq!(err.success(), None);
    }

    #[test]
    fn test_result_conversions() {
        let outcome: Outcome<i32, String> = Err::<i32, _>("bad".to_string()).into();
        assert_eq!(outcome, Outcome::Failure("bad".to_string()));
        let back: Result<i32, String> = outcome.into();
        assert_eq!(back, Err("bad".to_string()));
        assert_eq!(Outcome::<_, ()>::from(Ok(3)).into_result(), Ok(3));
    }

    #[test]
    fn test_absent_failure_is_preserved() {
        let outcome: Outcome<i32, Option<String>> = Outcome::Failure(None);
        assert!(outcome.caught());
        assert_eq!(outcome.into_failure(), Some(None));
    }

    #[test]
    fn test_map_keeps_tag() {
        let ok: Outcome<i32, &str> = Outcome::Success(2);
        assert_eq!(ok.map(|v| v * 10), Outcome::Success(20));
        let err: Outcome<i32, &str> = Outcome::Failure("bad");
        assert_eq!(err.map(|v| v * 10), Outcome::Failure("bad"));
        assert_eq!(err.map_failure(str::len), Outcome::Failure(3));
        assert_eq!(err.as_ref(), Outcome::Failure(&"bad"));
    }

    #[test]
    fn test_debug_shape() {
        let ok: Outcome<&str, ()> = Outcome::Success("x");
        assert_eq!(format!("{:?}", ok), r#"Success { caught: false, value: "x" }"#);
        let err: Outcome<(), ()> = Outcome::Failure(());
        assert_eq!(format!("{:?}", err), "Failure { caught: true, value: () }");
    }
}
