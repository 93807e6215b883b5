//! Captured fault payloads.

use core::any::Any;
use core::fmt;

use std::error::Error as StdError;

// ============================================================
// Panic
// ============================================================

/// Payload of a captured panic, kept exactly as it was raised.
///
/// `panic!("...")` raises a `&'static str` or `String`; `std::panic::panic_any`
/// raises any `Send + 'static` value. Either way the box is stored untouched,
/// so the original object can be recovered with [`Panic::downcast`].
///
/// # Examples
///
/// ```
/// use caught::try_sync;
///
/// let outcome = try_sync(|| -> i32 { panic!("Nice error") }, ());
/// let panic = outcome.failure().unwrap();
/// assert_eq!(panic.message(), Some("Nice error"));
/// ```
pub struct Panic(Box<dyn Any + Send + 'static>);

/// Display text for payloads that are neither `&str` nor `String`.
const OPAQUE: &str = "panicked with a non-string payload";

impl Panic {
    /// Wrap a payload returned by `std::panic::catch_unwind`.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self(payload)
    }

    /// The panic message, if the payload is a `&'static str` or `String`.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.0.downcast_ref::<&'static str>() {
            Some(*s)
        } else {
            self.0.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Whether the panic carried no reason at all (a `()` payload).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is::<()>()
    }

    /// Whether the payload is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Borrow the payload as `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Take the payload back as `T`, or get `self` back unchanged.
    pub fn downcast<T: Any>(self) -> core::result::Result<T, Self> {
        match self.0.downcast::<T>() {
            Ok(v) => Ok(*v),
            Err(payload) => Err(Self(payload)),
        }
    }

    /// Take the panic message as an owned `String`.
    ///
    /// `String` payloads are moved out without copying; other payloads give
    /// the same text as `Display`. Useful where a `Send + Sync` error is
    /// needed, e.g. `anyhow::Error::msg(panic.into_message())`.
    pub fn into_message(self) -> String {
        match self.0.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => Self(payload).to_string(),
        }
    }

    /// Get the raw payload box.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.0
    }

    /// Re-raise the panic with its original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.0)
    }
}

impl From<Box<dyn Any + Send + 'static>> for Panic {
    #[inline]
    fn from(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self(payload)
    }
}

impl From<Panic> for String {
    #[inline]
    fn from(p: Panic) -> Self {
        p.into_message()
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.debug_tuple("Panic").field(&msg).finish(),
            None if self.is_empty() => f.write_str("Panic(())"),
            None => f.write_str("Panic(<opaque>)"),
        }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or(OPAQUE))
    }
}

impl StdError for Panic {}

// ============================================================
// Fault
// ============================================================

/// Why a deferred computation was caught.
///
/// A future can fail two ways: it resolves to `Err(reason)`, or something
/// panics (the callable that was meant to produce it, or the future while it
/// is being polled). The rejection reason is forwarded as-is, including empty
/// reasons such as `()` or `None`.
#[derive(Debug)]
pub enum Fault<E> {
    /// The future resolved to `Err`.
    Rejected(E),
    /// A panic was raised before or during settlement.
    Panicked(Panic),
}

impl<E> Fault<E> {
    /// The rejection reason, if the future resolved to `Err`.
    #[inline]
    pub fn rejection(&self) -> Option<&E> {
        match self {
            Fault::Rejected(e) => Some(e),
            Fault::Panicked(_) => None,
        }
    }

    /// The captured panic, if one was raised.
    #[inline]
    pub fn panic(&self) -> Option<&Panic> {
        match self {
            Fault::Rejected(_) => None,
            Fault::Panicked(p) => Some(p),
        }
    }

    /// Whether the future resolved to `Err`.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Fault::Rejected(_))
    }

    /// Whether a panic was captured.
    #[inline]
    pub fn is_panicked(&self) -> bool {
        matches!(self, Fault::Panicked(_))
    }

    /// Split into the rejection reason or the panic.
    pub fn into_rejection(self) -> core::result::Result<E, Panic> {
        match self {
            Fault::Rejected(e) => Ok(e),
            Fault::Panicked(p) => Err(p),
        }
    }

    /// Transform the rejection reason, leaving panics alone.
    pub fn map<O, F>(self, f: F) -> Fault<O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Fault::Rejected(e) => Fault::Rejected(f(e)),
            Fault::Panicked(p) => Fault::Panicked(p),
        }
    }
}

impl<E> From<Panic> for Fault<E> {
    #[inline]
    fn from(p: Panic) -> Self {
        Fault::Panicked(p)
    }
}

impl<E: fmt::Display> fmt::Display for Fault<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Rejected(e) => e.fmt(f),
            Fault::Panicked(p) => write!(f, "panicked: {}", p),
        }
    }
}

impl<E: StdError + 'static> StdError for Fault<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Fault::Rejected(e) => Some(e),
            Fault::Panicked(p) => Some(p),
        }
    }
}

// ============================================================
// Serde support
// ============================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Serialize, Serializer};

    // Opaque payloads have no text and serialize as null, like an absent reason.
    impl Serialize for Panic {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.message() {
                Some(msg) => serializer.serialize_some(msg),
                None => serializer.serialize_none(),
            }
        }
    }

    impl<E: Serialize> Serialize for Fault<E> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Fault::Rejected(e) => e.serialize(serializer),
                Fault::Panicked(p) => p.serialize(serializer),
            }
        }
    }
}
