//! Synchronous capture.

use std::panic::{self, AssertUnwindSafe};

use crate::fault::Panic;
use crate::invoke::Invoke;
use crate::outcome::Outcome;

/// Run `target` with `args` right now and capture any panic.
///
/// The call happens on the current thread before this function returns.
/// Normal completion gives `Success(value)`; a panic of any kind gives
/// `Failure(Panic)` holding the raised payload untouched. No panic ever
/// escapes to the caller.
///
/// `target` does not have to be [`UnwindSafe`](std::panic::UnwindSafe). If it
/// shares mutable state with the caller, that state may be left half-updated
/// when a panic is captured.
///
/// The process panic hook still runs for captured panics.
///
/// # Examples
///
/// ```
/// use caught::try_sync;
///
/// let ok = try_sync(|s: &str| format!("string {s}"), ("value",));
/// assert_eq!(ok.success().map(String::as_str), Some("string value"));
///
/// let err = try_sync(|| -> u32 { panic!("Nice error") }, ());
/// assert!(err.caught());
/// ```
pub fn try_sync<F, A>(target: F, args: A) -> Outcome<<F as Invoke<A>>::Output, Panic>
where
    F: Invoke<A>,
{
    match panic::catch_unwind(AssertUnwindSafe(move || target.invoke(args))) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => {
            let caught = Panic::new(payload);
            #[cfg(feature = "tracing")]
            tracing::debug!(panic = ?caught.message(), "captured panic in synchronous call");
            Outcome::Failure(caught)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_passes_through() {
        let outcome = try_sync(|a: i32, b: i32| a * b, (6, 7));
        assert_eq!(outcome.into_success(), Some(42));
    }

    #[test]
    fn test_panic_is_captured() {
        let outcome = try_sync(|| -> i32 { panic!("boom {}", 1) }, ());
        assert_eq!(outcome.failure().and_then(Panic::message), Some("boom 1"));
    }

    #[test]
    fn test_runs_before_returning() {
        let mut ran = false;
        let _ = try_sync(|flag: &mut bool| *flag = true, (&mut ran,));
        assert!(ran);
    }
}
