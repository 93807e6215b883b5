//! Extension traits for `Result` and fallible futures.

use core::future::Future;

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Extension trait for turning a `Result` into an [`Outcome`].
pub trait OutcomeExt<T, E> {
    /// `Ok` becomes `Success`, `Err` becomes `Failure`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> OutcomeExt<T, E> for core::result::Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

/// Extension trait for capturing how a fallible future settles.
///
/// ```
/// # futures::executor::block_on(async {
/// use caught::CatchExt;
///
/// let outcome = async { Err::<u8, _>("nope") }.caught().await;
/// assert!(outcome.caught());
/// # });
/// ```
pub trait CatchExt<T, E>: Future<Output = core::result::Result<T, E>> + Sized {
    /// Same as [`try_async(self)`](crate::try_async).
    fn caught(self) -> impl Future<Output = Outcome<T, Fault<E>>> {
        crate::deferred::try_async(self)
    }
}

impl<F, T, E> CatchExt<T, E> for F where F: Future<Output = core::result::Result<T, E>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_into_outcome() {
        let ok: Result<i32, ()> = Ok(1);
        assert_eq!(ok.into_outcome(), Outcome::Success(1));
        let err: Result<i32, ()> = Err(());
        assert_eq!(err.into_outcome(), Outcome::Failure(()));
    }

    #[test]
    fn test_caught_future() {
        let outcome = block_on(async { Ok::<_, ()>("done") }.caught());
        assert_eq!(outcome.into_success(), Some("done"));
    }
}
