//! Asynchronous capture.
//!
//! A deferred computation is any future resolving to `Result<D, E>`. It can be
//! handed over already formed ([`try_async`]) or produced on the spot by a
//! callable ([`try_async_with`]). Either way the returned future resolves to
//! an [`Outcome`] and never panics.

use core::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::fault::{Fault, Panic};
use crate::invoke::Invoke;
use crate::outcome::Outcome;
use crate::AsyncOutcome;

/// Await an already-formed future and capture how it settles.
///
/// - `Ok(value)` gives `Success(value)`.
/// - `Err(reason)` gives `Failure(Fault::Rejected(reason))`, with `reason`
///   untouched, `()` and `None` included.
/// - A panic while polling gives `Failure(Fault::Panicked(..))`.
///
/// The future is awaited to completion; the wrapper adds no timeout and no
/// cancellation of its own.
///
/// # Examples
///
/// ```
/// # futures::executor::block_on(async {
/// use caught::{try_async, Outcome};
///
/// let outcome = try_async(async { Ok::<_, ()>("x") }).await;
/// assert!(matches!(outcome, Outcome::Success("x")));
/// # });
/// ```
pub async fn try_async<Fut, D, E>(deferred: Fut) -> AsyncOutcome<D, E>
where
    Fut: Future<Output = core::result::Result<D, E>>,
{
    match AssertUnwindSafe(deferred).catch_unwind().await {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(reason)) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                reason_type = core::any::type_name::<E>(),
                "captured rejected future"
            );
            Outcome::Failure(Fault::Rejected(reason))
        }
        Err(payload) => Outcome::Failure(Fault::Panicked(captured(payload))),
    }
}

/// Invoke `target` with `args` now, then await the future it returns.
///
/// The call happens before this function returns, on the current thread; only
/// the produced future is deferred. If the call itself panics there is nothing
/// to await, and the returned future resolves to
/// `Failure(Fault::Panicked(..))` on its first poll.
///
/// # Examples
///
/// ```
/// # futures::executor::block_on(async {
/// use caught::try_async_with;
///
/// async fn append(arg: String) -> Result<String, std::io::Error> {
///     Ok(arg + " test")
/// }
///
/// let outcome = try_async_with(append, ("this is".to_owned(),)).await;
/// assert_eq!(outcome.into_success().as_deref(), Some("this is test"));
/// # });
/// ```
pub fn try_async_with<F, A, Fut, D, E>(
    target: F,
    args: A,
) -> impl Future<Output = AsyncOutcome<D, E>>
where
    F: Invoke<A, Output = Fut>,
    Fut: Future<Output = core::result::Result<D, E>>,
{
    let invoked = panic::catch_unwind(AssertUnwindSafe(move || target.invoke(args)));
    async move {
        match invoked {
            Ok(deferred) => try_async(deferred).await,
            Err(payload) => Outcome::Failure(Fault::Panicked(captured(payload))),
        }
    }
}

fn captured(payload: Box<dyn core::any::Any + Send + 'static>) -> Panic {
    let caught = Panic::new(payload);
    #[cfg(feature = "tracing")]
    tracing::debug!(panic = ?caught.message(), "captured panic in deferred computation");
    caught
}
