//! The `try_sync!` and `try_async!` macros.
//!
//! Both spell positional arguments out at the call site and pack them into
//! the tuple the function entry points expect.

/// Run a callable with positional arguments and capture any panic.
///
/// `try_sync!(f, a, b)` is `try_sync(f, (a, b))`.
///
/// ```
/// use caught::try_sync;
///
/// let outcome = try_sync!(|s: &str| format!("string {s}"), "value");
/// assert_eq!(outcome.into_success().as_deref(), Some("string value"));
///
/// let outcome = try_sync!(|| -> () { panic!("Nice error") });
/// assert_eq!(outcome.failure().and_then(|p| p.message()), Some("Nice error"));
/// ```
#[macro_export]
macro_rules! try_sync {
    ($target:expr $(, $arg:expr)* $(,)?) => {
        $crate::try_sync($target, ($($arg,)*))
    };
}

/// Capture how a deferred computation settles.
///
/// - `try_async!(future)` awaits an already-formed future.
/// - `try_async!(call f, a, b)` invokes `f(a, b)` now and awaits the future it
///   returns.
///
/// ```
/// # futures::executor::block_on(async {
/// use caught::try_async;
///
/// let outcome = try_async!(async { Ok::<_, ()>("x") }).await;
/// assert_eq!(outcome.into_success(), Some("x"));
///
/// let outcome = try_async!(call |arg: String| async move { Ok::<_, ()>(arg + " test") }, "this is".to_owned()).await;
/// assert_eq!(outcome.into_success().as_deref(), Some("this is test"));
/// # });
/// ```
#[macro_export]
macro_rules! try_async {
    (call $target:expr $(, $arg:expr)* $(,)?) => {
        $crate::try_async_with($target, ($($arg,)*))
    };
    ($deferred:expr $(,)?) => {
        $crate::try_async($deferred)
    };
}
