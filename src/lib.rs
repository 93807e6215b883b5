//! caught - Turn panics and failed futures into inspectable outcome values
//!
//! # Overview
//!
//! `caught` runs a computation and hands back an [`Outcome`] instead of letting
//! a failure unwind through the caller. Call sites branch on the returned tag;
//! no failure ever escapes the wrappers.
//!
//! # Quick Start
//!
//! ```
//! use caught::{try_sync, Outcome};
//!
//! match try_sync!(|s: &str| s.parse::<u8>().expect("not a number"), "300") {
//!     Outcome::Success(n) => println!("parsed {n}"),
//!     Outcome::Failure(panic) => println!("caught: {panic}"),
//! }
//! ```
//!
//! # Entry Points
//!
//! | Entry point | Input | Output |
//! |-------------|-------|--------|
//! | `try_sync(f, args)` | callable + argument tuple | `Outcome<D, Panic>` |
//! | `try_sync!(f, a, b)` | callable + arguments | `Outcome<D, Panic>` |
//! | `try_async(fut)` | `Future<Output = Result<D, E>>` | future of `Outcome<D, Fault<E>>` |
//! | `try_async_with(f, args)` | callable returning such a future + argument tuple | future of `Outcome<D, Fault<E>>` |
//! | `try_async!(fut)` | future | same as `try_async` |
//! | `try_async!(call f, a, b)` | callable + arguments | same as `try_async_with` |
//! | `result.into_outcome()` | `Result<D, E>` | `Outcome<D, E>` |
//! | `fut.caught()` | fallible future | same as `try_async` |
//!
//! # Failure Payloads
//!
//! | Source | Payload |
//! |--------|---------|
//! | panic in a synchronous call | [`Panic`] |
//! | future resolved to `Err(e)` | [`Fault::Rejected`]`(e)` |
//! | panic in the callable or while polling | [`Fault::Panicked`] |
//!
//! Payloads are never inspected or rewritten. A panic raised with
//! `std::panic::panic_any(value)` comes back as `value` via
//! [`Panic::downcast`]; a future rejecting with `Err(())` or `Err(None)` comes
//! back as exactly that.
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize outcomes as `{ "caught": bool, "value": ... }` |
//! | `tracing` | `debug` events at every capture site |

// ============================================================
// Modules
// ============================================================

mod deferred;
mod ext;
mod fault;
mod invoke;
mod macros;
mod outcome;
mod sync;

// ============================================================
// Re-exports
// ============================================================

pub use deferred::{try_async, try_async_with};
pub use ext::{CatchExt, OutcomeExt};
pub use fault::{Fault, Panic};
pub use invoke::Invoke;
pub use outcome::Outcome;
pub use sync::try_sync;

// ============================================================
// Type aliases
// ============================================================

/// Outcome of [`try_async`] and [`try_async_with`].
pub type AsyncOutcome<D, E> = Outcome<D, Fault<E>>;
