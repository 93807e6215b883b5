//! Example: branching on outcomes instead of unwinding
//!
//! A fake config loader and user lookup, one synchronous and one async.

use caught::{try_async, try_sync, Fault, Outcome};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("User not found: {0}")]
    NotFound(u32),

    #[error("Backend unavailable")]
    Unavailable,
}

fn parse_port(raw: &str) -> u16 {
    raw.trim().parse().expect("port must be a number")
}

async fn find_user(id: u32) -> Result<String, LookupError> {
    tokio::task::yield_now().await;
    match id {
        1 => Ok("ada".into()),
        13 => Err(LookupError::Unavailable),
        _ => Err(LookupError::NotFound(id)),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Silence the default hook so captured panics don't clutter the output.
    std::panic::set_hook(Box::new(|_| {}));

    for raw in ["8080", "eighty"] {
        match try_sync!(parse_port, raw) {
            Outcome::Success(port) => println!("port {raw:?} -> {port}"),
            Outcome::Failure(panic) => println!("port {raw:?} caught: {panic}"),
        }
    }

    for id in [1, 2, 13] {
        match try_async(find_user(id)).await {
            Outcome::Success(name) => println!("user {id} -> {name}"),
            Outcome::Failure(Fault::Rejected(e)) => println!("user {id} rejected: {e}"),
            Outcome::Failure(Fault::Panicked(p)) => println!("user {id} panicked: {p}"),
        }
    }

    let outcome = try_async!(call |id: u32| async move {
        if id == 0 {
            panic!("id zero is reserved");
        }
        find_user(id).await
    }, 0)
    .await;
    println!("reserved id caught: {}", outcome.caught());
}
