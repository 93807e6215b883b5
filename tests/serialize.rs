//! JSON shape of outcomes. Run with `--features serde`.
#![cfg(feature = "serde")]

use caught::{try_async, try_sync, Outcome};
use futures::executor::block_on;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct User {
    id: u32,
    name: &'static str,
}

#[test]
fn success_shape() {
    let outcome = try_sync!(|id: u32| User { id, name: "ada" }, 7);
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "caught": false, "value": { "id": 7, "name": "ada" } })
    );
}

#[test]
fn panic_message_shape() {
    let outcome = try_sync!(|| -> u8 { panic!("Nice error") });
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "caught": true, "value": "Nice error" })
    );
}

#[test]
fn absent_reason_serializes_as_null() {
    let outcome = block_on(try_async(async { Err::<u8, Option<String>>(None) }));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "caught": true, "value": null })
    );

    let outcome = try_sync!(|| -> u8 { std::panic::panic_any(()) });
    assert_eq!(serde_json::to_value(&outcome).unwrap()["value"], json!(null));
}

#[test]
fn rejection_is_serialized_verbatim() {
    let outcome: Outcome<u8, _> =
        block_on(try_async(async { Err::<u8, _>(json!({ "code": 404 })) }));
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"caught":true,"value":{"code":404}}"#
    );
}
