//! Steps shared by every HTTP behaviour suite.

use rstest_bdd_macros::{given, then};
use serde_json::Value;

use super::harness::{WorldFixture, last_body};

#[given("a running shelter server")]
fn a_running_shelter_server(world: &WorldFixture) {
    let _ = world;
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(world.world().borrow().last_status, Some(status));
}

#[then("the response has no body")]
fn the_response_has_no_body(world: &WorldFixture) {
    assert!(world.world().borrow().last_body.is_none());
}

#[then("the response is a success envelope")]
fn the_response_is_a_success_envelope(world: &WorldFixture) {
    let body = last_body(&world.world());
    assert_eq!(body.get("success"), Some(&Value::Bool(true)));
    assert!(body.get("timestamp").and_then(Value::as_str).is_some());
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &WorldFixture, code: String) {
    let body = last_body(&world.world());
    assert_eq!(body.get("success"), Some(&Value::Bool(false)));
    assert_eq!(body.get("error").and_then(Value::as_str), Some(code.as_str()));
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &WorldFixture, message: String) {
    let body = last_body(&world.world());
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some(message.as_str())
    );
}

#[then("the validation errors include {message}")]
fn the_validation_errors_include(world: &WorldFixture, message: String) {
    let body = last_body(&world.world());
    let errors = body
        .pointer("/details/errors")
        .and_then(Value::as_array)
        .expect("validation errors");
    assert!(
        errors.iter().any(|error| error.as_str() == Some(message.as_str())),
        "{message} missing from {errors:?}"
    );
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &WorldFixture) {
    let trace_id = world.world().borrow().last_trace_id.clone();
    let trace_id = trace_id.expect("trace-id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok(), "{trace_id}");
}

#[then("the page holds {count} items")]
fn the_page_holds(world: &WorldFixture, count: usize) {
    let body = last_body(&world.world());
    let data = body.get("data").and_then(Value::as_array).expect("data array");
    assert_eq!(data.len(), count);
}

#[then("the pagination total is {total}")]
fn the_pagination_total_is(world: &WorldFixture, total: u64) {
    let body = last_body(&world.world());
    assert_eq!(
        body.pointer("/pagination/total").and_then(Value::as_u64),
        Some(total)
    );
}

#[then("more items are available")]
fn more_items_are_available(world: &WorldFixture) {
    let body = last_body(&world.world());
    assert_eq!(
        body.pointer("/pagination/hasMore").and_then(Value::as_bool),
        Some(true)
    );
}

#[then("no further items are available")]
fn no_further_items_are_available(world: &WorldFixture) {
    let body = last_body(&world.world());
    assert_eq!(
        body.pointer("/pagination/hasMore").and_then(Value::as_bool),
        Some(false)
    );
}

#[then("the data field {field} is {value}")]
fn the_data_field_is(world: &WorldFixture, field: String, value: String) {
    let body = last_body(&world.world());
    let actual = body
        .get("data")
        .and_then(|data| data.get(&field))
        .unwrap_or(&Value::Null);
    let rendered = match actual {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    assert_eq!(rendered, value, "data.{field}");
}
