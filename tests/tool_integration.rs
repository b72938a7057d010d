//! Tool adapter tests against a live Chrome. All ignored by default; run with
//! `cargo test -- --ignored` on a host with Chrome installed.

use browser_pilot::browser::{BrowserSession, LaunchOptions};
use browser_pilot::tools::{ToolContext, ToolRegistry};
use serde_json::json;
use std::time::Instant;

fn launch() -> BrowserSession {
    BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser")
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_form_input_leaves_field_holding_the_text() {
    let session = launch();
    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::new(&session);

    session
        .navigate("data:text/html,<html><body><input id='name' value='stale'></body></html>")
        .expect("Failed to navigate");

    registry
        .execute("form_input", json!({"selector": "#name", "text": "cats"}), &mut context)
        .expect("form_input failed");

    let value = session
        .evaluate("document.querySelector('#name').value")
        .expect("Failed to read field value");
    assert_eq!(value, Some(json!("cats")));
}

#[test]
#[ignore]
fn test_wait_and_click_times_out_instead_of_hanging() {
    let session = launch();
    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::new(&session);

    session
        .navigate("data:text/html,<html><body><p>nothing clickable</p></body></html>")
        .expect("Failed to navigate");

    let started = Instant::now();
    let result = registry.execute(
        "wait_and_click",
        json!({"selector": "#never-appears", "timeout_ms": 1000}),
        &mut context,
    );

    assert!(result.is_err(), "click on an absent selector must fail");
    // Bounded: well under the 30s default, not an indefinite hang
    assert!(started.elapsed().as_secs() < 10);
}

#[test]
#[ignore]
fn test_extract_text_with_selector() {
    let session = launch();
    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::new(&session);

    session
        .navigate("data:text/html,<html><body><p class='hit'>first</p><p class='hit'>second</p></body></html>")
        .expect("Failed to navigate");

    let result = registry
        .execute("extract_text", json!({"selector": ".hit"}), &mut context)
        .expect("extract_text failed");

    let data = result.data.expect("no data");
    assert_eq!(data["matches"], 2);
    let text = data["text"].as_str().unwrap();
    assert!(text.contains("first") && text.contains("second"));
}

#[test]
#[ignore]
fn test_select_dropdown_option_by_label() {
    let session = launch();
    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::new(&session);

    session
        .navigate(
            "data:text/html,<html><body><select id='c'>\
             <option value='us'>United States</option>\
             <option value='jp'>Japan</option></select></body></html>",
        )
        .expect("Failed to navigate");

    registry
        .execute(
            "select_dropdown_option",
            json!({"selector": "#c", "value": "", "label": "Japan"}),
            &mut context,
        )
        .expect("select failed");

    let value = session.evaluate("document.querySelector('#c').value").expect("Failed to read value");
    assert_eq!(value, Some(json!("jp")));
}

#[test]
#[ignore]
fn test_unknown_tool_is_reported_not_executed() {
    let session = launch();
    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::new(&session);

    let result = registry.execute("teleport", json!({}), &mut context);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("teleport"));
}
