use browser_pilot::flow::{Flow, Operation, example_flow, google_search_flow};
use serde_json::json;

#[test]
fn test_navigate_operation_serialized_form() {
    let op = Operation::navigate("https://example.com");

    assert_eq!(
        op.to_value(),
        json!({
            "name": "Navigate",
            "description": "Navigate to https://example.com",
            "type": "NavigateOperation",
            "url": "https://example.com"
        })
    );
}

#[test]
fn test_flow_with_one_search_operation() {
    let mut flow = Flow::new("Test", "D");
    flow.add_operation(Operation::search("input[name=q]", "cats"));

    assert_eq!(
        flow.to_value(),
        json!({
            "name": "Test",
            "description": "D",
            "operations": [{
                "name": "Search",
                "description": "Enter 'cats' into input[name=q]",
                "type": "SearchOperation",
                "selector": "input[name=q]",
                "keyword": "cats"
            }]
        })
    );
}

#[test]
fn test_serializing_twice_is_byte_identical() {
    let flow = google_search_flow("LangChain Playwright tutorial");

    assert_eq!(flow.to_json(), flow.to_json());
    assert_eq!(flow.to_json_pretty(), flow.to_json_pretty());
}

#[test]
fn test_appending_n_operations_yields_n_in_order() {
    let mut flow = Flow::new("N ops", "append order is execution order");
    let urls = ["https://a.example", "https://b.example", "https://c.example", "https://d.example"];
    for url in urls {
        flow.add_operation(Operation::navigate(url));
    }

    let value = flow.to_value();
    let ops = value["operations"].as_array().unwrap();
    assert_eq!(ops.len(), urls.len());
    for (op, url) in ops.iter().zip(urls) {
        assert_eq!(op["url"], url);
    }
}

#[test]
fn test_every_variant_has_exact_field_set() {
    let cases: Vec<(Operation, Vec<&str>)> = vec![
        (Operation::navigate("https://example.com"), vec!["url"]),
        (Operation::search("#q", "kw"), vec!["selector", "keyword"]),
        (Operation::click("#go"), vec!["selector"]),
        (Operation::extract(), vec![]),
        (Operation::extract_from(".hit"), vec!["selector"]),
        (Operation::filter("cheapest"), vec!["criteria"]),
    ];

    for (op, extra_keys) in cases {
        let value = op.to_value();
        let object = value.as_object().unwrap();

        for key in ["name", "description", "type"] {
            assert!(object.contains_key(key), "{} missing {}", op.name(), key);
        }
        for key in &extra_keys {
            assert!(object.contains_key(*key), "{} missing {}", op.name(), key);
        }
        assert_eq!(object.len(), 3 + extra_keys.len(), "{} has extra fields", op.name());
    }
}

#[test]
fn test_example_flow_matches_original_template() {
    let flow = example_flow();
    let value = flow.to_value();

    assert_eq!(value["name"], "Example Search and Extract Flow");
    let ops = value["operations"].as_array().unwrap();
    assert_eq!(ops.len(), 5);
    assert_eq!(ops[0]["type"], "NavigateOperation");
    assert_eq!(ops[1]["type"], "SearchOperation");
    assert_eq!(ops[2]["type"], "ClickOperation");
    assert_eq!(ops[2]["description"], "Click the first search result link");
    assert_eq!(ops[3]["type"], "ExtractOperation");
    assert_eq!(ops[4]["type"], "FilterOperation");
}

#[test]
fn test_google_search_flow_is_concrete() {
    let flow = google_search_flow("rust");
    let value = flow.to_value();

    assert_eq!(value["name"], "Google Search for 'rust'");
    let ops = value["operations"].as_array().unwrap();
    assert_eq!(ops[0]["url"], "https://www.google.com");
    assert_eq!(ops[1]["selector"], "input[name='q']");
    assert_eq!(ops[1]["keyword"], "rust");
}
