//! Browser operation flow description model
//!
//! A [`Flow`] is an ordered, serializable description of intended browser
//! operations. It is documentation for humans and LLMs, not an executable
//! program: nothing in the agent's execution path consumes it.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single described browser action.
///
/// Five variants sharing two derived fields: a fixed `name` per variant and a
/// human-readable `description` generated from the variant's data (Click may
/// carry a hand-written override). Selectors and URLs are opaque strings; no
/// syntax validation happens at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Navigate to a URL
    Navigate { url: String },
    /// Enter a search keyword into a form field
    Search { selector: String, keyword: String },
    /// Click on an element
    Click { selector: String, description: Option<String> },
    /// Extract content from the page; no selector means the whole page
    Extract { selector: Option<String> },
    /// Filter extracted information by free-text criteria
    Filter { criteria: String },
}

impl Operation {
    pub fn navigate(url: impl Into<String>) -> Self {
        Operation::Navigate { url: url.into() }
    }

    pub fn search(selector: impl Into<String>, keyword: impl Into<String>) -> Self {
        Operation::Search { selector: selector.into(), keyword: keyword.into() }
    }

    pub fn click(selector: impl Into<String>) -> Self {
        Operation::Click { selector: selector.into(), description: None }
    }

    /// A click with a hand-written description instead of the generated one
    pub fn click_with_description(selector: impl Into<String>, description: impl Into<String>) -> Self {
        Operation::Click { selector: selector.into(), description: Some(description.into()) }
    }

    /// Extract content from the entire page
    pub fn extract() -> Self {
        Operation::Extract { selector: None }
    }

    /// Extract content from elements matching a selector
    pub fn extract_from(selector: impl Into<String>) -> Self {
        Operation::Extract { selector: Some(selector.into()) }
    }

    pub fn filter(criteria: impl Into<String>) -> Self {
        Operation::Filter { criteria: criteria.into() }
    }

    /// Fixed name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Navigate { .. } => "Navigate",
            Operation::Search { .. } => "Search",
            Operation::Click { .. } => "Click",
            Operation::Extract { .. } => "Extract",
            Operation::Filter { .. } => "Filter",
        }
    }

    /// Variant tag used in the serialized form
    pub fn type_tag(&self) -> &'static str {
        match self {
            Operation::Navigate { .. } => "NavigateOperation",
            Operation::Search { .. } => "SearchOperation",
            Operation::Click { .. } => "ClickOperation",
            Operation::Extract { .. } => "ExtractOperation",
            Operation::Filter { .. } => "FilterOperation",
        }
    }

    /// Human-readable description, generated from the variant's data
    pub fn description(&self) -> String {
        match self {
            Operation::Navigate { url } => format!("Navigate to {}", url),
            Operation::Search { selector, keyword } => format!("Enter '{}' into {}", keyword, selector),
            Operation::Click { selector, description } => description
                .clone()
                .unwrap_or_else(|| format!("Click on element matching '{}'", selector)),
            Operation::Extract { selector: None } => "Extract content from the entire page".to_string(),
            Operation::Extract { selector: Some(selector) } => {
                format!("Extract content from elements matching '{}'", selector)
            }
            Operation::Filter { criteria } => format!("Filter information using criteria: {}", criteria),
        }
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("operation serialization is infallible")
    }
}

// Key order is fixed (name, description, type, then variant fields) so that
// serializing the same operation twice yields identical text.
impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra_fields = match self {
            Operation::Search { .. } => 2,
            Operation::Extract { selector } => usize::from(selector.is_some()),
            _ => 1,
        };

        let mut map = serializer.serialize_map(Some(3 + extra_fields))?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("description", &self.description())?;
        map.serialize_entry("type", self.type_tag())?;

        match self {
            Operation::Navigate { url } => map.serialize_entry("url", url)?,
            Operation::Search { selector, keyword } => {
                map.serialize_entry("selector", selector)?;
                map.serialize_entry("keyword", keyword)?;
            }
            Operation::Click { selector, .. } => map.serialize_entry("selector", selector)?,
            Operation::Extract { selector } => {
                if let Some(selector) = selector {
                    map.serialize_entry("selector", selector)?;
                }
            }
            Operation::Filter { criteria } => map.serialize_entry("criteria", criteria)?,
        }

        map.end()
    }
}

/// An ordered sequence of operations forming a complete described flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    name: String,
    description: String,
    operations: Vec<Operation>,
}

impl Flow {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), operations: Vec::new() }
    }

    /// Append an operation. Order of appends is the intended execution order.
    pub fn add_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("flow serialization is infallible")
    }

    /// Serialize to a compact JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("flow serialization is infallible")
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("flow serialization is infallible")
    }
}

impl Serialize for Flow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("description", &self.description)?;
        map.serialize_entry("operations", &self.operations)?;
        map.end()
    }
}

/// A template flow showing the shape of a search-and-extract run, with
/// placeholder values to be filled in
pub fn example_flow() -> Flow {
    let mut flow = Flow::new(
        "Example Search and Extract Flow",
        "Access a website, search for a keyword, click a link, and extract content",
    );

    flow.add_operation(Operation::navigate("{WEBSITE_URL}"));
    flow.add_operation(Operation::search("{SEARCH_FORM_SELECTOR}", "{SEARCH_KEYWORD}"));
    flow.add_operation(Operation::click_with_description(
        "{SELECTOR_FOR_FIRST_LINK}",
        "Click the first search result link",
    ));
    flow.add_operation(Operation::extract());
    flow.add_operation(Operation::filter("{FILTERING_CRITERIA}"));

    flow
}

/// A concrete flow for searching Google and extracting the first result
pub fn google_search_flow(keyword: &str) -> Flow {
    let mut flow = Flow::new(
        format!("Google Search for '{}'", keyword),
        format!("Search Google for '{}' and extract the first result", keyword),
    );

    flow.add_operation(Operation::navigate("https://www.google.com"));
    flow.add_operation(Operation::search("input[name='q']", keyword));
    flow.add_operation(Operation::click_with_description("input[name='btnK']", "Click the Google Search button"));
    flow.add_operation(Operation::click_with_description(".g a", "Click the first search result link"));
    flow.add_operation(Operation::extract());

    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_navigate_serialization() {
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
    fn test_search_serialization() {
        let op = Operation::search("input[name=q]", "cats");
        assert_eq!(
            op.to_value(),
            json!({
                "name": "Search",
                "description": "Enter 'cats' into input[name=q]",
                "type": "SearchOperation",
                "selector": "input[name=q]",
                "keyword": "cats"
            })
        );
    }

    #[test]
    fn test_click_generated_and_custom_description() {
        let op = Operation::click("#go");
        assert_eq!(op.description(), "Click on element matching '#go'");

        let op = Operation::click_with_description("#go", "Press the go button");
        assert_eq!(op.description(), "Press the go button");
        // The override changes the description only, not the shape
        let value = op.to_value();
        assert_eq!(value["type"], "ClickOperation");
        assert_eq!(value["selector"], "#go");
    }

    #[test]
    fn test_extract_selector_omitted_when_absent() {
        let value = Operation::extract().to_value();
        assert_eq!(value["description"], "Extract content from the entire page");
        assert!(value.get("selector").is_none());

        let value = Operation::extract_from(".result").to_value();
        assert_eq!(value["selector"], ".result");
        assert_eq!(value["description"], "Extract content from elements matching '.result'");
    }

    #[test]
    fn test_filter_serialization() {
        let value = Operation::filter("prices under $10").to_value();
        assert_eq!(value["name"], "Filter");
        assert_eq!(value["type"], "FilterOperation");
        assert_eq!(value["criteria"], "prices under $10");
        assert_eq!(value["description"], "Filter information using criteria: prices under $10");
    }

    #[test]
    fn test_flow_preserves_append_order() {
        let mut flow = Flow::new("F", "ordered");
        flow.add_operation(Operation::navigate("https://a.example"));
        flow.add_operation(Operation::click("#first"));
        flow.add_operation(Operation::extract());

        let ops = flow.to_value()["operations"].as_array().unwrap().clone();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0]["type"], "NavigateOperation");
        assert_eq!(ops[1]["type"], "ClickOperation");
        assert_eq!(ops[2]["type"], "ExtractOperation");
    }

    #[test]
    fn test_flow_serialization_idempotent() {
        let flow = google_search_flow("rust tutorials");
        assert_eq!(flow.to_json(), flow.to_json());
        assert_eq!(flow.to_value(), flow.to_value());
    }

    #[test]
    fn test_serialized_keys_are_exact() {
        // Exactly name + description + type + variant fields, nothing else
        let value = Operation::search("input", "kw").to_value();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for key in ["name", "description", "type", "selector", "keyword"] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_example_flow_shape() {
        let flow = example_flow();
        assert_eq!(flow.operations().len(), 5);
        assert_eq!(flow.operations()[0].name(), "Navigate");
        assert_eq!(flow.operations()[4].name(), "Filter");
    }
}
