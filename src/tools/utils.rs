/// Normalize an incomplete URL by adding a missing protocol
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    // Already carries a scheme
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
        || trimmed.starts_with("data:")
        || trimmed.starts_with("about:")
    {
        return trimmed.to_string();
    }

    // Relative path - return as-is
    if trimmed.starts_with('/') || trimmed.starts_with("./") || trimmed.starts_with("../") {
        return trimmed.to_string();
    }

    // localhost special case - use http by default
    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    // Looks like a domain - add https://
    if trimmed.contains('.') {
        return format!("https://{}", trimmed);
    }

    // Single word - assume it's a .com domain, e.g. "google" -> "https://www.google.com"
    format!("https://www.{}.com", trimmed)
}

/// Render a Rust string as a quoted, escaped JavaScript string literal, for
/// safe embedding of selectors and values into evaluated snippets
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
