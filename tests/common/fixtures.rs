use serde_json::{Value, json};
use tocspy::InMemoryDocument;

/// Build an in-memory page from a JSON description:
///
/// ```json
/// { "pathname": "/guide",
///   "headings": [["intro", 40.0], ["", 90.0]],
///   "links": ["/guide/#intro"],
///   "active": [0] }
/// ```
pub fn page_from_json(page: &Value) -> InMemoryDocument {
    let mut doc = InMemoryDocument::new()
        .with_pathname(page["pathname"].as_str().unwrap_or_default());

    for heading in page["headings"].as_array().into_iter().flatten() {
        let id = heading[0].as_str().unwrap_or_default();
        let top = heading[1].as_f64().unwrap_or(f64::NAN);
        doc = doc.with_heading(id, top);
    }

    let active: Vec<u64> = page["active"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_u64)
        .collect();
    for (index, href) in page["links"].as_array().into_iter().flatten().enumerate() {
        let href = href.as_str().unwrap_or_default();
        doc = if active.contains(&(index as u64)) {
            doc.with_active_link(href)
        } else {
            doc.with_link(href)
        };
    }
    doc
}

/// Links for every id on `pathname`, in the given order
pub fn links_for(pathname: &str, ids: &[&str]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| Value::String(format!("{pathname}/#{id}")))
            .collect(),
    )
}

/// Headings H1 (-50), H2 (120), H3 (500) with a link for each
pub fn three_headings_page() -> Value {
    json!({
        "pathname": "/docs/getting-started",
        "headings": [["h1", -50.0], ["h2", 120.0], ["h3", 500.0]],
        "links": links_for("/docs/getting-started", &["h1", "h2", "h3"]),
    })
}

/// A long article: sections every 400 units starting at the top edge
pub fn long_article() -> Value {
    let ids = ["overview", "install", "configure", "deploy", "faq"];
    let headings: Vec<Value> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| json!([id, 10.0 + 400.0 * i as f64]))
        .collect();
    json!({
        "pathname": "/manual",
        "headings": headings,
        "links": links_for("/manual", &ids),
    })
}
