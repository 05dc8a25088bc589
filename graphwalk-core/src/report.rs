//! Output formatting - plaintext and JSON.
//!
//! Lists that come from an ordered walk (short words, self-loopers) are
//! printed in walk order. Sets (unreachable keys) are sorted first so output
//! is deterministic.

use serde_json::{json, Value};

/// Renders a query result in plain text.
///
/// `title` heads the list; `empty` is printed instead when there is nothing.
pub fn render_plain(title: &str, empty: &str, items: &[&str]) -> String {
    if items.is_empty() {
        return format!("{}\n", empty);
    }
    let mut out = format!("{} ({}):\n", title, items.len());
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    out
}

/// Renders a query result as a JSON object `{ "<field>": [...] }`.
pub fn render_json(field: &str, items: &[&str]) -> Value {
    json!({ field: items, "count": items.len() })
}

/// Prints a list in plain text format.
pub fn print_plain(title: &str, empty: &str, items: &[&str]) {
    print!("{}", render_plain(title, empty, items));
}

/// Prints a list in JSON format.
///
/// Falls back to a debug rendering if serialization fails.
pub fn print_json(field: &str, items: &[&str]) {
    match serde_json::to_string_pretty(&render_json(field, items)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::warn!(error = %e, "JSON serialization failed, using fallback");
            println!("{{\"{}\": {:?}}}", field, items);
        }
    }
}

/// Prints a single value (e.g. the longest word) as text or JSON.
pub fn print_value(field: &str, value: &Value, as_json: bool) {
    if as_json {
        println!("{}", json!({ field: value }));
    } else {
        match value {
            Value::String(s) => println!("{}", s),
            other => println!("{}", other),
        }
    }
}

/// Sorts set-like results for stable output.
pub fn sorted<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut v: Vec<&str> = items.into_iter().collect();
    v.sort_unstable();
    v
}
