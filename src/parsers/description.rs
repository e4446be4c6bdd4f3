use scraper::{Html, Selector};
use serde_json::Value;

/// Raw text of every non-empty structured-data block on a page, in document order
pub fn structured_data_blocks(html: &str, selector: &Selector) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(selector)
        .map(|script| script.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Decodes a linked-data document, tolerating raw control characters.
///
/// Sites routinely paste descriptions with literal newlines and tabs into
/// JSON strings. A strict decode is tried first; on failure those characters
/// are escaped and the decode is retried.
pub fn decode_lenient(text: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(strict_error) => {
            ::log::trace!("Strict decode failed ({}), retrying leniently", strict_error);
            serde_json::from_str(&escape_control_chars(text))
        }
    }
}

/// Escapes control characters that appear inside JSON string literals
fn escape_control_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if !in_string {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
            continue;
        }

        if escaped {
            escaped = false;
            out.push(c);
            continue;
        }

        match c {
            '\\' => {
                escaped = true;
                out.push(c);
            }
            '"' => {
                in_string = false;
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }

    out
}

/// The `description` of a linked-data document.
///
/// Looks at the top-level object, then at array elements and `@graph` nodes.
pub fn description_field(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => {
            if let Some(description) = map.get("description").and_then(Value::as_str) {
                return Some(description);
            }
            map.get("@graph").and_then(description_field)
        }
        Value::Array(items) => items.iter().find_map(description_field),
        _ => None,
    }
}
