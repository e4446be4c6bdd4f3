use crate::parsers::compile_selector;
use crate::parsers::description::{decode_lenient, description_field, structured_data_blocks};
use crate::testing::detail_page;
use serde_json::json;

const LD_JSON: &str = r#"script[type="application/ld+json"]"#;

#[test]
fn test_finds_structured_data_block() {
    let selector = compile_selector(LD_JSON).unwrap();
    let blocks = structured_data_blocks(&detail_page("<p>Hi</p>"), &selector);
    assert_eq!(blocks.len(), 1);
    let value = decode_lenient(&blocks[0]).unwrap();
    assert_eq!(description_field(&value), Some("<p>Hi</p>"));
}

#[test]
fn test_ignores_other_scripts() {
    let selector = compile_selector(LD_JSON).unwrap();
    let html = r#"<html><head><script>var x = {"description": "no"};</script></head></html>"#;
    assert!(structured_data_blocks(html, &selector).is_empty());
}

#[test]
fn test_collects_every_block_in_order() {
    let selector = compile_selector(LD_JSON).unwrap();
    let html = r#"<html><head>
        <script type="application/ld+json">{"@type": "BreadcrumbList"}</script>
        <script type="application/ld+json">   </script>
        <script type="application/ld+json">{"@type": "JobPosting", "description": "Rust"}</script>
    </head></html>"#;

    let blocks = structured_data_blocks(html, &selector);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("BreadcrumbList"));
    assert!(blocks[1].contains("JobPosting"));
}

#[test]
fn test_lenient_decode_accepts_raw_newlines() {
    let text = "{\"description\": \"<p>Line one\nLine\ttwo</p>\"}";
    assert!(serde_json::from_str::<serde_json::Value>(text).is_err());

    let value = decode_lenient(text).unwrap();
    assert_eq!(description_field(&value), Some("<p>Line one\nLine\ttwo</p>"));
}

#[test]
fn test_lenient_decode_keeps_escaped_quotes() {
    let text = "{\"description\": \"say \\\"hi\\\"\n\"}";
    let value = decode_lenient(text).unwrap();
    assert_eq!(description_field(&value), Some("say \"hi\"\n"));
}

#[test]
fn test_garbage_fails_to_decode() {
    assert!(decode_lenient("{description: <p>").is_err());
}

#[test]
fn test_description_in_array_or_graph() {
    let array = json!([{"@type": "Organization"}, {"description": "from array"}]);
    assert_eq!(description_field(&array), Some("from array"));

    let graph = json!({"@graph": [{"@type": "WebPage"}, {"description": "from graph"}]});
    assert_eq!(description_field(&graph), Some("from graph"));
}

#[test]
fn test_missing_description() {
    assert_eq!(description_field(&json!({"title": "Rust Engineer"})), None);
    assert_eq!(description_field(&json!({"description": 42})), None);
}
