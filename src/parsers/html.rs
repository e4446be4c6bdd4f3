use crate::parsers::text::normalize_whitespace;
use scraper::{ElementRef, Html, Node, Selector};

/// Visible text of a markup fragment.
///
/// Each text node is trimmed, empty ones are dropped and the rest are joined
/// with single spaces. Script and style contents are not visible text.
pub fn visible_text(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(markup);
    let mut parts = Vec::new();

    for node in fragment.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name()))
            .is_some_and(|name| matches!(name, "script" | "style" | "noscript"));
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}

/// Text of an element with whitespace runs collapsed
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// First match of `selector` below `element`, if it has non-empty text
pub fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_joins_fragments() {
        let text = visible_text("<p>Hello,</p><ul><li>world</li><li> again </li></ul>");
        assert_eq!(text, "Hello, world again");
    }

    #[test]
    fn test_visible_text_skips_scripts() {
        let text = visible_text("<p>Shown</p><script>var hidden = 1;</script>");
        assert_eq!(text, "Shown");
    }

    #[test]
    fn test_visible_text_decodes_entities() {
        assert_eq!(visible_text("<b>R&amp;D</b> team"), "R&D team");
    }

    #[test]
    fn test_element_text_collapses_line_breaks() {
        let doc = Html::parse_fragment("<h3><a href=\"/job/1\">\n  Senior\n\t Rust   Engineer\n</a></h3>");
        let anchor = Selector::parse("a").unwrap();
        let a = doc.select(&anchor).next().unwrap();
        assert_eq!(element_text(a), "Senior Rust Engineer");
    }

    #[test]
    fn test_visible_text_of_plain_text() {
        assert_eq!(visible_text("  just words  "), "just words");
        assert_eq!(visible_text("   "), "");
    }
}
