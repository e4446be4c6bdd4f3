use crate::parsers::text::{self, ELLIPSIS};

fn words(n: usize) -> String {
    (1..=n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

#[test]
fn test_short_text_has_no_ellipsis() {
    assert_eq!(text::snippet("Backend developer wanted", 30), "Backend developer wanted");
}

#[test]
fn test_exactly_thirty_words_has_no_ellipsis() {
    let input = words(30);
    assert_eq!(text::snippet(&input, 30), input);
}

#[test]
fn test_long_text_keeps_first_thirty_words() {
    let result = text::snippet(&words(31), 30);
    assert_eq!(result, format!("{}{}", words(30), ELLIPSIS));
    assert_eq!(result.trim_end_matches(ELLIPSIS).split(' ').count(), 30);
}

#[test]
fn test_snippet_collapses_whitespace() {
    assert_eq!(text::snippet("  one \n two\t\tthree  ", 30), "one two three");
}

#[test]
fn test_empty_description_gives_empty_snippet() {
    assert_eq!(text::snippet("", 30), "");
}

#[test]
fn test_normalize_whitespace() {
    assert_eq!(text::normalize_whitespace("  a \n\n b  "), "a b");
}
