/// Marker appended to a snippet that was cut short
pub const ELLIPSIS: &str = "...";

/// Collapses every run of whitespace into a single space and trims the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max_words` words of `text`, joined by single spaces.
///
/// [`ELLIPSIS`] is appended only when words were left out.
pub fn snippet(text: &str, max_words: usize) -> String {
    let mut words = text.split_whitespace();
    let mut result = words.by_ref().take(max_words).collect::<Vec<_>>().join(" ");

    if words.next().is_some() {
        result.push_str(ELLIPSIS);
    }

    result
}
