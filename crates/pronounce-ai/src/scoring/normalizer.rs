const STRIPPED_PUNCTUATION: [char; 14] = [
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '{', '}', '[', ']',
];

/// Lowercase, strip sentence punctuation, and collapse whitespace so that
/// target and spoken text compare word-for-word.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = lowered.replace(STRIPPED_PUNCTUATION, "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn split_words(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
