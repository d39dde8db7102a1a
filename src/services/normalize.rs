//! Canonical forms of recognized label text.

/// Two views of one OCR result: the raw text as recognized, and a lowercased,
/// whitespace-collapsed copy used for keyword and pattern checks.
#[derive(Debug, Clone)]
pub struct RecognizedText {
    raw: String,
    normalized: String,
}

impl RecognizedText {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = collapse_whitespace(&raw).to_lowercase();
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Join all whitespace-separated tokens with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical comparable form used by the fuzzy matcher.
///
/// Lowercases, folds typographic quotes and dashes to ASCII, then drops every
/// character other than `a-z`, `0-9`, apostrophe, hyphen and whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(fold_typographic)
        .filter(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '\'' || *c == '-' || c.is_whitespace()
        })
        .collect()
}

fn fold_typographic(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2013}' | '\u{2014}' => '-',
        other => other,
    }
}
