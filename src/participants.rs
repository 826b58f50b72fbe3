//! Display helpers for participant identifiers.
//!
//! Identifiers are usually email addresses; the local part doubles as a crude
//! display name. `_`, `.` and `-` (and spaces) act as word breaks.

use unicode_segmentation::UnicodeSegmentation;

fn local_part(id: &str) -> &str {
    id.split('@').next().unwrap_or(id)
}

fn split_words(base: &str) -> Vec<&str> {
    base.split(|c| matches!(c, '_' | '.' | '-' | ' '))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Uppercase the first grapheme, leave the rest as-is.
fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}

/// Two-letter avatar initials: first letters of the first two words of the
/// local part, or the first two graphemes of a single word. Always uppercase.
pub fn initials(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    let words = split_words(local_part(id));
    let raw: String = match words.as_slice() {
        [] => String::new(),
        [only] => only.graphemes(true).take(2).collect(),
        [first, second, ..] => first
            .graphemes(true)
            .take(1)
            .chain(second.graphemes(true).take(1))
            .collect(),
    };
    raw.to_uppercase()
}

/// Human-readable name. Email-shaped input gets its local part split into
/// capitalized words; anything without an `@` is returned unchanged.
pub fn display_name(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    if !id.contains('@') {
        return id.to_string();
    }
    split_words(local_part(id))
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}
