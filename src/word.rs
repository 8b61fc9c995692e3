//! The alphabetic word rule shared by source names and words.
//!
//! A name or word is accepted iff it is non-empty and every character is an
//! ASCII letter (`^[A-Za-z]+$`). The match is anchored: there is no partial
//! acceptance, so digits, whitespace, punctuation and non-ASCII letters all
//! reject the whole string.

/// Check a candidate against the alphabetic rule.
pub fn is_alphabetic_word(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Derive the accessor name for a source name.
///
/// Source names are single alphabetic words with no separators, so
/// title-casing reduces to upper-casing the first letter; the rest of the
/// name is kept as given. The transformation is ASCII-only and does not
/// depend on the current locale.
pub fn property_name(source_name: &str) -> String {
    let mut chars = source_name.chars();
    match chars.next() {
        Some(first) => {
            let mut name = String::with_capacity(source_name.len());
            name.push(first.to_ascii_uppercase());
            name.push_str(chars.as_str());
            name
        }
        None => String::new(),
    }
}

// Strict and reserved Rust keywords.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Check whether `name` cannot be used as an item name in generated Rust.
pub fn is_reserved_identifier(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}
