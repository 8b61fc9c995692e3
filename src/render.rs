//! Rust source emission for assembled word collections.
//!
//! The output declares one `static` slice per entry, named after the entry's
//! property name and holding its words in their original order. It is meant
//! to be written to `OUT_DIR` by a build script and pulled in with
//! `include!`, so it carries no inner attributes.

use std::fmt::Write;

use crate::registry::FriendlyWords;

const HEADER: &str = "// @generated by friendly-words. Do not edit.\n";

/// Render `words` as Rust source.
pub fn render_module(words: &FriendlyWords) -> String {
    let mut out = String::from(HEADER);

    for entry in words.entries() {
        out.push('\n');
        let _ = writeln!(
            out,
            "/// Words from `{}` ({} words, {} lengths).",
            entry.source_name,
            entry.collection.word_count(),
            entry.collection.count()
        );
        out.push_str("#[allow(non_upper_case_globals)]\n");
        let _ = write!(out, "pub static {}: &[&str] = &[", entry.property_name);
        for (i, word) in entry.words.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{word:?}");
        }
        out.push_str("];\n");
    }

    out
}
