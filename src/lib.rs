//! # Friendly Words
//!
//! Validated, length-indexed word collections built from plain-text word lists.
//!
//! Word files are ingested with [`ingest`], which keeps only purely alphabetic
//! names and words and reports everything else as a [`ValidationIssue`]. The
//! accepted word sets are then assembled into a [`FriendlyWords`] registry of
//! [`WordCollection`]s, each answering length queries in constant time.

pub mod collection;
pub mod ingest;
pub mod issue;
pub mod registry;
pub mod render;
pub mod source;
pub mod word;

pub use collection::WordCollection;
pub use ingest::{
    ingest, ingest_with, IngestOptions, Ingestion, InvalidNamePolicy, WordFile, WordSet,
};
pub use issue::{IssueKind, Severity, ValidationIssue};
pub use registry::{Assembly, Entry, FriendlyWords};
pub use render::render_module;
pub use source::SourceError;
pub use word::{is_alphabetic_word, is_reserved_identifier, property_name};

/// Ingest `files` and assemble the accepted sources in one go.
///
/// The returned issues hold every ingestion issue followed by any duplicate
/// or reserved property names found during assembly.
pub fn build<I>(files: I, options: IngestOptions) -> Assembly
where
    I: IntoIterator<Item = WordFile>,
{
    let Ingestion { word_sets, mut issues } = ingest_with(files, options);
    let mut assembly = FriendlyWords::build_parallel(word_sets);
    issues.append(&mut assembly.issues);
    assembly.issues = issues;
    assembly
}
