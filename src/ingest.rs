//! Validation and ingestion of raw word files.
//!
//! Each [`WordFile`] is checked in three steps: its name must be alphabetic,
//! its text must not be blank, and every line must be an alphabetic word.
//! Rejected lines are dropped and reported; they never stop the rest of the
//! file or the rest of the run from being processed.

use tracing::{debug, info, warn};

use crate::issue::ValidationIssue;
use crate::word::{is_alphabetic_word, property_name};

/// A named blob of raw word-list text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFile {
    pub name: String,
    pub text: String,
}

impl WordFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Build a word file with each line terminated by `\n`.
    ///
    /// Every given line, trailing empty ones included, comes back out of
    /// [`WordFile::lines`] as a candidate.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        Self::new(name, text)
    }

    /// Candidate words: one per line, `\n` or `\r\n` terminated.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The validated words of one accepted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    pub source_name: String,
    pub property_name: String,
    pub words: Vec<String>,
}

/// What to do with the words of a file whose name is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidNamePolicy {
    /// Report the name and ignore the file's contents.
    #[default]
    Skip,
    /// Report the name, then still scan the words for diagnostics.
    /// No word set is produced either way.
    ScanWords,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    pub invalid_name_policy: InvalidNamePolicy,
}

/// Output of one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingestion {
    /// Accepted sources, in input order
    pub word_sets: Vec<WordSet>,
    pub issues: Vec<ValidationIssue>,
}

impl Ingestion {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }
}

/// Ingest `files` with the default options.
pub fn ingest<I>(files: I) -> Ingestion
where
    I: IntoIterator<Item = WordFile>,
{
    ingest_with(files, IngestOptions::default())
}

pub fn ingest_with<I>(files: I, options: IngestOptions) -> Ingestion
where
    I: IntoIterator<Item = WordFile>,
{
    let mut ingestion = Ingestion::default();
    let mut sources = 0usize;

    for file in files {
        sources += 1;
        if let Some(word_set) = ingest_file(&file, options, &mut ingestion.issues) {
            debug!(
                source = %word_set.source_name,
                property = %word_set.property_name,
                words = word_set.words.len(),
                "accepted word file"
            );
            ingestion.word_sets.push(word_set);
        }
    }

    info!(
        sources,
        accepted = ingestion.word_sets.len(),
        issues = ingestion.issues.len(),
        "ingestion finished"
    );
    ingestion
}

fn ingest_file(
    file: &WordFile,
    options: IngestOptions,
    issues: &mut Vec<ValidationIssue>,
) -> Option<WordSet> {
    if !is_alphabetic_word(&file.name) {
        report(
            issues,
            ValidationIssue::InvalidName {
                name: file.name.clone(),
            },
        );
        if options.invalid_name_policy == InvalidNamePolicy::ScanWords && !file.is_blank() {
            validate_words(file, issues);
        }
        return None;
    }

    if file.is_blank() {
        report(
            issues,
            ValidationIssue::EmptySource {
                source_name: file.name.clone(),
            },
        );
        return None;
    }

    let words = validate_words(file, issues);
    if words.is_empty() {
        debug!(source = %file.name, "no valid words left, dropping source");
        return None;
    }

    Some(WordSet {
        source_name: file.name.clone(),
        property_name: property_name(&file.name),
        words,
    })
}

fn validate_words(file: &WordFile, issues: &mut Vec<ValidationIssue>) -> Vec<String> {
    let mut words = Vec::new();
    for (line, word) in file.lines().enumerate() {
        if is_alphabetic_word(word) {
            words.push(word.to_string());
        } else {
            report(
                issues,
                ValidationIssue::InvalidWord {
                    word: word.to_string(),
                    source_name: file.name.clone(),
                    line,
                },
            );
        }
    }
    words
}

fn report(issues: &mut Vec<ValidationIssue>, issue: ValidationIssue) {
    warn!(
        code = issue.code(),
        source = %issue.source_name(),
        "{issue}"
    );
    issues.push(issue);
}
