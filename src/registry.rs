//! Assembly of accepted word sets into a named registry.
//!
//! Every accepted source becomes one entry, keyed by its property name. Two
//! sources that title-case to the same name cannot both be exposed: the first
//! one wins and the later one is reported as a
//! [`ValidationIssue::DuplicatePropertyName`]. A name that is a Rust keyword
//! (a source called `self` becomes `Self`) cannot be emitted and is reported
//! as a [`ValidationIssue::ReservedPropertyName`].

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::collection::WordCollection;
use crate::ingest::WordSet;
use crate::issue::ValidationIssue;
use crate::word::is_reserved_identifier;

/// One named collection in a [`FriendlyWords`] registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub property_name: String,
    pub source_name: String,
    /// Accepted words in source order
    pub words: Vec<String>,
    pub collection: WordCollection,
}

/// The assembled collections, in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct FriendlyWords {
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
}

/// Result of assembling word sets.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub words: FriendlyWords,
    pub issues: Vec<ValidationIssue>,
}

impl FriendlyWords {
    /// Assemble the word sets one after another.
    pub fn build(word_sets: Vec<WordSet>) -> Assembly {
        let (accepted, issues) = check_property_names(word_sets);
        let entries = accepted.into_iter().map(into_entry).collect();
        finish(entries, issues)
    }

    /// Assemble the word sets, indexing each source on the rayon pool.
    ///
    /// Entry order matches [`FriendlyWords::build`].
    pub fn build_parallel(word_sets: Vec<WordSet>) -> Assembly {
        let (accepted, issues) = check_property_names(word_sets);
        let entries = accepted.into_par_iter().map(into_entry).collect();
        finish(entries, issues)
    }

    pub fn get(&self, property_name: &str) -> Option<&WordCollection> {
        self.by_name
            .get(property_name)
            .map(|&slot| &self.entries[slot].collection)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.property_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_property_names(word_sets: Vec<WordSet>) -> (Vec<WordSet>, Vec<ValidationIssue>) {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut accepted = Vec::with_capacity(word_sets.len());
    let mut issues = Vec::new();

    for word_set in word_sets {
        if is_reserved_identifier(&word_set.property_name) {
            let issue = ValidationIssue::ReservedPropertyName {
                property_name: word_set.property_name.clone(),
                source_name: word_set.source_name.clone(),
            };
            warn!(code = issue.code(), source = %word_set.source_name, "{issue}");
            issues.push(issue);
            continue;
        }
        if let Some(first_source) = seen.get(&word_set.property_name) {
            let issue = ValidationIssue::DuplicatePropertyName {
                property_name: word_set.property_name.clone(),
                source_name: word_set.source_name.clone(),
                first_source: first_source.clone(),
            };
            warn!(code = issue.code(), source = %word_set.source_name, "{issue}");
            issues.push(issue);
            continue;
        }
        seen.insert(word_set.property_name.clone(), word_set.source_name.clone());
        accepted.push(word_set);
    }

    (accepted, issues)
}

fn into_entry(word_set: WordSet) -> Entry {
    let collection = WordCollection::new(word_set.words.iter().cloned());
    debug!(
        property = %word_set.property_name,
        words = collection.word_count(),
        buckets = collection.count(),
        "indexed word set"
    );
    Entry {
        property_name: word_set.property_name,
        source_name: word_set.source_name,
        words: word_set.words,
        collection,
    }
}

fn finish(entries: Vec<Entry>, issues: Vec<ValidationIssue>) -> Assembly {
    let by_name = entries
        .iter()
        .enumerate()
        .map(|(slot, entry)| (entry.property_name.clone(), slot))
        .collect();
    info!(entries = entries.len(), rejected = issues.len(), "assembled word collections");
    Assembly {
        words: FriendlyWords { entries, by_name },
        issues,
    }
}
