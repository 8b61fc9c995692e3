use friendly_words::{
    build, ingest, FriendlyWords, IngestOptions, IssueKind, ValidationIssue, WordFile, WordSet,
};

fn word_set(source_name: &str, property_name: &str, words: &[&str]) -> WordSet {
    WordSet {
        source_name: source_name.to_string(),
        property_name: property_name.to_string(),
        words: words.iter().map(|w| w.to_string()).collect(),
    }
}

#[test]
fn test_lookup_by_property_name() {
    let assembly = FriendlyWords::build(vec![
        word_set("adjectives", "Adjectives", &["red", "quick", "odd"]),
        word_set("nouns", "Nouns", &["fox", "owl"]),
    ]);

    assert!(assembly.issues.is_empty());
    assert_eq!(assembly.words.len(), 2);

    let adjectives = assembly.words.get("Adjectives").unwrap();
    assert_eq!(adjectives.of_length(3), ["red", "odd"]);
    assert_eq!(adjectives.count(), 2);

    assert!(assembly.words.get("adjectives").is_none());
    assert!(assembly.words.get("Verbs").is_none());
}

#[test]
fn test_entries_keep_source_order() {
    let assembly = FriendlyWords::build(vec![
        word_set("zebra", "Zebra", &["z"]),
        word_set("apple", "Apple", &["a"]),
    ]);

    let names: Vec<&str> = assembly.words.property_names().collect();
    assert_eq!(names, ["Zebra", "Apple"]);
    assert_eq!(assembly.words.entries()[0].source_name, "zebra");
}

#[test]
fn test_entry_keeps_original_word_order() {
    let assembly = FriendlyWords::build(vec![word_set("mixed", "Mixed", &["ccc", "a", "bbb"])]);

    let entry = &assembly.words.entries()[0];
    assert_eq!(entry.words, ["ccc", "a", "bbb"]);
    assert_eq!(entry.collection.iter().collect::<Vec<_>>(), ["ccc", "bbb", "a"]);
}

#[test]
fn test_duplicate_property_name() {
    let assembly = FriendlyWords::build(vec![
        word_set("test", "Test", &["foo"]),
        word_set("Test", "Test", &["bar"]),
        word_set("other", "Other", &["baz"]),
    ]);

    assert_eq!(assembly.words.len(), 2);
    assert_eq!(
        assembly.words.get("Test").unwrap().iter().collect::<Vec<_>>(),
        ["foo"]
    );
    assert_eq!(
        assembly.issues,
        [ValidationIssue::DuplicatePropertyName {
            property_name: "Test".to_string(),
            source_name: "Test".to_string(),
            first_source: "test".to_string(),
        }]
    );
    assert!(assembly.issues[0].is_error());
}

#[test]
fn test_reserved_property_name() {
    let assembly = build(
        [
            WordFile::from_lines("self", ["foo"]),
            WordFile::from_lines("nouns", ["fox"]),
        ],
        IngestOptions::default(),
    );

    let names: Vec<&str> = assembly.words.property_names().collect();
    assert_eq!(names, ["Nouns"]);
    assert!(assembly.words.get("Self").is_none());
    assert_eq!(
        assembly.issues,
        [ValidationIssue::ReservedPropertyName {
            property_name: "Self".to_string(),
            source_name: "self".to_string(),
        }]
    );
    assert!(assembly.issues[0].is_error());
}

#[test]
fn test_parallel_build_matches_sequential() {
    let sets: Vec<WordSet> = (0..64)
        .map(|i| {
            let name = format!("source{}", "x".repeat(i));
            let words: Vec<String> = (1..=i + 1).map(|n| "w".repeat(n)).collect();
            WordSet {
                property_name: name.clone(),
                source_name: name,
                words,
            }
        })
        .collect();

    let sequential = FriendlyWords::build(sets.clone());
    let parallel = FriendlyWords::build_parallel(sets);

    assert_eq!(sequential.words.entries(), parallel.words.entries());
}

#[test]
fn test_build_end_to_end() {
    let assembly = build(
        [
            WordFile::from_lines("colors", ["red", "blue", "gr33n"]),
            WordFile::from_lines("Colors", ["cyan"]),
            WordFile::from_lines("sh@pes", ["circle"]),
        ],
        IngestOptions::default(),
    );

    assert_eq!(assembly.words.len(), 1);
    assert_eq!(assembly.words.get("Colors").unwrap().of_length(4), ["blue"]);

    let kinds: Vec<IssueKind> = assembly.issues.iter().map(ValidationIssue::kind).collect();
    assert_eq!(
        kinds,
        [
            IssueKind::InvalidWord,
            IssueKind::InvalidName,
            IssueKind::DuplicatePropertyName,
        ]
    );
}

#[test]
fn test_ingest_then_build() {
    let ingestion = ingest([WordFile::from_lines("test", ["foo", "bar"])]);
    let assembly = FriendlyWords::build(ingestion.word_sets);

    let collection = assembly.words.get("Test").unwrap();
    assert_eq!(collection.count(), 1);
    assert_eq!(collection.of_length(3), ["foo", "bar"]);
}

#[test]
fn test_empty_registry() {
    let assembly = FriendlyWords::build(Vec::new());
    assert!(assembly.words.is_empty());
    assert!(assembly.issues.is_empty());
}
