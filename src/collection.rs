//! Length-indexed word collection.
//!
//! Words are grouped into buckets keyed by their length. Buckets are kept in
//! the order their length first appears in the input, and each bucket keeps
//! its words in input order. A side index maps a length to its bucket so
//! `of_length` is a constant-time lookup.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Bucket {
    length: usize,
    words: Vec<String>,
}

/// An immutable collection of words indexed by word length.
///
/// Note that [`WordCollection::count`] is the number of distinct lengths, not
/// the number of words. Use [`WordCollection::word_count`] for the latter.
#[derive(Debug, Clone, Default)]
pub struct WordCollection {
    buckets: Vec<Bucket>,
    by_length: HashMap<usize, usize>,
    word_count: usize,
}

impl WordCollection {
    /// Build the collection in a single pass over `words`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut by_length: HashMap<usize, usize> = HashMap::new();
        let mut word_count = 0;

        for word in words {
            let word = word.into();
            let length = word.chars().count();
            let slot = *by_length.entry(length).or_insert_with(|| {
                buckets.push(Bucket {
                    length,
                    words: Vec::new(),
                });
                buckets.len() - 1
            });
            buckets[slot].words.push(word);
            word_count += 1;
        }

        Self {
            buckets,
            by_length,
            word_count,
        }
    }

    /// Number of non-empty length buckets.
    pub fn count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of words across all buckets
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Words of exactly `length` characters, in input order.
    ///
    /// Absent lengths yield an empty slice.
    pub fn of_length(&self, length: usize) -> &[String] {
        match self.by_length.get(&length) {
            Some(&slot) => &self.buckets[slot].words,
            None => &[],
        }
    }

    /// Lengths present, in first-occurrence order.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|bucket| bucket.length)
    }

    /// `(length, words)` for each bucket, in first-occurrence order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.buckets
            .iter()
            .map(|bucket| (bucket.length, bucket.words.as_slice()))
    }

    /// Iterate every word, one whole bucket at a time.
    ///
    /// Each call starts a fresh pass, so the sequence can be walked any
    /// number of times.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            current: [].iter(),
            remaining: self.word_count,
        }
    }
}

impl PartialEq for WordCollection {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl Eq for WordCollection {}

impl<S: Into<String>> FromIterator<S> for WordCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WordCollection {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the words of a [`WordCollection`], grouped by length.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Bucket>,
    current: std::slice::Iter<'a, String>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.current.next() {
                self.remaining -= 1;
                return Some(word.as_str());
            }
            self.current = self.buckets.next()?.words.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl std::iter::FusedIterator for Iter<'_> {}
