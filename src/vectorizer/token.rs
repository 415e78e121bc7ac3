use std::collections::HashSet;

use indexmap::IndexMap;

use crate::vectorizer::stop_words::ENGLISH_STOP_WORDS;

/// Term occurrence counts for one document.
///
/// Keeps the count of each term and the total number of terms,
/// in first-seen order.
///
/// # Examples
/// ```
/// use book_recommender::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["hobbit", "adventure", "hobbit"]);
/// assert_eq!(freq.term_count("hobbit"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    term_count: IndexMap<Box<str>, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(Box::from(term)).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// occurrences of `term`, zero when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// total number of terms added
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// number of distinct terms
    #[inline]
    pub fn unique_term_count(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// distinct terms in first-seen order
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|t| t.as_ref())
    }

    /// `(term, count)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(t, c)| (t.as_ref(), *c))
    }
}

/// Splits text into lowercase word terms and removes stop words.
///
/// A term is a maximal run of alphanumeric or `_` characters with at least
/// `min_len` characters.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
    min_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Tokenizer {
    /// English stop words, terms shorter than `min_len` chars dropped
    pub fn new(min_len: usize) -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            min_len,
        }
    }

    #[inline]
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|t| t.chars().count() >= self.min_len)
            .filter(|t| !self.is_stop_word(t))
            .map(String::from)
            .collect()
    }

    /// Tokenize straight into a `TermFrequency`
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.tokenize(text));
        freq
    }
}
