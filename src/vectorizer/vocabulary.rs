use indexmap::IndexMap;

use crate::vectorizer::token::TermFrequency;

/// Document frequency of every term in one document set.
///
/// Terms are ordered lexicographically; a term's position is its column in
/// the term weight matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    doc_freq: IndexMap<Box<str>, u64>,
    doc_num: u64,
}

impl Vocabulary {
    /// Collect the vocabulary of a document set
    pub fn from_term_frequencies(freqs: &[TermFrequency]) -> Self {
        let mut doc_freq: IndexMap<Box<str>, u64> = IndexMap::new();
        for freq in freqs {
            for term in freq.term_set_iter() {
                doc_freq
                    .entry(Box::from(term))
                    .and_modify(|count| *count += 1)
                    .or_insert(1);
            }
        }
        doc_freq.sort_unstable_keys();
        Self {
            doc_freq,
            doc_num: freqs.len() as u64,
        }
    }

    /// column of `term`
    #[inline]
    pub fn column_of(&self, term: &str) -> Option<usize> {
        self.doc_freq.get_index_of(term)
    }

    /// number of documents containing `term`
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// number of documents the vocabulary was built from
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// number of distinct terms
    #[inline]
    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }

    /// `(term, doc_freq)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.doc_freq.iter().map(|(t, df)| (t.as_ref(), *df))
    }

    /// term at `column`
    pub fn term(&self, column: usize) -> Option<&str> {
        self.doc_freq.get_index(column).map(|(t, _)| t.as_ref())
    }
}
