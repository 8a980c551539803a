use ahash::RandomState;
use indexmap::IndexSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TokenFrequency;

/// Term to column index mapping.
/// Indices are assigned in first-seen order over the corpus and never change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>, RandomState>,
}

impl Vocabulary {
    /// Build from per-document frequencies, in document order
    pub fn from_frequencies(freqs: &[TokenFrequency]) -> Self {
        let mut terms: IndexSet<Box<str>, RandomState> = IndexSet::with_hasher(RandomState::new());
        for freq in freqs {
            for token in freq.token_set_ref_str() {
                if !terms.contains(token) {
                    terms.insert(token.into());
                }
            }
        }
        Self { terms }
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in index order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.terms.iter().map(|t| t.as_ref())
    }
}

/// Document frequency statistics of a corpus.
/// Base data for IDF calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Corpus {
    /// number of documents
    doc_num: u64,
    /// doc_freq[i] = number of documents containing vocabulary term i
    doc_freq: Vec<u64>,
}

impl Corpus {
    /// Count document frequencies against `vocab`.
    /// With `parallel` the per-document counts are reduced with rayon;
    /// integer sums make both paths identical.
    pub fn from_frequencies(freqs: &[TokenFrequency], vocab: &Vocabulary, parallel: bool) -> Self {
        let count_into = |mut acc: Vec<u64>, freq: &TokenFrequency| {
            for token in freq.token_set_ref_str() {
                if let Some(idx) = vocab.index_of(token) {
                    acc[idx] += 1;
                }
            }
            acc
        };

        let doc_freq = if parallel {
            freqs
                .par_iter()
                .fold(|| vec![0u64; vocab.len()], count_into)
                .reduce(
                    || vec![0u64; vocab.len()],
                    |mut a, b| {
                        a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                        a
                    },
                )
        } else {
            freqs.iter().fold(vec![0u64; vocab.len()], count_into)
        };

        Self {
            doc_num: freqs.len() as u64,
            doc_freq,
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Documents containing the term at `index`
    #[inline]
    pub fn get_doc_freq(&self, index: usize) -> u64 {
        self.doc_freq.get(index).copied().unwrap_or(0)
    }

    /// Vocabulary size the statistics were counted against
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.doc_freq.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(tokens: &[&str]) -> TokenFrequency {
        let mut f = TokenFrequency::new();
        f.add_tokens(tokens);
        f
    }

    #[test]
    fn vocabulary_assigns_first_seen_indices() {
        let freqs = vec![freq(&["cat", "sat", "cat"]), freq(&["dog", "cat"]), freq(&[])];
        let vocab = Vocabulary::from_frequencies(&freqs);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["cat", "sat", "dog"]);
        assert_eq!(vocab.index_of("dog"), Some(2));
        assert_eq!(vocab.term(1), Some("sat"));
        assert_eq!(vocab.index_of("bird"), None);
    }

    #[test]
    fn document_frequency_counts_documents_not_occurrences() {
        let freqs = vec![freq(&["cat", "cat", "cat"]), freq(&["cat", "dog"]), freq(&["dog"])];
        let vocab = Vocabulary::from_frequencies(&freqs);
        let corpus = Corpus::from_frequencies(&freqs, &vocab, false);
        assert_eq!(corpus.get_doc_num(), 3);
        assert_eq!(corpus.get_doc_freq(0), 2);
        assert_eq!(corpus.get_doc_freq(1), 2);
        assert_eq!(corpus.vocab_size(), 2);
    }

    #[test]
    fn parallel_counts_match_sequential() {
        let freqs: Vec<TokenFrequency> = (0..200)
            .map(|i| freq(&[["alpha", "beta", "gamma", "delta"][i % 4], "omega"]))
            .collect();
        let vocab = Vocabulary::from_frequencies(&freqs);
        let seq = Corpus::from_frequencies(&freqs, &vocab, false);
        let par = Corpus::from_frequencies(&freqs, &vocab, true);
        assert_eq!(seq, par);
        assert_eq!(seq.get_doc_freq(vocab.index_of("omega").unwrap()), 200);
    }
}
