use num::Num;

use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::corpus::{Corpus, Vocabulary};
use crate::vectorizer::token::TokenFrequency;

/// TF-IDF calculation engine.
/// Plug a different weighting into `Vectorizer<N, E>` by implementing this.
pub trait TFIDFEngine<N>
where
    N: Num + Copy,
{
    /// IDF value for every vocabulary term, indexed like the vocabulary
    fn idf_vec(corpus: &Corpus) -> Vec<N>;
    /// Term frequency of one document over the vocabulary dimensions
    fn tf_vec(freq: &TokenFrequency, vocab: &Vocabulary) -> ZeroSpVec<N>;
}

/// Default TF-IDF engine.
/// - `tf(t, d)` = raw count of t in d
/// - `idf(t)` = ln((1 + N) / (1 + df(t))) + 1
///
/// Supports `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF; strictly positive for every term of the corpus
    #[inline]
    pub fn smoothed_idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }

    fn raw_counts<'a>(
        freq: &'a TokenFrequency,
        vocab: &'a Vocabulary,
    ) -> impl Iterator<Item = (usize, u64)> + 'a {
        freq.iter()
            .filter_map(|(token, count)| vocab.index_of(token).map(|idx| (idx, count)))
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus) -> Vec<f64> {
        let doc_num = corpus.get_doc_num();
        (0..corpus.vocab_size())
            .map(|idx| Self::smoothed_idf(doc_num, corpus.get_doc_freq(idx)))
            .collect()
    }

    fn tf_vec(freq: &TokenFrequency, vocab: &Vocabulary) -> ZeroSpVec<f64> {
        ZeroSpVec::from_pairs(
            vocab.len(),
            Self::raw_counts(freq, vocab).map(|(idx, count)| (idx, count as f64)),
        )
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus) -> Vec<f32> {
        let doc_num = corpus.get_doc_num();
        (0..corpus.vocab_size())
            .map(|idx| Self::smoothed_idf(doc_num, corpus.get_doc_freq(idx)) as f32)
            .collect()
    }

    fn tf_vec(freq: &TokenFrequency, vocab: &Vocabulary) -> ZeroSpVec<f32> {
        ZeroSpVec::from_pairs(
            vocab.len(),
            Self::raw_counts(freq, vocab).map(|(idx, count)| (idx, count as f32)),
        )
    }
}
