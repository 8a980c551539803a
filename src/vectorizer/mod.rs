pub mod corpus;
pub mod stop_words;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;
use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::corpus::{Corpus, Vocabulary};
use crate::vectorizer::stop_words::StopWords;
use crate::vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};
use crate::vectorizer::token::{TokenFrequency, Tokenizer};

/// Sparse TF-IDF weights of one document over the vocabulary
pub type TermVector<N = f64> = ZeroSpVec<N>;

/// Tokenization and threading settings of the vectorizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    pub stop_words: StopWords,
    /// tokens with fewer characters are dropped
    pub min_token_len: usize,
    /// tokenize and count document frequencies on the rayon pool
    pub parallel: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::English,
            min_token_len: 1,
            parallel: false,
        }
    }
}

impl VectorizerConfig {
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Turns a document collection into a vocabulary and TF-IDF term vectors.
///
/// `Vectorizer<N, E>` generic parameters:
/// - `N`: weight type (`f64` or `f32`)
/// - `E`: TF-IDF calculation engine
#[derive(Debug, Clone)]
pub struct Vectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Num + Copy,
    E: TFIDFEngine<N>,
{
    tokenizer: Tokenizer,
    parallel: bool,
    _marker: PhantomData<fn() -> (N, E)>,
}

impl<N, E> Vectorizer<N, E>
where
    N: Num + Copy + Send + Sync,
    E: TFIDFEngine<N>,
{
    pub fn new(config: &VectorizerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.stop_words.to_set(), config.min_token_len),
            parallel: config.parallel,
            _marker: PhantomData,
        }
    }

    /// Normalized tokens of `text`
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Build the vocabulary and one term vector per document, in input order.
    /// Every returned vector has dimension `vocabulary.len()`.
    pub fn fit<K>(&self, documents: &[Document<K>]) -> (Vocabulary, Vec<TermVector<N>>)
    where
        K: Sync,
    {
        let freqs: Vec<TokenFrequency> = if self.parallel {
            documents.par_iter().map(|doc| self.tokenizer.frequency(&doc.text)).collect()
        } else {
            documents.iter().map(|doc| self.tokenizer.frequency(&doc.text)).collect()
        };

        let vocab = Vocabulary::from_frequencies(&freqs);
        let corpus = Corpus::from_frequencies(&freqs, &vocab, self.parallel);
        let idf = E::idf_vec(&corpus);
        debug!(
            documents = corpus.get_doc_num(),
            vocabulary = vocab.len(),
            tokens = freqs.iter().map(TokenFrequency::token_sum).sum::<u64>(),
            "Computed document frequencies"
        );

        let weigh = |freq: &TokenFrequency| {
            let mut vec = E::tf_vec(freq, &vocab).hadamard_dense(&idf);
            vec.shrink_to_fit();
            vec
        };
        let vectors: Vec<TermVector<N>> = if self.parallel {
            freqs.par_iter().map(weigh).collect()
        } else {
            freqs.iter().map(weigh).collect()
        };
        (vocab, vectors)
    }
}
