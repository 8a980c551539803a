use std::fmt::Debug;
use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;
use num::Num;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::document::Document;
use crate::error::{RankerError, Result};
use crate::ranker::hits::Hits;
use crate::ranker::{RankerConfig, SimilarityMode, SimilarityRanker};
use crate::vectorizer::corpus::Vocabulary;
use crate::vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};
use crate::vectorizer::{Vectorizer, VectorizerConfig};

/// What to do when two documents share an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateIdentifier`
    #[default]
    Reject,
    /// Keep the earliest document, drop later ones
    KeepFirst,
    /// Keep the latest document, drop earlier ones
    KeepLast,
}

/// Everything `build_index_with` can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexConfig {
    pub vectorizer: VectorizerConfig,
    pub ranker: RankerConfig,
    pub duplicates: DuplicatePolicy,
}

impl IndexConfig {
    pub fn with_vectorizer(mut self, vectorizer: VectorizerConfig) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    pub fn with_ranker(mut self, ranker: RankerConfig) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_mode(mut self, mode: SimilarityMode) -> Self {
        self.ranker.mode = mode;
        self
    }

    /// Turn on rayon for both the build and on-demand queries
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.vectorizer.parallel = parallel;
        self.ranker.parallel = parallel;
        self
    }
}

/// A built index: the vocabulary plus the ranker over it.
/// Owned by the caller; a new corpus means a new handle.
#[derive(Debug, Clone)]
pub struct RankerHandle<K, N = f64>
where
    K: Clone + Eq + Hash,
    N: Num + Copy,
{
    vocabulary: Vocabulary,
    ranker: SimilarityRanker<K, N>,
}

static_assertions::assert_impl_all!(RankerHandle<String>: Send, Sync);
static_assertions::assert_impl_all!(RankerHandle<u64, f32>: Send, Sync);

impl<K, N> RankerHandle<K, N>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
    N: Num + Copy + Into<f64> + Send + Sync,
{
    /// Build with a custom weight type and TF-IDF engine
    pub fn build<E>(documents: &[Document<K>], config: &IndexConfig) -> Result<Self>
    where
        E: TFIDFEngine<N>,
    {
        if documents.is_empty() {
            return Err(RankerError::EmptyCorpus);
        }
        let kept = resolve_duplicates(documents, config.duplicates)?;

        let vectorizer: Vectorizer<N, E> = Vectorizer::new(&config.vectorizer);
        let (vocabulary, vectors) = vectorizer.fit(&kept);
        let ranker = SimilarityRanker::new(
            kept.into_iter().map(|doc| doc.id).zip(vectors),
            &config.ranker,
        )?;

        info!(
            documents = ranker.len(),
            dropped = documents.len() - ranker.len(),
            vocabulary = vocabulary.len(),
            mode = ?ranker.mode(),
            "Built ranker index"
        );
        Ok(Self { vocabulary, ranker })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn ranker(&self) -> &SimilarityRanker<K, N> {
        &self.ranker
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.ranker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranker.is_empty()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.ranker.contains(id)
    }

    /// See [`SimilarityRanker::recommend`]
    pub fn recommend(&self, id: &K, k: usize) -> Result<Vec<K>> {
        self.ranker.recommend(id, k)
    }

    pub fn recommend_scored(&self, id: &K, k: usize) -> Result<Hits<K>> {
        self.ranker.recommend_scored(id, k)
    }

    pub fn similarity(&self, a: &K, b: &K) -> Result<f64> {
        self.ranker.similarity(a, b)
    }

    pub fn similarity_row(&self, id: &K) -> Result<Vec<(K, f64)>> {
        self.ranker.similarity_row(id)
    }
}

/// Apply `policy`, keeping surviving documents in their original order
fn resolve_duplicates<K>(documents: &[Document<K>], policy: DuplicatePolicy) -> Result<Vec<Document<K>>>
where
    K: Clone + Eq + Hash + Debug,
{
    // id -> position of the occurrence that wins
    let mut winners: IndexMap<&K, usize, RandomState> = IndexMap::with_hasher(RandomState::new());
    for (position, doc) in documents.iter().enumerate() {
        match winners.get_mut(&doc.id) {
            None => {
                winners.insert(&doc.id, position);
            }
            Some(winner) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(RankerError::duplicate(&doc.id, *winner, position));
                }
                DuplicatePolicy::KeepFirst => {
                    warn!(id = ?doc.id, kept = *winner, dropped = position, "Dropping duplicate document");
                }
                DuplicatePolicy::KeepLast => {
                    warn!(id = ?doc.id, kept = position, dropped = *winner, "Dropping duplicate document");
                    *winner = position;
                }
            },
        }
    }

    Ok(documents
        .iter()
        .enumerate()
        .filter(|(position, doc)| winners.get(&doc.id) == Some(position))
        .map(|(_, doc)| doc.clone())
        .collect())
}

/// Build an index with the default configuration.
///
/// # Errors
/// - `EmptyCorpus` when `documents` is empty
/// - `DuplicateIdentifier` when an identifier repeats
pub fn build_index<K>(documents: &[Document<K>]) -> Result<RankerHandle<K>>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
{
    build_index_with(documents, &IndexConfig::default())
}

pub fn build_index_with<K>(documents: &[Document<K>], config: &IndexConfig) -> Result<RankerHandle<K>>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
{
    RankerHandle::build::<DefaultTFIDFEngine>(documents, config)
}

/// Top `k` documents most similar to `id`, excluding `id` itself.
///
/// # Errors
/// `NotFound` when `id` is not indexed.
pub fn recommend<K, N>(handle: &RankerHandle<K, N>, id: &K, k: usize) -> Result<Vec<K>>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
    N: Num + Copy + Into<f64> + Send + Sync,
{
    handle.recommend(id, k)
}
