pub mod hits;
pub mod matrix;

use std::fmt::Debug;
use std::hash::Hash;

use ahash::RandomState;
use indexmap::map::Entry;
use indexmap::IndexMap;
use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RankerError, Result};
use crate::ranker::hits::{HitEntry, Hits};
use crate::ranker::matrix::SimilarityMatrix;
use crate::vectorizer::TermVector;

/// Number of recommendations returned when the caller has no preference
pub const DEFAULT_RECOMMENDATIONS: usize = 10;

/// How similarity scores are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMode {
    /// Compute the whole matrix at build time.
    /// O(N^2 * nnz) build, N(N+1)/2 stored scores, O(N) per query.
    #[default]
    Eager,
    /// Store only the vectors and compute the query row per call.
    /// O(N) memory, O(N * nnz) per query.
    OnDemand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankerConfig {
    pub mode: SimilarityMode,
    /// score matrix rows and on-demand rows on the rayon pool
    pub parallel: bool,
}

impl RankerConfig {
    pub fn with_mode(mut self, mode: SimilarityMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Cosine similarity of two sparse vectors, 0 when either norm is 0.
/// Result is clamped to [0, 1].
pub fn cosine_similarity<N>(a: &TermVector<N>, b: &TermVector<N>) -> f64
where
    N: Num + Copy + Into<f64>,
{
    cosine_with_norms(a, b, a.norm_sq::<f64>().sqrt(), b.norm_sq::<f64>().sqrt())
}

#[inline]
fn cosine_with_norms<N>(a: &TermVector<N>, b: &TermVector<N>, norm_a: f64, norm_b: f64) -> f64
where
    N: Num + Copy + Into<f64>,
{
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.dot(b);
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
struct DocVector<N>
where
    N: Num + Copy,
{
    vec: TermVector<N>,
    norm: f64,
}

/// Ranks documents by cosine similarity of their term vectors.
///
/// Immutable after construction; every query is a pure read, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct SimilarityRanker<K, N = f64>
where
    K: Clone + Eq + Hash,
    N: Num + Copy,
{
    /// document vectors in corpus order, keyed by identifier
    documents: IndexMap<K, DocVector<N>, RandomState>,
    matrix: Option<SimilarityMatrix>,
    parallel: bool,
}

impl<K, N> SimilarityRanker<K, N>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
    N: Num + Copy + Into<f64> + Send + Sync,
{
    /// Build from `(identifier, vector)` pairs in corpus order.
    ///
    /// # Errors
    /// - `EmptyCorpus` when no pair is given
    /// - `DuplicateIdentifier` when an identifier repeats
    pub fn new<I>(entries: I, config: &RankerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (K, TermVector<N>)>,
    {
        let mut documents: IndexMap<K, DocVector<N>, RandomState> =
            IndexMap::with_hasher(RandomState::new());
        for (position, (key, vec)) in entries.into_iter().enumerate() {
            match documents.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(RankerError::duplicate(entry.key(), entry.index(), position));
                }
                Entry::Vacant(entry) => {
                    let norm = vec.norm_sq::<f64>().sqrt();
                    entry.insert(DocVector { vec, norm });
                }
            }
        }
        if documents.is_empty() {
            return Err(RankerError::EmptyCorpus);
        }
        debug_assert!(
            documents.values().all(|d| d.vec.len() == documents[0].vec.len()),
            "all term vectors must share the vocabulary dimension"
        );

        let mut ranker = Self {
            documents,
            matrix: None,
            parallel: config.parallel,
        };
        if config.mode == SimilarityMode::Eager {
            let matrix = SimilarityMatrix::build(ranker.len(), ranker.parallel, |i, j| {
                ranker.score_at(i, j)
            });
            ranker.matrix = Some(matrix);
        }
        Ok(ranker)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false for a built ranker
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.documents.contains_key(key)
    }

    pub fn mode(&self) -> SimilarityMode {
        if self.matrix.is_some() {
            SimilarityMode::Eager
        } else {
            SimilarityMode::OnDemand
        }
    }

    /// Identifiers in corpus order
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.documents.keys()
    }

    /// Corpus position of `key`
    pub fn position(&self, key: &K) -> Result<usize> {
        self.documents
            .get_index_of(key)
            .ok_or_else(|| RankerError::not_found(key))
    }

    /// Score of positions `i` and `j`. The diagonal is exactly 1.0 for a
    /// nonzero vector and 0.0 for a zero vector.
    fn score_at(&self, i: usize, j: usize) -> f64 {
        let (a, b) = (&self.documents[i], &self.documents[j]);
        if i == j {
            return if a.norm > 0.0 { 1.0 } else { 0.0 };
        }
        // fixed operand order keeps score_at(i, j) == score_at(j, i)
        let (a, b) = if i < j { (a, b) } else { (b, a) };
        cosine_with_norms(&a.vec, &b.vec, a.norm, b.norm)
    }

    fn scores_for(&self, position: usize) -> Vec<f64> {
        if let Some(matrix) = &self.matrix {
            return matrix.row(position);
        }
        debug!(position, documents = self.len(), "Computing similarity row on demand");
        if self.parallel {
            (0..self.len()).into_par_iter().map(|j| self.score_at(position, j)).collect()
        } else {
            (0..self.len()).map(|j| self.score_at(position, j)).collect()
        }
    }

    /// Cosine similarity between two indexed documents
    pub fn similarity(&self, a: &K, b: &K) -> Result<f64> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        Ok(match &self.matrix {
            Some(matrix) => matrix.get(i, j).unwrap_or(0.0),
            None => self.score_at(i, j),
        })
    }

    /// Similarity of `key` to every document, in corpus order, itself included
    pub fn similarity_row(&self, key: &K) -> Result<Vec<(K, f64)>> {
        let position = self.position(key)?;
        Ok(self
            .documents
            .keys()
            .cloned()
            .zip(self.scores_for(position))
            .collect())
    }

    /// Top `k` other documents with their scores.
    /// Only the query's own identifier is excluded; another document with
    /// identical text still ranks (at 1.0).
    pub fn recommend_scored(&self, key: &K, k: usize) -> Result<Hits<K>> {
        let position = self.position(key)?;
        let mut hits = Hits::new(
            self.documents
                .keys()
                .zip(self.scores_for(position))
                .enumerate()
                .filter(|(j, _)| *j != position)
                .map(|(j, (other, score))| HitEntry {
                    key: other.clone(),
                    score,
                    position: j,
                })
                .collect(),
        );
        hits.sort_by_score_desc().truncate(k);
        Ok(hits)
    }

    /// Identifiers of the top `k` other documents, most similar first
    pub fn recommend(&self, key: &K, k: usize) -> Result<Vec<K>> {
        Ok(self.recommend_scored(key, k)?.into_keys())
    }
}
