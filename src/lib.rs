//! This crate is a content-based similarity ranker built on TF-IDF vectors.

pub mod cache;
pub mod document;
pub mod error;
pub mod index;
pub mod ranker;
pub mod utils;
pub mod vectorizer;

/// Build an index and query it.
/// `build_index` turns an ordered document collection into a `RankerHandle`;
/// `recommend` returns the identifiers most similar to a given one.
///
/// # Examples
/// ```
/// use tf_idf_recommender::{build_index, recommend, Document};
///
/// let docs = vec![
///     Document::new("A", "a cat sat"),
///     Document::new("B", "a cat sat"),
///     Document::new("C", "a dog ran"),
/// ];
/// let handle = build_index(&docs).unwrap();
/// assert_eq!(recommend(&handle, &"A", 2).unwrap(), vec!["B", "C"]);
/// ```
pub use index::{build_index, build_index_with, recommend};

/// Ranker Handle
/// The built index owned by the caller. Holds:
/// - The corpus vocabulary
/// - One TF-IDF term vector per document
/// - The eager similarity matrix when `SimilarityMode::Eager` is configured
///
/// Immutable after construction and `Send + Sync`; share it behind an `Arc`
/// to serve concurrent queries. A new corpus means a new handle.
pub use index::RankerHandle;

/// Configuration
/// `IndexConfig` bundles vectorizer, ranker and duplicate handling settings.
/// All of them implement `serde::Deserialize` with defaults for missing fields.
pub use index::{DuplicatePolicy, IndexConfig};
pub use ranker::{RankerConfig, SimilarityMode};
pub use vectorizer::VectorizerConfig;
pub use vectorizer::stop_words::StopWords;

/// Error taxonomy
/// - `NotFound`: query identifier absent from the index
/// - `EmptyCorpus`: no documents at build time
/// - `DuplicateIdentifier`: repeated identifiers under `DuplicatePolicy::Reject`
pub use error::{RankerError, Result};

/// Document
/// Identifier plus raw text; missing text is the empty string.
pub use document::Document;

/// Vectorizer
/// Tokenizes, removes stop words, and weights terms by
/// `count * (ln((1 + N) / (1 + df)) + 1)`.
pub use vectorizer::{TermVector, Vectorizer};
pub use vectorizer::corpus::{Corpus, Vocabulary};
pub use vectorizer::token::{TokenFrequency, Tokenizer};

/// TF IDF Calculation Engine Trait
/// Seam for alternative weightings. `DefaultTFIDFEngine` supports `f32` and `f64`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Similarity Ranker
/// Cosine similarity over term vectors with deterministic tie-breaking
/// (equal scores rank by corpus position).
pub use ranker::{cosine_similarity, SimilarityRanker, DEFAULT_RECOMMENDATIONS};
pub use ranker::hits::{HitEntry, Hits};

/// Memoization over `build_index_with`, keyed by corpus content.
pub use cache::{corpus_fingerprint, IndexCache};

/// Sparse vector used for term vectors
pub use utils::math::vector::ZeroSpVec;
