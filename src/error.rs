use thiserror::Error;

/// Errors raised while building or querying a ranker.
///
/// Identifiers are carried in their `Debug` rendering so the error type
/// stays independent of the key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankerError {
    /// The queried identifier is not part of the built index
    #[error("document not found in index: {identifier}")]
    NotFound { identifier: String },
    /// No documents were supplied
    #[error("cannot build an index from an empty corpus")]
    EmptyCorpus,
    /// Two documents share an identifier and the policy is `Reject`
    #[error("duplicate document identifier {identifier} at positions {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: usize,
        second: usize,
    },
}

impl RankerError {
    pub(crate) fn not_found<K: std::fmt::Debug>(key: &K) -> Self {
        RankerError::NotFound { identifier: format!("{:?}", key) }
    }

    pub(crate) fn duplicate<K: std::fmt::Debug>(key: &K, first: usize, second: usize) -> Self {
        RankerError::DuplicateIdentifier {
            identifier: format!("{:?}", key),
            first,
            second,
        }
    }
}

pub type Result<T> = std::result::Result<T, RankerError>;
