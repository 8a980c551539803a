use serde::{Deserialize, Serialize};

/// One entry of the corpus: a unique identifier and its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document<K> {
    pub id: K,
    #[serde(default)]
    pub text: String,
}

impl<K> Document<K> {
    pub fn new(id: K, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    /// Missing text becomes the empty string
    pub fn from_optional(id: K, text: Option<String>) -> Self {
        Self { id, text: text.unwrap_or_default() }
    }
}

impl<K, T> From<(K, T)> for Document<K>
where
    T: Into<String>,
{
    fn from((id, text): (K, T)) -> Self {
        Document::new(id, text)
    }
}
