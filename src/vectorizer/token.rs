use std::fmt::Debug;

use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::stop_words::StopWordSet;

/// TokenFrequency struct
/// Counts how many times each token occurs in one document.
///
/// Tokens iterate in first-seen order, which is what makes vocabulary
/// index assignment reproducible.
///
/// # Examples
/// ```
/// use tf_idf_recommender::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["cat", "sat", "cat"]);
///
/// assert_eq!(freq.token_count("cat"), 2);
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    token_count: IndexMap<Box<str>, u64, RandomState>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::with_hasher(RandomState::new()),
            total_token_count: 0,
        }
    }

    /// Add a token
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_count.insert(token.into(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    /// Add multiple tokens
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Occurrence count of `token`, 0 when absent
    #[inline]
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Sum of all token counts
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// `(token, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.token_count.iter().map(|(token, &count)| (token.as_ref(), count))
    }

    /// Distinct tokens in first-seen order
    #[inline]
    pub fn token_set_ref_str(&self) -> impl Iterator<Item = &str> + '_ {
        self.token_count.keys().map(|token| token.as_ref())
    }
}

/// Splits raw text into normalized tokens.
///
/// Text is lower-cased, split on every non alphanumeric character, and
/// tokens that are stop words or shorter than `min_token_len` characters
/// are dropped.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: StopWordSet,
    min_token_len: usize,
}

impl Tokenizer {
    pub fn new(stop_words: StopWordSet, min_token_len: usize) -> Self {
        Self {
            stop_words,
            min_token_len: min_token_len.max(1),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| self.keep(token))
            .map(str::to_owned)
            .collect()
    }

    /// Tokenize straight into a frequency table
    pub fn frequency(&self, text: &str) -> TokenFrequency {
        let mut freq = TokenFrequency::new();
        for token in text.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
            if self.keep(token) {
                freq.add_token(token);
            }
        }
        freq
    }

    #[inline]
    fn keep(&self, token: &str) -> bool {
        !token.is_empty()
            && token.chars().count() >= self.min_token_len
            && !self.stop_words.contains(token)
    }
}
