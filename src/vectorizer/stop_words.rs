use std::collections::HashSet;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

/// Classic English stop word list (318 words).
/// This is the list most TF-IDF tooling ships as `english`.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amoungst",
    "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere",
    "are", "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done", "down", "due", "during",
    "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty", "found", "four",
    "from", "front", "full", "further", "get", "give", "go", "had", "has", "hasnt", "have", "he",
    "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
    "himself", "his", "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least",
    "less", "ltd", "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "show", "side", "since", "sincere", "six",
    "sixty", "so", "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "system", "take", "ten", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
    "these", "they", "thick", "thin", "third", "this", "those", "though", "three", "through",
    "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve",
    "twenty", "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Which stop word list the tokenizer removes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopWords {
    /// `ENGLISH_STOP_WORDS`
    #[default]
    English,
    /// The larger English list shipped by the `stop-words` crate
    Extended,
    /// Caller supplied words, matched after lower-casing
    Custom(Vec<String>),
    /// Keep every token
    None,
}

impl StopWords {
    /// Materialize the list into a lookup set
    pub fn to_set(&self) -> StopWordSet {
        let words: HashSet<Box<str>, RandomState> = match self {
            StopWords::English => ENGLISH_STOP_WORDS.iter().map(|w| Box::from(*w)).collect(),
            StopWords::Extended => stop_words::get(stop_words::LANGUAGE::English)
                .into_iter()
                .map(|w| w.to_lowercase().into_boxed_str())
                .collect(),
            StopWords::Custom(words) => words
                .iter()
                .map(|w| w.to_lowercase().into_boxed_str())
                .collect(),
            StopWords::None => HashSet::default(),
        };
        StopWordSet { words }
    }
}

/// Resolved stop word set, lower-cased
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<Box<str>, RandomState>,
}

impl StopWordSet {
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_has_no_duplicates() {
        let set = StopWords::English.to_set();
        assert_eq!(set.len(), ENGLISH_STOP_WORDS.len());
        assert!(set.contains("a"));
        assert!(set.contains("the"));
        assert!(!set.contains("cat"));
    }

    #[test]
    fn custom_words_are_lowercased() {
        let set = StopWords::Custom(vec!["Movie".to_string(), "FILM".to_string()]).to_set();
        assert!(set.contains("movie"));
        assert!(set.contains("film"));
        assert!(!set.contains("Movie"));
    }

    #[test]
    fn none_is_empty() {
        assert!(StopWords::None.to_set().is_empty());
    }

    #[test]
    fn deserializes_from_snake_case() {
        let parsed: StopWords = serde_json::from_str(r#""extended""#).unwrap();
        assert_eq!(parsed, StopWords::Extended);
        let parsed: StopWords = serde_json::from_str(r#"{"custom": ["x"]}"#).unwrap();
        assert_eq!(parsed, StopWords::Custom(vec!["x".to_string()]));
    }
}
