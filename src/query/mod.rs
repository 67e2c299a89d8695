//! Query module for the search phrase and its fallback terms
//!
//! A query carries the phrase exactly as the user gave it, which is what
//! the first two crawl phases match against. The fallback phase widens the
//! search word by word: stopwords are dropped and the survivors are reduced
//! to their linguistic stems.

mod stopwords;

pub use stopwords::is_stopword;

use rust_stemmers::{Algorithm, Stemmer};

/// The user's search query
#[derive(Debug, Clone)]
pub struct Query {
    /// The phrase exactly as supplied, matched as one unit
    pub phrase: String,

    /// The phrase split on whitespace, in order
    pub words: Vec<String>,
}

impl Query {
    /// Builds a query from a raw phrase
    pub fn new(phrase: &str) -> Self {
        let words = phrase.split_whitespace().map(str::to_string).collect();
        Self {
            phrase: phrase.to_string(),
            words,
        }
    }

    /// Stemmed fallback terms, in word order
    ///
    /// Each word is lowercased and checked against the stopword set before
    /// stemming. A query made up entirely of stopwords yields no terms, so
    /// the fallback phase does nothing for it.
    pub fn fallback_terms(&self) -> Vec<String> {
        let stemmer = Stemmer::create(Algorithm::English);
        self.words
            .iter()
            .map(|word| word.to_lowercase())
            .filter(|word| !is_stopword(word))
            .map(|word| stemmer.stem(&word).into_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_on_whitespace() {
        let query = Query::new("fluffy  cats\tindoors");
        assert_eq!(query.phrase, "fluffy  cats\tindoors");
        assert_eq!(query.words, vec!["fluffy", "cats", "indoors"]);
    }

    #[test]
    fn test_empty_phrase_has_no_words() {
        let query = Query::new("");
        assert!(query.words.is_empty());
    }

    #[test]
    fn test_fallback_terms_are_stemmed() {
        let query = Query::new("fluffy cats");
        assert_eq!(query.fallback_terms(), vec!["fluffi", "cat"]);
    }

    #[test]
    fn test_fallback_terms_drop_stopwords() {
        let query = Query::new("the fluffy cats");
        assert_eq!(query.fallback_terms(), vec!["fluffi", "cat"]);
    }

    #[test]
    fn test_fallback_terms_lowercase_before_stemming() {
        let query = Query::new("Running");
        assert_eq!(query.fallback_terms(), vec!["run"]);
    }

    #[test]
    fn test_all_stopword_query_has_no_fallback_terms() {
        let query = Query::new("the and of");
        assert!(query.fallback_terms().is_empty());
    }

    #[test]
    fn test_capitalized_stopwords_are_still_dropped() {
        let query = Query::new("The Cats");
        assert_eq!(query.fallback_terms(), vec!["cat"]);
    }

    #[test]
    fn test_fallback_terms_preserve_word_order() {
        let query = Query::new("jumped running cats");
        assert_eq!(query.fallback_terms(), vec!["jump", "run", "cat"]);
    }
}
