//! Word- and sentence-level text normalization shared by the classifier,
//! summarizer and trending extractor.
//!
//! Word pipeline, in order:
//! 1. NFC composition, then lowercase
//! 2. drop everything that is not `a-z` or whitespace (digits, punctuation
//!    and accented letters all disappear)
//! 3. split on whitespace
//! 4. drop stop words and tokens of length <= 2
//! 5. Snowball English (Porter2) stemming

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Tokens must be longer than this to survive normalization.
pub const MIN_TOKEN_LEN: usize = 2;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("valid sentence regex"));

pub struct Normalizer {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stopwords", &self.stopwords.len())
            .field("stemmer", &"english")
            .finish()
    }
}

impl Normalizer {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Steps 1-2 of the word pipeline.
    pub fn clean(text: &str) -> String {
        text.nfc()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    /// Cleans `text` once; tokens are produced lazily and can be iterated
    /// any number of times.
    pub fn normalize(&self, text: &str) -> Normalized<'_> {
        Normalized {
            normalizer: self,
            cleaned: Self::clean(text),
        }
    }
}

pub struct Normalized<'a> {
    normalizer: &'a Normalizer,
    cleaned: String,
}

impl<'a> Normalized<'a> {
    pub fn tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.cleaned
            .split_whitespace()
            .filter(|w| w.len() > MIN_TOKEN_LEN && !self.normalizer.is_stopword(w))
            .map(|w| self.normalizer.stem(w))
    }
}

/// Split on runs of `.`, `!` or `?` followed by whitespace or end of text.
/// Abbreviations ("Dr. Smith") are split too. Sentences keep their closing
/// punctuation and are trimmed; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        let end = m.start() + m.as_str().trim_end().len();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            out.push(sentence);
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}
