use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;
use crate::lexicon;
use crate::models::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionWord {
    pub word: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intensifier {
    pub word: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// polarity strictly above this is positive
    pub positive_polarity: f64,
    /// polarity strictly below this is negative
    pub negative_polarity: f64,
    /// fake score strictly above this (from an unreliable source) is fake
    pub fake_score: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive_polarity: 0.1,
            negative_polarity: -0.1,
            fake_score: 0.3,
        }
    }
}

/// Everything the analyzer reads. Built once, never mutated afterwards.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Declaration order breaks classification ties.
    pub categories: Vec<CategoryKeywords>,
    pub fake_indicators: Vec<String>,
    pub reliable_sources: Vec<String>,
    pub stopwords: Vec<String>,
    pub opinion_words: Vec<OpinionWord>,
    pub intensifiers: Vec<Intensifier>,
    pub negations: Vec<String>,
    pub thresholds: Thresholds,
    pub summary_sentences: usize,
    pub trending_top_n: usize,
    /// Trending keywords must be at least this long after stemming.
    pub trending_min_keyword_len: usize,
    pub fallback_summary_chars: usize,
    /// Upper bound on title + content + source, in characters.
    pub max_input_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            categories: lexicon::CATEGORY_KEYWORDS
                .iter()
                .map(|(category, kws)| CategoryKeywords {
                    category: *category,
                    keywords: to_strings(kws),
                })
                .collect(),
            fake_indicators: to_strings(lexicon::FAKE_INDICATORS),
            reliable_sources: to_strings(lexicon::RELIABLE_SOURCES),
            stopwords: to_strings(lexicon::STOPWORDS),
            opinion_words: lexicon::OPINION_WORDS
                .iter()
                .map(|(w, p, s)| OpinionWord {
                    word: w.to_string(),
                    polarity: *p,
                    subjectivity: *s,
                })
                .collect(),
            intensifiers: lexicon::INTENSIFIERS
                .iter()
                .map(|(w, m)| Intensifier {
                    word: w.to_string(),
                    multiplier: *m,
                })
                .collect(),
            negations: to_strings(lexicon::NEGATIONS),
            thresholds: Thresholds::default(),
            summary_sentences: 3,
            trending_top_n: 20,
            trending_min_keyword_len: 4,
            fallback_summary_chars: 200,
            max_input_chars: 1_000_000,
        }
    }
}

fn to_strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

impl AnalyzerConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: AnalyzerConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        debug!(
            "Config loaded - path={}, categories={}, indicators={}, sources={}",
            path.display(),
            cfg.categories.len(),
            cfg.fake_indicators.len(),
            cfg.reliable_sources.len()
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.categories {
            if entry.category == Category::General {
                return Err(ConfigError::Invalid(
                    "general is the fallback category and cannot carry keywords".into(),
                ));
            }
            if entry.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "empty keyword in category {}",
                    entry.category
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = self.categories.iter().find(|c| !seen.insert(c.category)) {
            return Err(ConfigError::Invalid(format!(
                "category {} declared twice",
                dup.category
            )));
        }

        // An empty phrase would be contained in every text.
        if self.fake_indicators.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::Invalid("empty fake-news indicator".into()));
        }
        if self.reliable_sources.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::Invalid("empty reliable source entry".into()));
        }

        let t = &self.thresholds;
        if t.negative_polarity > t.positive_polarity {
            return Err(ConfigError::Invalid(format!(
                "negative polarity threshold {} is above positive threshold {}",
                t.negative_polarity, t.positive_polarity
            )));
        }
        if !(0.0..=1.0).contains(&t.fake_score) {
            return Err(ConfigError::Invalid(format!(
                "fake score threshold {} outside [0, 1]",
                t.fake_score
            )));
        }
        Ok(())
    }
}
