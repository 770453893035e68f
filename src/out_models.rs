use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BatchItem, TrendingKeyword};
use crate::stats::CorpusStats;

/// One batch entry: the record's identity plus its analysis outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    pub id: String,
    pub title: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: BatchItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub analyzed_count: usize,
    pub fallback_count: usize,
    pub articles: Vec<AnalyzedArticle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CorpusStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub original_length: usize, // chars
    pub summary_length: usize,  // chars
}

impl SummaryResponse {
    pub fn new(original: &str, summary: String) -> Self {
        Self {
            original_length: original.chars().count(),
            summary_length: summary.chars().count(),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub trending_keywords: Vec<TrendingKeyword>,
    pub articles_analyzed: usize,
}
