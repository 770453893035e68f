use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic taxonomy. `General` is the catch-all when no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
    Politics,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::Politics => "politics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title and body of an article, the only text trending extraction needs.
pub trait ArticleText {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub title: String,
    pub content: String,
    pub source: String,
}

impl AnalysisInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            source: source.into(),
        }
    }
}

impl ArticleText for AnalysisInput {
    fn title(&self) -> &str {
        &self.title
    }
    fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub polarity: f64,     // [-1.0, 1.0]
    pub subjectivity: f64, // [0.0, 1.0]
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FakeNewsReport {
    pub is_fake: bool,
    pub fake_score: f64, // [0.0, 1.0]
    pub indicators_found: Vec<String>,
    pub source_reliable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: Category,
    pub sentiment: Sentiment,
    pub sentiment_polarity: f64,
    pub sentiment_subjectivity: f64,
    pub is_fake: bool,
    pub fake_score: f64,
    pub fake_indicators: Vec<String>,
    pub source_reliable: bool,
    pub summary: String,
}

impl AnalysisResult {
    pub fn from_parts(
        category: Category,
        sentiment: SentimentScore,
        fake: FakeNewsReport,
        summary: String,
    ) -> Self {
        Self {
            category,
            sentiment: sentiment.sentiment,
            sentiment_polarity: sentiment.polarity,
            sentiment_subjectivity: sentiment.subjectivity,
            is_fake: fake.is_fake,
            fake_score: fake.fake_score,
            fake_indicators: fake.indicators_found,
            source_reliable: fake.source_reliable,
            summary,
        }
    }

    /// Neutral record substituted for an article whose analysis failed.
    /// The summary is the content cut to `max_chars` characters plus `...`.
    pub fn fallback(content: &str, max_chars: usize) -> Self {
        let summary = if content.chars().count() > max_chars {
            let mut s: String = content.chars().take(max_chars).collect();
            s.push_str("...");
            s
        } else {
            content.to_string()
        };

        Self {
            category: Category::General,
            sentiment: Sentiment::Neutral,
            sentiment_polarity: 0.0,
            sentiment_subjectivity: 0.0,
            is_fake: false,
            fake_score: 0.0,
            fake_indicators: Vec::new(),
            source_reliable: true,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingKeyword {
    pub keyword: String,
    pub frequency: u32,
}

/// Per-item outcome of batch analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItem {
    Analyzed {
        #[serde(flatten)]
        result: AnalysisResult,
    },
    Fallback {
        error: String,
        #[serde(flatten)]
        result: AnalysisResult,
    },
}

impl BatchItem {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            BatchItem::Analyzed { result } | BatchItem::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, BatchItem::Fallback { .. })
    }
}
