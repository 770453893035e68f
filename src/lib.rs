//! Rule-based enrichment of news articles: topic category, sentiment,
//! credibility heuristics, extractive summaries and trending keywords.
//!
//! ```no_run
//! use news_analyzer::NewsAnalyzer;
//!
//! let analyzer = NewsAnalyzer::default();
//! let result = analyzer
//!     .analyze_article("Team wins title", "A great game. Fans cheered.", "BBC Sport")
//!     .unwrap();
//! println!("{} / {}", result.category, result.sentiment);
//! ```

pub mod api_types;
pub mod classify;
pub mod config;
pub mod error;
pub mod fake_news;
pub mod ingest;
pub mod lexicon;
pub mod models;
pub mod orchestrator;
pub mod out_models;
pub mod render;
pub mod sentiment;
pub mod stats;
pub mod summarize;
pub mod tokenize;
pub mod trending;

pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ConfigError};
pub use models::{
    AnalysisInput, AnalysisResult, ArticleText, BatchItem, Category, FakeNewsReport, Sentiment,
    SentimentScore, TrendingKeyword,
};
pub use orchestrator::NewsAnalyzer;
pub use stats::CorpusStats;
