use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, error, info};

use crate::classify::CategoryClassifier;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::fake_news::FakeNewsDetector;
use crate::models::{
    AnalysisInput, AnalysisResult, ArticleText, BatchItem, Category, FakeNewsReport, SentimentScore,
    TrendingKeyword,
};
use crate::sentiment::SentimentScorer;
use crate::summarize::summarize;
use crate::tokenize::Normalizer;
use crate::trending::trending_keywords;

/// Entry point of the analysis pipeline.
///
/// Built once from an [`AnalyzerConfig`] and read-only afterwards, so one
/// instance can be shared across threads.
#[derive(Debug)]
pub struct NewsAnalyzer {
    config: AnalyzerConfig,
    normalizer: Normalizer,
    classifier: CategoryClassifier,
    sentiment: SentimentScorer,
    fake_news: FakeNewsDetector,
}

impl Default for NewsAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl NewsAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        debug!(
            "Analyzer built - categories={}, indicators={}, stopwords={}, opinion_words={}",
            config.categories.len(),
            config.fake_indicators.len(),
            config.stopwords.len(),
            config.opinion_words.len()
        );
        Self {
            normalizer: Normalizer::new(&config.stopwords),
            classifier: CategoryClassifier::new(&config.categories),
            sentiment: SentimentScorer::new(&config),
            fake_news: FakeNewsDetector::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn classify_category(&self, title: &str, content: &str) -> Category {
        self.classifier.classify(title, content)
    }

    pub fn analyze_sentiment(&self, text: &str) -> SentimentScore {
        self.sentiment.score(text)
    }

    pub fn detect_fake_news(&self, title: &str, content: &str, source: &str) -> FakeNewsReport {
        self.fake_news.detect(title, content, source)
    }

    /// Negative counts are rejected; zero yields an empty summary for any
    /// text with at least one sentence.
    pub fn summarize_text(&self, text: &str, max_sentences: i64) -> Result<String, AnalysisError> {
        let max = usize::try_from(max_sentences).map_err(|_| {
            AnalysisError::InvalidInput(format!("max_sentences must be >= 0, got {}", max_sentences))
        })?;
        Ok(summarize(&self.normalizer, text, max))
    }

    pub fn get_trending_keywords<A: ArticleText>(&self, articles: &[A], top_n: usize) -> Vec<TrendingKeyword> {
        let start = std::time::Instant::now();
        let out = trending_keywords(
            &self.normalizer,
            articles,
            top_n,
            self.config.trending_min_keyword_len,
        );
        info!(
            "Trending keywords extracted - duration={:.2}s, articles={}, keywords={}",
            start.elapsed().as_secs_f32(),
            articles.len(),
            out.len()
        );
        out
    }

    /// Classification, sentiment (over title and content), credibility and
    /// summary (over content) are computed independently and merged.
    pub fn analyze_article(
        &self,
        title: &str,
        content: &str,
        source: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let chars = title.chars().count() + content.chars().count() + source.chars().count();
        if chars > self.config.max_input_chars {
            return Err(AnalysisError::InputTooLarge {
                chars,
                limit: self.config.max_input_chars,
            });
        }

        let category = self.classify_category(title, content);
        let sentiment = self.analyze_sentiment(&format!("{} {}", title, content));
        let fake = self.detect_fake_news(title, content, source);
        let summary = summarize(&self.normalizer, content, self.config.summary_sentences);

        Ok(AnalysisResult::from_parts(category, sentiment, fake, summary))
    }

    /// Analyzes every input independently and in parallel. An input whose
    /// analysis errors or panics gets the fallback result; the output is
    /// always 1:1 with the input by position.
    pub fn batch_analyze_articles(&self, articles: &[AnalysisInput]) -> Vec<BatchItem> {
        self.batch_with(articles, |a| self.analyze_article(&a.title, &a.content, &a.source))
    }

    fn batch_with<F>(&self, articles: &[AnalysisInput], analyze: F) -> Vec<BatchItem>
    where
        F: Fn(&AnalysisInput) -> Result<AnalysisResult, AnalysisError> + Sync,
    {
        let start = std::time::Instant::now();
        debug!("Batch analysis started - articles={}", articles.len());

        let items: Vec<BatchItem> = articles
            .par_iter()
            .map(|a| self.analyze_item(a, &analyze))
            .collect();

        let fallbacks = items.iter().filter(|i| i.is_fallback()).count();
        info!(
            "Batch analysis completed - duration={:.2}s, articles={}, fallbacks={}",
            start.elapsed().as_secs_f32(),
            items.len(),
            fallbacks
        );
        items
    }

    fn analyze_item<F>(&self, a: &AnalysisInput, analyze: &F) -> BatchItem
    where
        F: Fn(&AnalysisInput) -> Result<AnalysisResult, AnalysisError>,
    {
        let outcome = catch_unwind(AssertUnwindSafe(|| analyze(a)))
        .unwrap_or_else(|panic| {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(AnalysisError::Computation {
                stage: "analysis",
                reason,
            })
        });

        match outcome {
            Ok(result) => BatchItem::Analyzed { result },
            Err(e) => {
                error!("Error analyzing article {:?}: {}", a.title, e);
                BatchItem::Fallback {
                    error: e.to_string(),
                    result: AnalysisResult::fallback(&a.content, self.config.fallback_summary_chars),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    #[test]
    fn analyze_merges_components() {
        let analyzer = NewsAnalyzer::default();
        let r = analyzer
            .analyze_article(
                "BREAKING: secret vaccine exposed",
                "A leaked conspiracy about the hospital. Doctors are worried. \
                 The vaccine is terrible, insiders say. Nobody believes the hospital.",
                "Viral Truth Blog",
            )
            .unwrap();
        assert_eq!(r.category, Category::Health);
        assert_eq!(r.sentiment, Sentiment::Negative);
        assert!(r.is_fake);
        assert!(!r.source_reliable);
        assert_eq!(
            r.fake_indicators,
            vec!["breaking:", "secret", "exposed", "conspiracy", "leaked"]
        );
        assert!(!r.summary.is_empty());
    }

    #[test]
    fn analyze_is_deterministic() {
        let analyzer = NewsAnalyzer::default();
        let a = analyzer.analyze_article("Team wins title", "Great game. Fans cheered loudly.", "npr").unwrap();
        let b = analyzer.analyze_article("Team wins title", "Great game. Fans cheered loudly.", "npr").unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn empty_fields_degrade_gracefully() {
        let r = NewsAnalyzer::default().analyze_article("", "", "").unwrap();
        assert_eq!(r.category, Category::General);
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.fake_score, 0.0);
        assert!(!r.source_reliable);
        assert_eq!(r.summary, "");
    }

    #[test]
    fn oversized_input_is_rejected() {
        let mut cfg = AnalyzerConfig::default();
        cfg.max_input_chars = 10;
        let err = NewsAnalyzer::new(cfg)
            .analyze_article("a long enough title", "", "")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InputTooLarge { limit: 10, .. }));
    }

    #[test]
    fn negative_sentence_count_is_invalid() {
        let analyzer = NewsAnalyzer::default();
        assert!(matches!(
            analyzer.summarize_text("One. Two.", -1),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert_eq!(analyzer.summarize_text("One. Two.", 0).unwrap(), "");
    }

    #[test]
    fn panicking_item_falls_back_alone() {
        let analyzer = NewsAnalyzer::default();
        let inputs: Vec<AnalysisInput> = (0..5)
            .map(|i| AnalysisInput::new(format!("Story {}", i), "Markets rallied today. Traders cheered.", "wire"))
            .collect();

        let items = analyzer.batch_with(&inputs, |a| {
            if a.title == "Story 3" {
                panic!("sentiment stage blew up");
            }
            analyzer.analyze_article(&a.title, &a.content, &a.source)
        });

        assert_eq!(items.len(), 5);
        for (i, item) in items.iter().enumerate() {
            match item {
                BatchItem::Fallback { error, result } => {
                    assert_eq!(i, 3);
                    assert!(error.contains("sentiment stage blew up"), "{}", error);
                    assert_eq!(result.category, Category::General);
                    assert!(result.source_reliable);
                    assert_eq!(result.summary, "Markets rallied today. Traders cheered.");
                }
                BatchItem::Analyzed { result } => {
                    assert_ne!(i, 3);
                    let direct = analyzer
                        .analyze_article(&inputs[i].title, &inputs[i].content, &inputs[i].source)
                        .unwrap();
                    assert_eq!(result, &direct);
                }
            }
        }
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let analyzer = NewsAnalyzer::default();
        let input = AnalysisInput::new("t", "c", "s");
        let item = analyzer.analyze_item(&input, &|a: &AnalysisInput| -> Result<AnalysisResult, AnalysisError> {
            panic!("bad input {}", a.title)
        });
        match item {
            BatchItem::Fallback { error, .. } => assert!(error.contains("bad input t"), "{}", error),
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NewsAnalyzer>();
    }
}
