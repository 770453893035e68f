use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{AnalysisResult, Category, Sentiment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FakeNewsStats {
    pub fake_count: usize,
    pub total_articles: usize,
    pub fake_percentage: f64, // 0..100
}

/// Distribution of labels over a set of analyzed articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub category_distribution: Vec<CategoryCount>,
    pub sentiment_distribution: Vec<SentimentCount>,
    pub fake_news_stats: FakeNewsStats,
}

impl CorpusStats {
    /// Labels that never occur are left out of the distributions, which are
    /// ordered by label.
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a AnalysisResult>,
    {
        let mut categories: BTreeMap<Category, usize> = BTreeMap::new();
        let mut sentiments: BTreeMap<Sentiment, usize> = BTreeMap::new();
        let mut fake_count = 0usize;
        let mut total = 0usize;

        for r in results {
            total += 1;
            *categories.entry(r.category).or_insert(0) += 1;
            *sentiments.entry(r.sentiment).or_insert(0) += 1;
            if r.is_fake {
                fake_count += 1;
            }
        }

        let fake_percentage = if total > 0 {
            fake_count as f64 * 100.0 / total as f64
        } else {
            0.0
        };

        Self {
            category_distribution: categories
                .into_iter()
                .map(|(category, count)| CategoryCount { category, count })
                .collect(),
            sentiment_distribution: sentiments
                .into_iter()
                .map(|(sentiment, count)| SentimentCount { sentiment, count })
                .collect(),
            fake_news_stats: FakeNewsStats {
                fake_count,
                total_articles: total,
                fake_percentage,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: Category, sentiment: Sentiment, is_fake: bool) -> AnalysisResult {
        let mut r = AnalysisResult::fallback("", 200);
        r.category = category;
        r.sentiment = sentiment;
        r.is_fake = is_fake;
        r
    }

    #[test]
    fn counts_labels_and_fake_share() {
        let results = vec![
            result(Category::Sports, Sentiment::Positive, false),
            result(Category::Sports, Sentiment::Negative, true),
            result(Category::Health, Sentiment::Positive, false),
            result(Category::General, Sentiment::Neutral, false),
        ];
        let stats = CorpusStats::from_results(&results);

        assert_eq!(
            stats.category_distribution,
            vec![
                CategoryCount { category: Category::General, count: 1 },
                CategoryCount { category: Category::Health, count: 1 },
                CategoryCount { category: Category::Sports, count: 2 },
            ]
        );
        assert_eq!(
            stats.sentiment_distribution,
            vec![
                SentimentCount { sentiment: Sentiment::Positive, count: 2 },
                SentimentCount { sentiment: Sentiment::Negative, count: 1 },
                SentimentCount { sentiment: Sentiment::Neutral, count: 1 },
            ]
        );
        assert_eq!(stats.fake_news_stats.fake_count, 1);
        assert_eq!(stats.fake_news_stats.total_articles, 4);
        assert_eq!(stats.fake_news_stats.fake_percentage, 25.0);
    }

    #[test]
    fn empty_set_has_zero_percentage() {
        let stats = CorpusStats::from_results(&Vec::<AnalysisResult>::new());
        assert!(stats.category_distribution.is_empty());
        assert_eq!(stats.fake_news_stats.total_articles, 0);
        assert_eq!(stats.fake_news_stats.fake_percentage, 0.0);
    }
}
