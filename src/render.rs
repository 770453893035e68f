// src/render.rs
use itertools::Itertools;

use crate::out_models::{AnalyzedArticle, BatchReport};
use crate::stats::CorpusStats;

pub fn render_article_markdown(a: &AnalyzedArticle) -> String {
    let r = a.outcome.result();
    let mut out = String::new();
    out.push_str(&format!("## {}\n\n", a.title.trim()));
    out.push_str(&format!("- Source: {}\n", a.source));
    out.push_str(&format!("- Category: {}\n", r.category));
    out.push_str(&format!(
        "- Sentiment: {} (polarity {:.2}, subjectivity {:.2})\n",
        r.sentiment, r.sentiment_polarity, r.sentiment_subjectivity
    ));
    out.push_str(&format!(
        "- Credibility: {} (score {:.2}, source {})\n",
        if r.is_fake { "likely fake" } else { "no flag" },
        r.fake_score,
        if r.source_reliable { "reliable" } else { "unverified" }
    ));
    if !r.fake_indicators.is_empty() {
        out.push_str(&format!(
            "- Indicators: {}\n",
            r.fake_indicators.iter().map(|i| format!("`{}`", i)).join(", ")
        ));
    }
    if let crate::models::BatchItem::Fallback { error, .. } = &a.outcome {
        out.push_str(&format!("- Analysis failed: {}\n", error));
    }
    if !r.summary.trim().is_empty() {
        out.push_str(&format!("\n> {}\n", r.summary.trim()));
    }
    out
}

pub fn render_stats_markdown(s: &CorpusStats) -> String {
    let mut md = String::new();
    md.push_str("## Overview\n");

    if !s.category_distribution.is_empty() {
        md.push_str(&format!(
            "- Categories: {}\n",
            s.category_distribution
                .iter()
                .map(|c| format!("{} {}", c.category, c.count))
                .join(", ")
        ));
    }
    if !s.sentiment_distribution.is_empty() {
        md.push_str(&format!(
            "- Sentiment: {}\n",
            s.sentiment_distribution
                .iter()
                .map(|c| format!("{} {}", c.sentiment, c.count))
                .join(", ")
        ));
    }
    md.push_str(&format!(
        "- Flagged as fake: {} of {} ({:.1}%)\n",
        s.fake_news_stats.fake_count, s.fake_news_stats.total_articles, s.fake_news_stats.fake_percentage
    ));
    md
}

pub fn render_batch_markdown(report: &BatchReport) -> String {
    let mut md = String::new();
    md.push_str("# News Analysis Report\n\n");
    md.push_str(&format!(
        "{} articles analyzed, {} fell back to defaults.\n\n",
        report.analyzed_count, report.fallback_count
    ));

    if let Some(stats) = &report.stats {
        md.push_str(&render_stats_markdown(stats));
        md.push('\n');
    }

    for a in &report.articles {
        md.push_str(&render_article_markdown(a));
        md.push('\n');
    }
    md
}
