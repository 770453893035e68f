use crate::config::AnalyzerConfig;
use crate::models::FakeNewsReport;

/// Indicator-phrase scanner plus source allowlist.
#[derive(Debug, Clone)]
pub struct FakeNewsDetector {
    // (phrase as configured, lowercase form used for matching)
    indicators: Vec<(String, String)>,
    reliable_sources: Vec<String>,
    threshold: f64,
}

impl FakeNewsDetector {
    pub fn new(cfg: &AnalyzerConfig) -> Self {
        Self {
            indicators: cfg
                .fake_indicators
                .iter()
                .map(|i| (i.clone(), i.to_lowercase()))
                .collect(),
            reliable_sources: cfg.reliable_sources.iter().map(|s| s.to_lowercase()).collect(),
            threshold: cfg.thresholds.fake_score,
        }
    }

    pub fn is_reliable_source(&self, source: &str) -> bool {
        let source = source.to_lowercase();
        self.reliable_sources.iter().any(|r| source.contains(r.as_str()))
    }

    /// Each indicator counts once however often it occurs. A reliable source
    /// is never flagged.
    pub fn detect(&self, title: &str, content: &str, source: &str) -> FakeNewsReport {
        let text = format!("{} {}", title, content).to_lowercase();

        let indicators_found: Vec<String> = self
            .indicators
            .iter()
            .filter(|(_, needle)| text.contains(needle.as_str()))
            .map(|(phrase, _)| phrase.clone())
            .collect();

        let fake_score = if self.indicators.is_empty() {
            0.0
        } else {
            indicators_found.len() as f64 / self.indicators.len() as f64
        };

        let source_reliable = self.is_reliable_source(source);

        FakeNewsReport {
            is_fake: fake_score > self.threshold && !source_reliable,
            fake_score,
            indicators_found,
            source_reliable,
        }
    }
}
