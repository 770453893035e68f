use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::config::{AnalyzerConfig, Thresholds};
use crate::models::{Sentiment, SentimentScore};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("valid word regex"));

/// A negation flips opinion words up to this many tokens after it.
const NEGATION_SCOPE: usize = 3;
/// Polarity multiplier applied to a negated opinion word.
const NEGATION_FACTOR: f64 = -0.5;

/// Opinion-lexicon scorer over raw (unstemmed) lowercase words.
///
/// Every lexicon hit is one assessment; intensifiers in front of it scale
/// both polarity and subjectivity, a negation in scope scales polarity by
/// -0.5. The text score is the mean over assessments.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    opinions: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
    thresholds: Thresholds,
}

impl SentimentScorer {
    pub fn new(cfg: &AnalyzerConfig) -> Self {
        Self {
            opinions: cfg
                .opinion_words
                .iter()
                .map(|o| (o.word.to_lowercase(), (o.polarity, o.subjectivity)))
                .collect(),
            intensifiers: cfg
                .intensifiers
                .iter()
                .map(|i| (i.word.to_lowercase(), i.multiplier))
                .collect(),
            negations: cfg.negations.iter().map(|n| n.to_lowercase()).collect(),
            thresholds: cfg.thresholds,
        }
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    pub fn label(&self, polarity: f64) -> Sentiment {
        if polarity > self.thresholds.positive_polarity {
            Sentiment::Positive
        } else if polarity < self.thresholds.negative_polarity {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn score(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut multiplier = 1.0;
        let mut negated_for = 0usize;

        for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
            if self.is_negation(word) {
                negated_for = NEGATION_SCOPE;
                continue;
            }
            if let Some(m) = self.intensifiers.get(word) {
                multiplier *= m;
                continue;
            }
            match self.opinions.get(word) {
                Some(&(p, s)) => {
                    let mut polarity = p * multiplier;
                    if negated_for > 0 {
                        polarity *= NEGATION_FACTOR;
                    }
                    let subjectivity = s * multiplier;
                    assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
                    multiplier = 1.0;
                    negated_for = 0;
                }
                None => {
                    multiplier = 1.0;
                    negated_for = negated_for.saturating_sub(1);
                }
            }
        }

        if assessments.is_empty() {
            return SentimentScore::neutral();
        }

        let n = assessments.len() as f64;
        let polarity = (assessments.iter().map(|a| a.0).sum::<f64>() / n).clamp(-1.0, 1.0);
        let subjectivity = (assessments.iter().map(|a| a.1).sum::<f64>() / n).clamp(0.0, 1.0);

        SentimentScore {
            sentiment: self.label(polarity),
            polarity,
            subjectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpinionWord;

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(&AnalyzerConfig::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_text_is_neutral_zero() {
        let s = scorer().score("");
        assert_eq!(s, SentimentScore::neutral());
        assert_eq!(scorer().score("   "), SentimentScore::neutral());
    }

    #[test]
    fn factual_text_has_no_assessments() {
        let s = scorer().score("The committee met on Tuesday in Geneva.");
        assert_eq!(s.sentiment, Sentiment::Neutral);
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn positive_and_negative_words() {
        let s = scorer().score("A great and wonderful result");
        assert_eq!(s.sentiment, Sentiment::Positive);
        assert!(approx(s.polarity, 0.9));

        let s = scorer().score("Terrible, awful news");
        assert_eq!(s.sentiment, Sentiment::Negative);
        assert!(approx(s.polarity, -1.0));
        assert!(approx(s.subjectivity, 1.0));
    }

    #[test]
    fn negation_flips_and_dampens() {
        let s = scorer().score("The plan is not good");
        assert!(approx(s.polarity, -0.35));
        assert_eq!(s.sentiment, Sentiment::Negative);

        let s = scorer().score("It isn't bad");
        assert!(approx(s.polarity, 0.35));
    }

    #[test]
    fn intensifier_scales_and_clamps() {
        let s = scorer().score("very good");
        assert!(approx(s.polarity, 0.91));
        assert!(approx(s.subjectivity, 0.78));

        let s = scorer().score("extremely excellent");
        assert!(approx(s.polarity, 1.0));
        assert!(approx(s.subjectivity, 1.0));
    }

    #[test]
    fn thresholds_are_strict() {
        let mut cfg = AnalyzerConfig::default();
        cfg.opinion_words = vec![
            OpinionWord { word: "edge".into(), polarity: 0.1, subjectivity: 0.5 },
            OpinionWord { word: "over".into(), polarity: 0.11, subjectivity: 0.5 },
            OpinionWord { word: "under".into(), polarity: -0.1, subjectivity: 0.5 },
        ];
        let s = SentimentScorer::new(&cfg);
        assert_eq!(s.score("edge").sentiment, Sentiment::Neutral);
        assert_eq!(s.score("over").sentiment, Sentiment::Positive);
        assert_eq!(s.score("under").sentiment, Sentiment::Neutral);
    }
}
