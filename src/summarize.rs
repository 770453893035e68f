use std::collections::HashMap;
use tracing::debug;

use crate::tokenize::{split_sentences, Normalizer};

#[derive(Debug, Clone, Copy)]
struct RankedSentence {
    index: usize,
    score: f64,
}

/// Frequency-weighted extractive summary.
///
/// Text with at most `max_sentences` sentences comes back untouched.
/// Otherwise every sentence is scored by the mean document frequency of its
/// normalized tokens, the best `max_sentences` are kept (earlier sentence
/// wins a tie) and re-emitted in document order joined by single spaces.
/// Sentences with no surviving tokens are never selected.
pub fn summarize(normalizer: &Normalizer, text: &str, max_sentences: usize) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let sentences = split_sentences(text);
    if sentences.len() <= max_sentences {
        return text.to_string();
    }

    let word_freq = word_frequencies(normalizer, text);

    let mut ranked: Vec<RankedSentence> = sentences
        .iter()
        .enumerate()
        .filter_map(|(index, sentence)| {
            let (sum, count) = normalizer
                .normalize(sentence)
                .tokens()
                .filter_map(|t| word_freq.get(&t).copied())
                .fold((0u64, 0u64), |(sum, count), f| (sum + u64::from(f), count + 1));
            (count > 0).then(|| RankedSentence {
                index,
                score: sum as f64 / count as f64,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked.truncate(max_sentences);

    let mut picked: Vec<usize> = ranked.iter().map(|r| r.index).collect();
    picked.sort_unstable();

    debug!(
        "Summary built - sentences={}, vocabulary={}, picked={:?}",
        sentences.len(),
        word_freq.len(),
        picked
    );

    picked
        .into_iter()
        .map(|i| sentences[i])
        .collect::<Vec<_>>()
        .join(" ")
}

fn word_frequencies(normalizer: &Normalizer, text: &str) -> HashMap<String, u32> {
    let mut freq = HashMap::new();
    for token in normalizer.normalize(text).tokens() {
        *freq.entry(token).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::STOPWORDS;

    fn normalizer() -> Normalizer {
        Normalizer::new(STOPWORDS.iter())
    }

    #[test]
    fn blank_text_gives_empty_summary() {
        let n = normalizer();
        assert_eq!(summarize(&n, "", 3), "");
        assert_eq!(summarize(&n, "  \n\t ", 3), "");
    }

    #[test]
    fn short_text_passes_through_verbatim() {
        let n = normalizer();
        let text = "  One sentence here.   Two sentences here!\nThree?  ";
        assert_eq!(summarize(&n, text, 3), text);
    }

    #[test]
    fn keeps_highest_frequency_sentence_in_document_order() {
        let n = normalizer();
        let text = "Alpha reports arrived. \
                    Bravo notes followed. \
                    Economy markets inflation economy markets inflation. \
                    Charlie walked home. \
                    Delta waited outside. \
                    Economy markets grew. \
                    Echo sang loudly. \
                    Inflation markets cooled. \
                    Foxtrot slept late. \
                    Golf played well.";
        let summary = summarize(&n, text, 3);
        assert_eq!(
            summary,
            "Economy markets inflation economy markets inflation. \
             Economy markets grew. \
             Inflation markets cooled."
        );
    }

    #[test]
    fn ties_prefer_earlier_sentences() {
        let n = normalizer();
        let text = "Apples fell. Pears rose. Grapes dried. Melons split.";
        assert_eq!(summarize(&n, text, 2), "Apples fell. Pears rose.");
    }

    #[test]
    fn sentences_without_tokens_are_never_picked() {
        let n = normalizer();
        let text = "It is. Markets rallied. So it was. Markets slipped.";
        assert_eq!(summarize(&n, text, 3), "Markets rallied. Markets slipped.");
    }

    #[test]
    fn heavy_repetition_scores_without_overflow() {
        let n = normalizer();
        // 70k repeats of one token: the sentence's frequency sum exceeds u32
        let text = format!(
            "Intro line here. Second line here. Third line here. {}",
            "abc ".repeat(70_000)
        );
        let summary = summarize(&n, &text, 3);
        assert!(summary.ends_with("abc abc"));
        assert!(summary.starts_with("Intro line here."));
    }

    #[test]
    fn zero_sentences_gives_empty_summary() {
        let n = normalizer();
        assert_eq!(summarize(&n, "One thing. Another thing.", 0), "");
    }
}
