use itertools::Itertools;
use std::collections::HashMap;

use crate::models::{ArticleText, TrendingKeyword};
use crate::tokenize::Normalizer;

/// Most frequent stemmed tokens across all titles and bodies.
///
/// Tokens shorter than `min_len` (after stemming) are ignored. Ties keep the
/// order in which tokens first appear in the corpus.
pub fn trending_keywords<A: ArticleText>(
    normalizer: &Normalizer,
    articles: &[A],
    top_n: usize,
    min_len: usize,
) -> Vec<TrendingKeyword> {
    let mut corpus = String::new();
    for a in articles {
        corpus.push(' ');
        corpus.push_str(a.title());
        corpus.push(' ');
        corpus.push_str(a.content());
    }

    // token -> (count, first position)
    let mut bag: HashMap<String, (u32, usize)> = HashMap::new();
    for (pos, token) in normalizer
        .normalize(&corpus)
        .tokens()
        .filter(|t| t.len() >= min_len)
        .enumerate()
    {
        bag.entry(token).or_insert((0, pos)).0 += 1;
    }

    bag.into_iter()
        .sorted_by(|(_, (ca, pa)), (_, (cb, pb))| cb.cmp(ca).then(pa.cmp(pb)))
        .take(top_n)
        .map(|(keyword, (frequency, _))| TrendingKeyword { keyword, frequency })
        .collect()
}
