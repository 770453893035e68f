use crate::config::CategoryKeywords;
use crate::models::Category;

/// Keyword-bag topic scorer. Raw lowercase substring counts, no stemming:
/// a keyword occurring three times contributes three.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    lexicon: Vec<(Category, Vec<String>)>,
}

impl CategoryClassifier {
    pub fn new(categories: &[CategoryKeywords]) -> Self {
        Self {
            lexicon: categories
                .iter()
                .map(|c| {
                    let kws = c.keywords.iter().map(|k| k.to_lowercase()).collect();
                    (c.category, kws)
                })
                .collect(),
        }
    }

    /// Per-category totals in declaration order.
    pub fn scores(&self, title: &str, content: &str) -> Vec<(Category, usize)> {
        let text = format!("{} {}", title, content).to_lowercase();
        self.lexicon
            .iter()
            .map(|(category, keywords)| {
                let total = keywords.iter().map(|k| text.matches(k.as_str()).count()).sum();
                (*category, total)
            })
            .collect()
    }

    /// Highest total wins; the earliest declared category wins a tie; all
    /// zero falls back to `General`.
    pub fn classify(&self, title: &str, content: &str) -> Category {
        let mut best = Category::General;
        let mut best_score = 0usize;
        for (category, score) in self.scores(title, content) {
            if score > best_score {
                best = category;
                best_score = score;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;

    fn classifier() -> CategoryClassifier {
        CategoryClassifier::new(&AnalyzerConfig::default().categories)
    }

    #[test]
    fn single_category_title() {
        let c = classifier();
        assert_eq!(c.classify("Vaccine rollout reaches hospital wards", ""), Category::Health);
        assert_eq!(c.classify("Football championship final", ""), Category::Sports);
        assert_eq!(c.classify("Senate passes election law", ""), Category::Politics);
    }

    #[test]
    fn no_keywords_is_general() {
        let c = classifier();
        assert_eq!(c.classify("", ""), Category::General);
        assert_eq!(c.classify("Quiet weekend", "Nothing much to report"), Category::General);
    }

    #[test]
    fn counts_every_occurrence() {
        let c = classifier();
        let scores = c.scores("Stock stock STOCK", "football");
        let business = scores.iter().find(|(c, _)| *c == Category::Business).unwrap().1;
        let sports = scores.iter().find(|(c, _)| *c == Category::Sports).unwrap().1;
        assert_eq!(business, 3);
        assert_eq!(sports, 1);
        assert_eq!(c.classify("Stock stock STOCK", "football"), Category::Business);
    }

    #[test]
    fn tie_goes_to_first_declared() {
        let c = classifier();
        // business is declared before sports, one hit each
        assert_eq!(c.classify("stock football", ""), Category::Business);
        // technology is declared before business
        assert_eq!(c.classify("software market", ""), Category::Technology);
    }

    #[test]
    fn custom_order_changes_tie_break() {
        let cats = vec![
            CategoryKeywords {
                category: Category::Sports,
                keywords: vec!["football".into()],
            },
            CategoryKeywords {
                category: Category::Business,
                keywords: vec!["stock".into()],
            },
        ];
        let c = CategoryClassifier::new(&cats);
        assert_eq!(c.classify("stock football", ""), Category::Sports);
    }
}
