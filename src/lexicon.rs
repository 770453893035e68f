//! Built-in word tables. `AnalyzerConfig::default()` copies these into owned
//! collections; nothing reads them directly at analysis time.

use crate::models::Category;

/* ------------------------------ Categories -------------------------------- */

/// Declaration order is the tie-break order for classification.
pub static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Technology,
        &[
            "tech", "software", "computer", "internet", "digital", "ai", "artificial intelligence",
            "machine learning", "blockchain", "cryptocurrency", "startup", "innovation",
        ],
    ),
    (
        Category::Business,
        &[
            "business", "economy", "market", "stock", "finance", "company", "corporate",
            "investment", "profit", "revenue", "trade", "industry",
        ],
    ),
    (
        Category::Sports,
        &[
            "sports", "football", "basketball", "soccer", "tennis", "baseball", "olympics",
            "championship", "team", "player", "game", "match",
        ],
    ),
    (
        Category::Health,
        &[
            "health", "medical", "doctor", "hospital", "disease", "treatment", "medicine",
            "vaccine", "virus", "pandemic", "healthcare", "wellness",
        ],
    ),
    (
        Category::Science,
        &[
            "science", "research", "study", "discovery", "experiment", "scientist",
            "climate", "environment", "space", "nasa", "physics", "chemistry",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "entertainment", "movie", "film", "music", "celebrity", "actor", "actress",
            "hollywood", "concert", "album", "show", "television",
        ],
    ),
    (
        Category::Politics,
        &[
            "politics", "government", "president", "election", "congress", "senate",
            "policy", "law", "vote", "campaign", "politician", "democracy",
        ],
    ),
];

/* ---------------------------- Credibility -------------------------------- */

pub static FAKE_INDICATORS: &[&str] = &[
    "breaking:",
    "shocking:",
    "you won't believe",
    "doctors hate",
    "secret",
    "exposed",
    "conspiracy",
    "cover-up",
    "they don't want you to know",
    "miracle cure",
    "exclusive:",
    "leaked",
    "insider reveals",
];

pub static RELIABLE_SOURCES: &[&str] = &[
    "bbc",
    "cnn",
    "reuters",
    "associated press",
    "the guardian",
    "the new york times",
    "the washington post",
    "npr",
    "pbs",
];

/* ------------------------------ Stop words -------------------------------- */

// Tokens are checked after apostrophes are stripped, so contracted forms
// ("don't", "isn't") never reach this set and are left out.
pub static STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/* ------------------------------ Sentiment -------------------------------- */

/// (word, polarity, subjectivity)
pub static OPINION_WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.227, 0.545),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("nice", 0.6, 1.0),
    ("strong", 0.433, 0.733),
    ("successful", 0.75, 0.95),
    ("success", 0.3, 0.4),
    ("win", 0.8, 0.4),
    ("wins", 0.8, 0.4),
    ("won", 0.6, 0.4),
    ("victory", 0.6, 0.5),
    ("impressive", 1.0, 1.0),
    ("remarkable", 0.75, 0.75),
    ("brilliant", 0.9, 1.0),
    ("beautiful", 0.85, 1.0),
    ("perfect", 1.0, 1.0),
    ("effective", 0.6, 0.8),
    ("safe", 0.5, 0.5),
    ("healthy", 0.5, 0.5),
    ("hopeful", 0.5, 0.7),
    ("optimistic", 0.5, 0.8),
    ("promising", 0.6, 0.7),
    ("improved", 0.4, 0.5),
    ("improve", 0.3, 0.4),
    ("growth", 0.2, 0.3),
    ("gain", 0.2, 0.3),
    ("gains", 0.2, 0.3),
    ("boost", 0.3, 0.4),
    ("breakthrough", 0.5, 0.5),
    ("recovery", 0.3, 0.4),
    ("innovative", 0.5, 0.7),
    ("exciting", 0.3, 0.8),
    ("excited", 0.375, 0.75),
    ("popular", 0.6, 0.8),
    ("fair", 0.7, 0.9),
    ("easy", 0.433, 0.833),
    ("clear", 0.1, 0.383),
    ("interesting", 0.5, 0.5),
    ("important", 0.4, 1.0),
    ("significant", 0.375, 0.875),
    ("new", 0.136, 0.455),
    ("free", 0.4, 0.8),
    ("true", 0.35, 0.65),
    ("right", 0.286, 0.536),
    ("proud", 0.8, 1.0),
    ("celebrate", 0.5, 0.6),
    ("thriving", 0.6, 0.7),
    ("record", 0.1, 0.2),
    // negative
    ("bad", -0.7, 0.667),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("negative", -0.3, 0.4),
    ("angry", -0.5, 1.0),
    ("hate", -0.8, 0.9),
    ("dangerous", -0.6, 0.9),
    ("deadly", -0.2, 0.4),
    ("weak", -0.375, 0.625),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.3, 0.3),
    ("loss", -0.3, 0.3),
    ("losses", -0.3, 0.3),
    ("lose", -0.4, 0.4),
    ("lost", -0.3, 0.3),
    ("crisis", -0.4, 0.5),
    ("crash", -0.5, 0.5),
    ("collapse", -0.5, 0.5),
    ("decline", -0.3, 0.4),
    ("fear", -0.4, 0.7),
    ("fears", -0.4, 0.7),
    ("worried", -0.4, 0.8),
    ("concern", -0.2, 0.5),
    ("concerns", -0.2, 0.5),
    ("risk", -0.2, 0.4),
    ("threat", -0.4, 0.5),
    ("war", -0.5, 0.4),
    ("violence", -0.6, 0.5),
    ("attack", -0.5, 0.4),
    ("killed", -0.2, 0.3),
    ("death", -0.4, 0.4),
    ("scandal", -0.5, 0.6),
    ("fraud", -0.5, 0.5),
    ("corrupt", -0.5, 0.7),
    ("disaster", -0.8, 0.8),
    ("tragic", -0.75, 1.0),
    ("shocking", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
    ("false", -0.4, 0.6),
    ("difficult", -0.5, 1.0),
    ("hard", -0.292, 0.542),
    ("problem", -0.2, 0.3),
    ("problems", -0.2, 0.3),
    ("unfortunately", -0.5, 1.0),
    ("severe", -0.6, 0.7),
    ("serious", -0.333, 0.667),
    ("stupid", -0.8, 1.0),
    ("ugly", -0.7, 1.0),
    ("boring", -1.0, 1.0),
    ("painful", -0.7, 0.9),
];

/// (word, multiplier) applied to the next opinion word.
pub static INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("highly", 1.3),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("quite", 1.1),
    ("most", 1.2),
    ("more", 1.1),
    ("deeply", 1.3),
    ("truly", 1.3),
    ("somewhat", 0.8),
    ("slightly", 0.6),
    ("barely", 0.5),
    ("hardly", 0.5),
];

pub static NEGATIONS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "nothing", "nobody", "without", "cannot", "none",
];
