use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AnalysisInput, ArticleText};

/// Article as read from an input file. `title`, `content` and `source` are
/// required; a record missing any of them fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub source: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>, // RFC 3339
}

impl ArticleRecord {
    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput::new(self.title.clone(), self.content.clone(), self.source.clone())
    }
}

impl ArticleText for ArticleRecord {
    fn title(&self) -> &str {
        &self.title
    }
    fn content(&self) -> &str {
        &self.content
    }
}

/// Free-text request for the sentiment and summarize commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
    #[serde(default)]
    pub max_sentences: Option<i64>,
}
