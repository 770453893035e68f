use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use xxhash_rust::xxh3::xxh3_64;

use crate::api_types::ArticleRecord;

/// Stable id for a record that arrives without one.
pub fn make_article_id(source: &str, title: &str) -> String {
    format!("{:016x}", xxh3_64(format!("{}|{}", source, title).as_bytes()))
}

/// Read the whole input; `-` means stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
    }
}

pub fn parse_json<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Decoding JSON for {}", what))
}

pub fn load_records(path: &Path) -> Result<Vec<ArticleRecord>> {
    let start = std::time::Instant::now();
    let raw = read_input(path)?;
    let records: Vec<ArticleRecord> = parse_json(&raw, &path.display().to_string())?;
    info!(
        "Records loaded - input={}, duration={:.2}s, records={}",
        path.display(),
        start.elapsed().as_secs_f32(),
        records.len()
    );
    Ok(normalize_records(records))
}

pub fn load_record(path: &Path) -> Result<ArticleRecord> {
    let raw = read_input(path)?;
    let record: ArticleRecord = parse_json(&raw, &path.display().to_string())?;
    Ok(normalize_records(vec![record]).remove(0))
}

/// Trim titles and fill in missing ids.
pub fn normalize_records(mut records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    for r in records.iter_mut() {
        r.title = r.title.trim().to_string();
        if r.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            r.id = Some(make_article_id(&r.source, &r.title));
        }
    }
    records
}

/// Keep records published within `days` of `now`. Records without a
/// timestamp are kept.
pub fn filter_recent(records: Vec<ArticleRecord>, days: i64, now: DateTime<Utc>) -> Vec<ArticleRecord> {
    let cutoff = now - Duration::days(days);
    let before = records.len();
    let kept: Vec<ArticleRecord> = records
        .into_iter()
        .filter(|r| r.published_at.map_or(true, |t| t >= cutoff))
        .collect();
    debug!(
        "Recency filter - cutoff={}, kept={}, dropped={}",
        cutoff.to_rfc3339(),
        kept.len(),
        before - kept.len()
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    fn record(title: &str, published_at: Option<DateTime<Utc>>) -> ArticleRecord {
        ArticleRecord {
            id: None,
            title: title.to_string(),
            content: "body".into(),
            source: "wire".into(),
            published_at,
        }
    }

    #[test]
    fn ids_are_stable_and_hex() {
        let a = make_article_id("wire", "Title");
        assert_eq!(a, make_article_id("wire", "Title"));
        assert_ne!(a, make_article_id("wire", "Other"));
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn normalize_trims_and_assigns_ids() {
        let mut given = record("kept", None);
        given.id = Some("abc".into());
        let out = normalize_records(vec![record("  Padded title \n", None), given]);
        assert_eq!(out[0].title, "Padded title");
        assert_eq!(out[0].id.as_deref(), Some(make_article_id("wire", "Padded title").as_str()));
        assert_eq!(out[1].id.as_deref(), Some("abc"));
    }

    #[test]
    fn recent_filter_keeps_undated() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let records = vec![
            record("fresh", Some(now - Duration::days(2))),
            record("stale", Some(now - Duration::days(30))),
            record("undated", None),
        ];
        let kept: Vec<String> = filter_recent(records, 7, now).into_iter().map(|r| r.title).collect();
        assert_eq!(kept, vec!["fresh", "undated"]);
    }

    #[test]
    fn loads_records_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"[{{"title":" A ","content":"x","source":"bbc","published_at":"2025-01-02T03:04:05Z"}}]"#
        )
        .unwrap();
        let records = load_records(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "A");
        assert!(records[0].id.is_some());
        assert!(records[0].published_at.is_some());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"[{{"title":"A","content":"x"}}]"#).unwrap();
        let err = load_records(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("source"));
    }
}
