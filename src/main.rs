use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use news_analyzer::api_types::{ArticleRecord, TextRequest};
use news_analyzer::ingest::{filter_recent, load_record, load_records, parse_json, read_input};
use news_analyzer::out_models::{AnalyzedArticle, BatchReport, SummaryResponse, TrendingResponse};
use news_analyzer::render::render_batch_markdown;
use news_analyzer::{AnalysisInput, AnalyzerConfig, CorpusStats, NewsAnalyzer};

/// News analyzer - category, sentiment, credibility and summaries for articles
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON config file (partial files override the built-in tables)
    #[arg(short, long, global = true, env = "NEWS_ANALYZER_CONFIG")]
    config: Option<PathBuf>,

    /// Input file, or "-" for stdin
    #[arg(short, long, global = true, default_value = "-")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one article record
    Analyze,
    /// Analyze an array of article records; failures fall back to defaults
    Batch {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Include category/sentiment/fake-news distribution
        #[arg(long)]
        stats: bool,
    },
    /// Score sentiment of free text
    Sentiment {
        /// Text to score (otherwise read {"text": ...} from input)
        #[arg(long)]
        text: Option<String>,
    },
    /// Run the fake-news heuristic on one article record
    Detect,
    /// Extractive summary of free text
    Summarize {
        #[arg(long)]
        text: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        max_sentences: Option<i64>,
    },
    /// Most frequent stemmed keywords across an array of article records
    Trending {
        #[arg(long)]
        top_n: Option<usize>,
        /// Only records published within this many days (undated records are kept)
        #[arg(long, default_value_t = 7)]
        since_days: i64,
        /// Keep every record regardless of publication date
        #[arg(long, conflicts_with = "since_days")]
        all_dates: bool,
    },
    /// Category, sentiment and fake-news distribution over an array of records
    Stats,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Markdown,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let analyzer = NewsAnalyzer::new(config);

    let body = run(&analyzer, &args)?;
    write_output(args.output.as_deref(), &body)
}

fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(p) => {
            debug!("Using config file: {}", p.display());
            AnalyzerConfig::from_path(p).with_context(|| format!("Loading config {}", p.display()))
        }
        None => {
            debug!("Using built-in config");
            Ok(AnalyzerConfig::default())
        }
    }
}

fn run(analyzer: &NewsAnalyzer, args: &Args) -> Result<String> {
    let input = args.input.as_path();

    match &args.command {
        Command::Analyze => {
            let r = load_record(input)?;
            let result = analyzer
                .analyze_article(&r.title, &r.content, &r.source)
                .with_context(|| format!("Analysis failed for {:?}", r.title))?;
            to_json(&result)
        }
        Command::Batch { format, stats } => {
            let records = load_records(input)?;
            let report = batch_report(analyzer, &records, *stats);
            match format {
                Format::Json => to_json(&report),
                Format::Markdown => Ok(render_batch_markdown(&report)),
            }
        }
        Command::Sentiment { text } => {
            let text = resolve_text(input, text.as_deref())?.text;
            to_json(&analyzer.analyze_sentiment(&text))
        }
        Command::Detect => {
            let r = load_record(input)?;
            to_json(&analyzer.detect_fake_news(&r.title, &r.content, &r.source))
        }
        Command::Summarize { text, max_sentences } => {
            let req = resolve_text(input, text.as_deref())?;
            let max = max_sentences
                .or(req.max_sentences)
                .unwrap_or(analyzer.config().summary_sentences as i64);
            let summary = analyzer.summarize_text(&req.text, max)?;
            to_json(&SummaryResponse::new(&req.text, summary))
        }
        Command::Trending {
            top_n,
            since_days,
            all_dates,
        } => {
            let mut records = load_records(input)?;
            if !*all_dates {
                records = filter_recent(records, *since_days, Utc::now());
            }
            let top_n = top_n.unwrap_or(analyzer.config().trending_top_n);
            let keywords = analyzer.get_trending_keywords(&records, top_n);
            to_json(&TrendingResponse {
                trending_keywords: keywords,
                articles_analyzed: records.len(),
            })
        }
        Command::Stats => {
            let records = load_records(input)?;
            let report = batch_report(analyzer, &records, true);
            to_json(&report.stats)
        }
    }
}

fn batch_report(analyzer: &NewsAnalyzer, records: &[ArticleRecord], with_stats: bool) -> BatchReport {
    let inputs: Vec<AnalysisInput> = records.iter().map(|r| r.to_input()).collect();
    let items = analyzer.batch_analyze_articles(&inputs);
    let analyzed_at = Utc::now();

    let stats = with_stats.then(|| CorpusStats::from_results(items.iter().map(|i| i.result())));
    let fallback_count = items.iter().filter(|i| i.is_fallback()).count();

    let articles: Vec<AnalyzedArticle> = records
        .iter()
        .zip(items)
        .map(|(r, outcome)| AnalyzedArticle {
            id: r.id.clone().unwrap_or_default(),
            title: r.title.clone(),
            source: r.source.clone(),
            published_at: r.published_at,
            analyzed_at,
            outcome,
        })
        .collect();

    info!(
        "Batch report ready - articles={}, fallbacks={}",
        articles.len(),
        fallback_count
    );

    BatchReport {
        analyzed_count: articles.len() - fallback_count,
        fallback_count,
        articles,
        stats,
    }
}

/// `--text` wins; otherwise the input holds `{"text": ..., "max_sentences": ...}`.
fn resolve_text(input: &Path, text: Option<&str>) -> Result<TextRequest> {
    match text {
        Some(t) => Ok(TextRequest {
            text: t.to_string(),
            max_sentences: None,
        }),
        None => {
            let raw = read_input(input)?;
            parse_json(&raw, &input.display().to_string())
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Encoding JSON output")
}

fn write_output(path: Option<&Path>, body: &str) -> Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, body.as_bytes()).with_context(|| format!("Writing {}", p.display()))?;
            info!("Output written - path={}, bytes={}", p.display(), body.len());
        }
        None => println!("{}", body),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending_window(argv: &[&str]) -> (i64, bool) {
        match Args::try_parse_from(argv).unwrap().command {
            Command::Trending {
                since_days, all_dates, ..
            } => (since_days, all_dates),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn trending_defaults_to_last_week() {
        assert_eq!(trending_window(&["news_analyzer", "trending"]), (7, false));
        assert_eq!(
            trending_window(&["news_analyzer", "trending", "--since-days", "30"]),
            (30, false)
        );
    }

    #[test]
    fn trending_window_can_be_disabled() {
        assert_eq!(trending_window(&["news_analyzer", "trending", "--all-dates"]), (7, true));
        assert!(Args::try_parse_from(["news_analyzer", "trending", "--all-dates", "--since-days", "3"]).is_err());
    }
}
