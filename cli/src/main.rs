use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use wikisearch_core::tokenizer::is_single_term;
use wikisearch_core::{DirectoryCollection, EngineConfig, IndexReport, SearchEngine, SearchHit, DEFAULT_SITE_ROOT};

#[derive(Parser)]
#[command(name = "wikisearch")]
#[command(about = "Index a word corpus and run single-term queries against it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Directory holding the collection directories
    #[arg(long, env = "WIKISEARCH_DATA", default_value = "./data/wikipedia/Words")]
    data: PathBuf,
    /// Collection directory names under --data, indexed in the given order
    #[arg(long = "collection", default_values = ["Games", "Programming"])]
    collections: Vec<String>,
    /// Site root used to build document links
    #[arg(long, default_value = DEFAULT_SITE_ROOT)]
    site_root: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the corpus and print document and term counts
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Index the corpus and print ranked results for one term
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Maximum number of results to print
        #[arg(long, default_value_t = 5)]
        limit: usize,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Query term (a single word)
        term: String,
    },
}

#[derive(Debug, Serialize)]
struct SearchOutput {
    term: String,
    total_hits: usize,
    results: Vec<SearchHit>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { corpus } => {
            let (engine, report) = build_engine(&corpus);
            println!("documents: {}", engine.documents().len());
            println!("terms: {}", engine.dictionary().len());
            for summary in &report.indexed {
                println!("  {}: {} documents", summary.collection, summary.documents);
            }
            for failure in &report.failures {
                println!("  failed: {failure}");
            }
            Ok(())
        }
        Commands::Search { corpus, limit, json, term } => {
            let (engine, _) = build_engine(&corpus);
            let out = run_search(&engine, &term, limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} results for {term:?}", out.total_hits);
                for (i, hit) in out.results.iter().enumerate() {
                    println!("{:>3}. {:.2}  {}  {}", i + 1, hit.normalized_score, hit.document_name, hit.document_url);
                }
            }
            Ok(())
        }
    }
}

/// Rejects multi-word terms, then keeps the top `limit` hits and the full hit count.
fn run_search(engine: &SearchEngine, term: &str, limit: usize) -> Result<SearchOutput> {
    if !is_single_term(term) {
        bail!("too many words (max 1): {term:?}");
    }
    let mut results = engine.search_hits(term);
    let total_hits = results.len();
    results.truncate(limit);
    Ok(SearchOutput { term: term.to_string(), total_hits, results })
}

fn build_engine(corpus: &CorpusArgs) -> (SearchEngine, IndexReport) {
    let config = EngineConfig { site_root: corpus.site_root.clone(), ..EngineConfig::default() };
    let mut engine = SearchEngine::new(config);
    let collections: Vec<DirectoryCollection> =
        corpus.collections.iter().map(|name| DirectoryCollection::new(corpus.data.join(name))).collect();
    let report = engine.index(&collections);
    tracing::info!(
        num_docs = engine.documents().len(),
        num_terms = engine.dictionary().len(),
        failed = report.failures.len(),
        "index build complete"
    );
    (engine, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn corpus_in(dir: &std::path::Path) -> CorpusArgs {
        let games = dir.join("Games");
        let programming = dir.join("Programming");
        fs::create_dir_all(&games).unwrap();
        fs::create_dir_all(&programming).unwrap();
        fs::write(games.join("Chess"), "chess board game board").unwrap();
        fs::write(games.join("Go"), "go board").unwrap();
        fs::write(programming.join("Rust"), "rust language board").unwrap();
        CorpusArgs {
            data: dir.to_path_buf(),
            collections: vec!["Games".into(), "Programming".into(), "Missing".into()],
            site_root: DEFAULT_SITE_ROOT.into(),
        }
    }

    #[test]
    fn build_engine_reports_missing_collections() {
        let dir = tempdir().unwrap();
        let (engine, report) = build_engine(&corpus_in(dir.path()));
        assert_eq!(engine.documents().len(), 3);
        assert_eq!(report.indexed.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].collection(), "Missing");
    }

    #[test]
    fn search_limits_results_but_counts_all() {
        let dir = tempdir().unwrap();
        let (engine, _) = build_engine(&corpus_in(dir.path()));
        let out = run_search(&engine, "board", 2).unwrap();
        assert_eq!(out.total_hits, 3);
        assert_eq!(out.results.len(), 2);
        assert_eq!(out.results[0].document_name, "Chess");
        assert_eq!(out.results[0].normalized_score, 1.0);
    }

    #[test]
    fn search_rejects_multiple_words() {
        let engine = SearchEngine::new(EngineConfig::default());
        let err = run_search(&engine, "board game", 5).unwrap_err();
        assert!(err.to_string().contains("too many words"));
    }

    #[test]
    fn cli_parses_repeated_collections() {
        let cli = Cli::try_parse_from(["wikisearch", "search", "--data", "/tmp/words", "--collection", "Games", "--collection", "Art", "chess"]).unwrap();
        match cli.command {
            Commands::Search { corpus, limit, term, .. } => {
                assert_eq!(corpus.collections, ["Games", "Art"]);
                assert_eq!(limit, 5);
                assert_eq!(term, "chess");
            }
            _ => panic!("expected search"),
        }
    }
}
