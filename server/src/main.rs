use anyhow::Result;
use clap::Parser;
use server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};
use wikisearch_core::{DirectoryCollection, EngineConfig, QueryResolution, SearchEngine, DEFAULT_SITE_ROOT};

#[derive(Parser)]
struct Args {
    /// Directory holding the collection directories
    #[arg(long, env = "WIKISEARCH_DATA", default_value = "./data/wikipedia/Words")]
    data: PathBuf,
    /// Collection directory names under --data, indexed in the given order
    #[arg(long = "collection", default_values = ["Games", "Programming"])]
    collections: Vec<String>,
    /// Site root used to build document links
    #[arg(long, default_value = DEFAULT_SITE_ROOT)]
    site_root: String,
    /// Answer unseen query terms without adding them to the dictionary
    #[arg(long, default_value_t = false)]
    lookup_only_queries: bool,
    /// Allowed CORS origin(s), comma-separated
    #[arg(long, env = "ORIGIN")]
    origin: Option<String>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let query_resolution = if args.lookup_only_queries { QueryResolution::LookupOnly } else { QueryResolution::Create };
    let mut engine = SearchEngine::new(EngineConfig { site_root: args.site_root.clone(), query_resolution });
    let collections: Vec<DirectoryCollection> =
        args.collections.iter().map(|name| DirectoryCollection::new(args.data.join(name))).collect();
    let report = engine.index(&collections);
    tracing::info!(
        num_docs = report.documents(),
        num_terms = engine.dictionary().len(),
        failed = report.failures.len(),
        "index ready"
    );

    let app = build_app(Arc::new(engine), args.origin.as_deref());
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
