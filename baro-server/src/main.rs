//! baro-server — HTTP reporting API over pre-computed word corrections.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use baro::{Baro, UnknownTagPolicy};
use baro_core::RecordSource;
use baro_mock::MockSource;
use baro_sqlite::SqliteSource;

#[derive(Parser)]
#[command(name = "baro-server")]
#[command(version)]
#[command(about = "Read-only reporting API over word-correction records", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3030")]
    listen: SocketAddr,

    /// SQLite database holding the word_corrections table. Without it the
    /// server falls back to built-in fixture data.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Fold records with tags outside the news/webtoon/youtube channel set
    /// into an "other" counter instead of failing the mention query.
    #[arg(long)]
    fold_unknown_tags: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let source: Arc<dyn RecordSource> = match &cli.db {
        Some(path) => {
            info!(path = %path.display(), "serving from sqlite");
            Arc::new(SqliteSource::open(path)?)
        }
        None => {
            warn!("no --db given; serving built-in fixture data");
            Arc::new(MockSource::new())
        }
    };

    let policy = if cli.fold_unknown_tags {
        UnknownTagPolicy::FoldIntoOther
    } else {
        UnknownTagPolicy::Reject
    };

    let baro = Baro::builder()
        .with_source(source)
        .unknown_tag_policy(policy)
        .build()?;

    info!(listen = %cli.listen, "starting baro-server");
    warp::serve(baro_server::routes(Arc::new(baro)))
        .run(cli.listen)
        .await;

    Ok(())
}
