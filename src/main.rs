use anyhow::Result;
use clap::{Parser, Subcommand};
use preprint_harvester::config::{find_config_file, load_config, CrawlConfig};
use preprint_harvester::crawler::ListingCrawler;
use preprint_harvester::lookup::{CitationResolver, DocumentFetcher};
use preprint_harvester::utils::HttpClient;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Preprint Harvester - crawl arXiv category listings and resolve article details
#[derive(Parser, Debug)]
#[command(name = "preprint-harvester")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Crawl arXiv category listings and resolve article details", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Crawl the configured category listings and emit records as JSON lines
    #[command(alias = "c")]
    Crawl {
        /// Category to crawl (repeatable; overrides the config file)
        #[arg(long, short = 'C')]
        category: Vec<String>,

        /// Year to crawl (repeatable; overrides the config file)
        #[arg(long, short = 'y')]
        year: Vec<String>,

        /// Entries requested per listing page
        #[arg(long)]
        page_size: Option<usize>,

        /// Base URL of the listing endpoint
        #[arg(long)]
        base_url: Option<String>,

        /// Write records to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Resolve full text for an article's HTML page URL (PDF fallback on 404)
    Fulltext {
        /// Structured-markup page URL, e.g. https://arxiv.org/html/2501.00001
        url: String,
    },

    /// Look up the citation count for a citation-tracking page URL
    Citations {
        /// Citation-tracking page URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("preprint_harvester={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        CrawlConfig::default()
    };

    let client = HttpClient::new();

    match cli.command {
        Commands::Crawl {
            category,
            year,
            page_size,
            base_url,
            output,
        } => {
            let mut config = config;
            if !category.is_empty() {
                config.categories = category;
            }
            if !year.is_empty() {
                config.years = year;
            }
            if let Some(page_size) = page_size {
                config.page_size = page_size;
            }
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }

            let mut writer: BufWriter<Box<dyn Write>> = match &output {
                Some(path) => BufWriter::new(Box::new(File::create(path)?)),
                None => BufWriter::new(Box::new(std::io::stdout())),
            };

            let crawler = ListingCrawler::new(client, config);
            let mut emit_failure: Option<anyhow::Error> = None;
            let summary = crawler
                .crawl(&mut |record| {
                    if emit_failure.is_some() {
                        return;
                    }
                    let written = serde_json::to_string(&record)
                        .map_err(anyhow::Error::from)
                        .and_then(|json| writeln!(writer, "{}", json).map_err(anyhow::Error::from));
                    if let Err(e) = written {
                        emit_failure = Some(e);
                    }
                })
                .await;
            writer.flush()?;
            if let Some(e) = emit_failure {
                return Err(e.context("failed to write record"));
            }

            tracing::info!(
                completed = summary.completed_branches,
                failed = summary.failed_branches,
                pages = summary.pages,
                records = summary.records,
                skipped = summary.skipped,
                "crawl finished"
            );
            if summary.failed_branches > 0 {
                anyhow::bail!("{} branch(es) aborted", summary.failed_branches);
            }
        }

        Commands::Fulltext { url } => {
            let fetcher = DocumentFetcher::new(client);
            let text = fetcher.resolve(&url).await?;
            println!("{}", text.as_str());
        }

        Commands::Citations { url } => {
            let resolver = CitationResolver::new(client);
            let count = resolver.resolve(&url).await?;
            println!("{}", count);
        }
    }

    Ok(())
}
