use anyhow::{Context, Result};
use cardfetch_acquire::{FetchConfig, Pacing, Reporter, RunEvent, RunOutcome, SleepPacer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cardfetch")]
#[command(about = "Download every card image from a trading-card listing page")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Listing page to scrape
    #[arg(long, global = true, default_value = cardfetch_acquire::config::DEFAULT_PAGE_URL)]
    url: String,

    /// Directory the card folder is created in
    #[arg(long, global = true, default_value = ".")]
    base_dir: PathBuf,

    /// Name of the card folder
    #[arg(long, global = true, default_value = cardfetch_acquire::config::DEFAULT_DIR_NAME)]
    dir_name: String,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, global = true, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Pause before each card, in milliseconds
    #[arg(long, global = true, default_value_t = 2000)]
    entry_delay_ms: u64,

    /// Pause after each saved card, in milliseconds
    #[arg(long, global = true, default_value_t = 500)]
    download_delay_ms: u64,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Download every card image (the default)
    Fetch,

    /// Print the cards found on the listing page as JSON, without downloading
    List,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            page_url: self.url.clone(),
            base_dir: self.base_dir.clone(),
            dir_name: self.dir_name.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            pacing: Pacing {
                before_entry: Duration::from_millis(self.entry_delay_ms),
                after_download: Duration::from_millis(self.download_delay_ms),
            },
            ..FetchConfig::default()
        }
    }
}

/// Prints each event as one line on stdout.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: RunEvent) {
        println!("{event}");
    }
}

fn init_logging(log_level: &LogLevel, utc: bool) {
    // Suppress noisy HTML-parsing crates at debug/trace
    let level = match log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr; stdout carries the report lines and JSON listings
    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.utc);

    let config = cli.fetch_config();

    match cli.command.unwrap_or(Commands::Fetch) {
        Commands::Fetch => {
            let outcome =
                cardfetch_acquire::run(&config, &mut SleepPacer, &mut ConsoleReporter).await?;
            // A failed page fetch has already been reported; it is not an error exit
            if let RunOutcome::Aborted(e) = outcome {
                tracing::debug!(error = ?e, "Run aborted");
            }
        }
        Commands::List => {
            match cardfetch_acquire::list(&config).await {
                Ok(entries) => {
                    tracing::info!(entries = entries.len(), "Extracted card entries");
                    let json = serde_json::to_string_pretty(&entries)
                        .context("Failed to serialize entries")?;
                    println!("{json}");
                }
                Err(e) => ConsoleReporter.report(RunEvent::PageFailed {
                    detail: e.to_string(),
                }),
            }
        }
    }

    Ok(())
}
