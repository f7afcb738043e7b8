use anyhow::{Context, Result};
use cardfetch_model::CardEntry;

pub mod config;
pub mod download;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pacing;
pub mod report;

pub use config::{FetchConfig, Pacing};
pub use download::{DownloadError, DownloadSummary, Downloader};
pub use extract::CardPage;
pub use fetch::{FetchError, HttpFetcher};
pub use pacing::{Pacer, SleepPacer};
pub use report::{Reporter, RunEvent};

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The listing page was fetched and every entry was attempted.
    Completed(DownloadSummary),
    /// The listing page could not be fetched; no entry was attempted.
    Aborted(FetchError),
}

/// Scrape the listing page and download every card image.
///
/// Prepares the output directory, fetches and parses the page, then hands
/// the entries to the downloader. A failure to prepare the directory is an
/// error; a failure to fetch the page is reported through `reporter` and
/// returned as [`RunOutcome::Aborted`]. Individual image failures only
/// show up in the summary.
pub async fn run<P, R>(config: &FetchConfig, pacer: &mut P, reporter: &mut R) -> Result<RunOutcome>
where
    P: Pacer,
    R: Reporter,
{
    let output_dir = output::prepare_output_dir(&config.base_dir, &config.dir_name)
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.base_dir.join(&config.dir_name).display()
            )
        })?;
    tracing::info!(path = %output_dir.display(), "Saving cards");

    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout)
        .context("Failed to build HTTP client")?;

    tracing::info!(url = %config.page_url, "Fetching listing page");
    let html = match fetcher.fetch_page(&config.page_url).await {
        Ok(html) => html,
        Err(e) => {
            tracing::debug!(error = ?e, "Listing page fetch failed");
            reporter.report(RunEvent::PageFailed {
                detail: e.to_string(),
            });
            return Ok(RunOutcome::Aborted(e));
        }
    };
    tracing::info!(bytes = html.len(), "Received HTML");

    let page = CardPage::parse(&html);
    tracing::info!(cards = page.card_count(), "Parsed listing page");

    let mut downloader = Downloader {
        fetcher: &fetcher,
        output_dir: &output_dir,
        policy: &config.filename,
        pacing: config.pacing,
        pacer,
        reporter,
    };
    let summary = downloader.download_all(page.entries()).await;

    tracing::info!(
        downloaded = summary.downloaded,
        failed = summary.failed,
        "Finished downloading cards"
    );
    Ok(RunOutcome::Completed(summary))
}

/// Fetch the listing page and return its entries without downloading anything.
pub async fn list(config: &FetchConfig) -> Result<Vec<CardEntry>, FetchError> {
    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout)?;
    let html = fetcher.fetch_page(&config.page_url).await?;
    let page = CardPage::parse(&html);
    Ok(page.entries().collect())
}
