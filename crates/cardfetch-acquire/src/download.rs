use crate::config::Pacing;
use crate::fetch::{FetchError, HttpFetcher};
use crate::output;
use crate::pacing::Pacer;
use crate::report::{Reporter, RunEvent};
use cardfetch_model::{CardEntry, FilenamePolicy};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single card could not be saved. Never fatal to the run.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Tally of one pass over the entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub failed: usize,
}

/// Everything the per-entry loop needs besides the entries themselves.
pub struct Downloader<'a, P: Pacer, R: Reporter> {
    pub fetcher: &'a HttpFetcher,
    pub output_dir: &'a Path,
    pub policy: &'a FilenamePolicy,
    pub pacing: Pacing,
    pub pacer: &'a mut P,
    pub reporter: &'a mut R,
}

impl<P: Pacer, R: Reporter> Downloader<'_, P, R> {
    /// Download every entry in order, one at a time.
    ///
    /// Each entry waits `pacing.before_entry` first. A failed fetch or write
    /// is reported and the loop moves on without the post-download pause;
    /// a successful write is reported and followed by `pacing.after_download`.
    pub async fn download_all<I>(&mut self, entries: I) -> DownloadSummary
    where
        I: IntoIterator<Item = CardEntry>,
    {
        let mut summary = DownloadSummary::default();

        for entry in entries {
            self.pacer.pause(self.pacing.before_entry).await;

            match self.download_one(&entry).await {
                Ok(filename) => {
                    summary.downloaded += 1;
                    self.reporter.report(RunEvent::Downloaded { filename });
                    self.pacer.pause(self.pacing.after_download).await;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::debug!(url = %entry.image_url, error = ?e, "Card download failed");
                    self.reporter.report(RunEvent::DownloadFailed {
                        url: entry.image_url.clone(),
                        detail: e.to_string(),
                    });
                }
            }
        }

        summary
    }

    async fn download_one(&self, entry: &CardEntry) -> Result<String, DownloadError> {
        let filename = self.policy.derive(&entry.title);
        let bytes = self.fetcher.fetch_bytes(&entry.image_url).await?;
        output::write_image(self.output_dir, &filename, &bytes)?;
        tracing::debug!(title = %entry.title, file = %filename, bytes = bytes.len(), "Saved card image");
        Ok(filename)
    }
}
