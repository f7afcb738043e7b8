use cardfetch_model::FilenamePolicy;
use std::path::PathBuf;
use std::time::Duration;

/// Listing page scraped when no URL is given.
pub const DEFAULT_PAGE_URL: &str = "https://pkmncards.com/set/prismatic-evolutions/";

/// Output subdirectory created under the base directory.
pub const DEFAULT_DIR_NAME: &str = "pokemon_cards";

/// Desktop browser identity; the source site rejects obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout covering connect, headers and body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed delays that throttle requests to the source server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Waited before every entry, including the first and failed ones.
    pub before_entry: Duration,
    /// Waited after a successful write only.
    pub after_download: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            before_entry: Duration::from_secs(2),
            after_download: Duration::from_millis(500),
        }
    }
}

impl Pacing {
    /// No delays at all.
    pub fn none() -> Self {
        Self {
            before_entry: Duration::ZERO,
            after_download: Duration::ZERO,
        }
    }
}

/// Everything one run needs; `Default` reproduces the stock scrape.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub page_url: String,
    /// Directory the output folder is created in. Relative paths resolve
    /// against the working directory at the time of the run.
    pub base_dir: PathBuf,
    pub dir_name: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub pacing: Pacing,
    pub filename: FilenamePolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            base_dir: PathBuf::from("."),
            dir_name: DEFAULT_DIR_NAME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            pacing: Pacing::default(),
            filename: FilenamePolicy::default(),
        }
    }
}
