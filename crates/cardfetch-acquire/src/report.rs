use std::fmt;

/// Something the operator should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    Downloaded { filename: String },
    DownloadFailed { url: String, detail: String },
    PageFailed { detail: String },
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunEvent::Downloaded { filename } => write!(f, "Downloaded: {filename}"),
            RunEvent::DownloadFailed { url, detail } => {
                write!(f, "Error downloading {url}: {detail}")
            }
            RunEvent::PageFailed { detail } => write!(f, "Error fetching webpage: {detail}"),
        }
    }
}

pub trait Reporter {
    fn report(&mut self, event: RunEvent);
}

/// Collects events in order.
impl Reporter for Vec<RunEvent> {
    fn report(&mut self, event: RunEvent) {
        self.push(event);
    }
}
