use crate::results::{CrawlOutcome, DisplayedListing};

const TITLE: &str = "\x1b[1;36m";
const DATE: &str = "\x1b[0;33m";
const LINK: &str = "\x1b[0;34m";
const DESCRIPTION: &str = "\x1b[0;37m";
const RESET: &str = "\x1b[0m";

/// Terminal styling for the listing stream
#[derive(Debug, Clone, Copy)]
pub struct Style {
    colored: bool,
}

impl Style {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colored {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Three lines per listing plus a blank separator
    pub fn render_listing(&self, shown: &DisplayedListing) -> String {
        format!(
            "[{}] {} ({})\n{}\n{}\n",
            shown.index,
            self.paint(TITLE, &shown.listing.title),
            self.paint(DATE, &shown.listing.posted_date),
            self.paint(LINK, &format!("→ {}", shown.listing.detail_url)),
            self.paint(DESCRIPTION, &shown.snippet),
        )
    }
}

/// Closing line for a crawl
pub fn outcome_message(outcome: &CrawlOutcome) -> String {
    match outcome {
        CrawlOutcome::Completed { shown } => {
            format!("Displayed {} job(s). Done as requested.", shown)
        }
        CrawlOutcome::Exhausted { shown } => {
            format!("No more pages. Crawl complete after {} job(s).", shown)
        }
        CrawlOutcome::Cancelled { shown } => {
            format!("\nDetected Ctrl+C, stopping crawl cleanly after {} job(s).", shown)
        }
        CrawlOutcome::Failed { shown, error } => {
            format!("Crawl stopped after {} job(s): {}", shown, error)
        }
    }
}
