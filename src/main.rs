use clap::Parser;
use jobfind::catalog::CatalogEntry;
use jobfind::display::{Style, outcome_message};
use jobfind::{CrawlError, CrawlEvent, CrawlOutcome, JobBoard, SearchQuery, Session, SiteConfig, prompt};
use std::io::{self, Write};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load the site configuration
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let session = match JobBoard::new(config).build() {
        Ok(session) => session,
        Err(e) => {
            ::log::error!("Failed to set up the session: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let cancel = cancel_on_ctrl_c();

    // Pick the search from the menus unless both slugs were given
    let query = match select_query(&session, &args, &cancel).await {
        Ok(query) => query,
        Err(code) => return code,
    };

    let start_url = match session.start_url(&query) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("\nCombined search URL:\n{}", start_url);

    // Count listings across every result page
    let summary = session
        .count(start_url.clone(), &cancel, |progress| {
            print!(
                "\rCounting jobs... Page {}, found {} jobs so far.",
                progress.page, progress.total
            );
            let _ = io::stdout().flush();
        })
        .await;
    let total = match summary {
        Ok(summary) => {
            println!(
                "\rTotal jobs found after counting {} page(s): {}          ",
                summary.pages, summary.total
            );
            summary.total
        }
        Err(CrawlError::Cancelled) => {
            println!("\nDetected Ctrl+C, stopping cleanly.");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            println!();
            eprintln!("Counting failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if total == 0 {
        println!("No jobs found for this search.");
        return ExitCode::SUCCESS;
    }

    let limit = match args.limit {
        Some(limit) => limit.min(total),
        None => match ask(&cancel, move |input, output| prompt::ask_limit(total, input, output)).await {
            Ok(limit) => limit,
            Err(code) => return code,
        },
    };

    // Start crawling
    let style = Style::new(!args.plain);
    let mut events = session.crawl(start_url, limit, cancel);
    let mut exit = ExitCode::SUCCESS;

    // Print listings as they come in
    while let Some(event) = events.recv().await {
        match event {
            CrawlEvent::PageStarted { number, url } => {
                println!("\n--- Page {} ---", number);
                ::log::info!("Fetching {}", url);
            }
            CrawlEvent::Listing(shown) => println!("{}", style.render_listing(&shown)),
            CrawlEvent::Finished(outcome) => {
                println!("{}", outcome_message(&outcome));
                if let CrawlOutcome::Failed { .. } = outcome {
                    exit = ExitCode::FAILURE;
                }
            }
        }
    }

    exit
}

fn load_config(args: &Args) -> Result<SiteConfig, CrawlError> {
    let config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            SiteConfig::from_file(path)?
        }
        None => SiteConfig::default(),
    };
    Ok(config.with_env_overrides())
}

/// Cancels the returned token on the first Ctrl+C; a second one exits at once
fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ::log::info!("Interrupt received, cancelling");
            trigger.cancel();
        }
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });

    cancel
}

async fn select_query(
    session: &Session,
    args: &Args,
    cancel: &CancellationToken,
) -> Result<SearchQuery, ExitCode> {
    if let (Some(specialty), Some(region)) = (&args.specialty, &args.region) {
        return Ok(SearchQuery::new(specialty.as_str(), region.as_str()));
    }

    println!("Fetching specialties...");
    let specialties = match session.specialties().await {
        Ok(entries) => entries,
        Err(e) => {
            ::log::error!("Failed to retrieve specialties: {}", e);
            println!("Could not retrieve specialties. Exiting.");
            return Err(ExitCode::FAILURE);
        }
    };
    let specialty = pick(cancel, "Available Specialties", "a specialty", specialties).await?;

    println!("Fetching regions...");
    let regions = match session.regions().await {
        Ok(entries) => entries,
        Err(e) => {
            ::log::error!("Failed to retrieve regions: {}", e);
            println!("Could not retrieve regions. Exiting.");
            return Err(ExitCode::FAILURE);
        }
    };
    let region = pick(cancel, "Available Regions", "a region", regions).await?;

    SearchQuery::from_links(&specialty.href, &region.href).map_err(|e| {
        println!("Error parsing the selected links: {}", e);
        ExitCode::FAILURE
    })
}

async fn pick(
    cancel: &CancellationToken,
    heading: &'static str,
    label: &'static str,
    mut entries: Vec<CatalogEntry>,
) -> Result<CatalogEntry, ExitCode> {
    let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
    let index = ask(cancel, move |input, output| {
        prompt::choose(heading, label, &names, input, output)
    })
    .await?;
    Ok(entries.swap_remove(index))
}

/// Runs a blocking prompt on stdin, giving up if the user interrupts
async fn ask<T, F>(cancel: &CancellationToken, prompt: F) -> Result<T, ExitCode>
where
    T: Send + 'static,
    F: FnOnce(&mut io::StdinLock<'static>, &mut io::Stdout) -> io::Result<T> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(move || prompt(&mut io::stdin().lock(), &mut io::stdout()));

    tokio::select! {
        joined = task => match joined {
            Ok(Ok(answer)) => Ok(answer),
            Ok(Err(e)) => {
                eprintln!("\nCould not read input: {}", e);
                Err(ExitCode::FAILURE)
            }
            Err(e) => {
                eprintln!("\nPrompt failed: {}", e);
                Err(ExitCode::FAILURE)
            }
        },
        _ = cancel.cancelled() => {
            println!("\nDetected Ctrl+C, exiting.");
            // The blocking stdin read cannot be interrupted; leave without waiting for it.
            std::process::exit(0);
        }
    }
}
