use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jobfind")]
#[command(about = "Browse job listings by specialty and region from the terminal")]
#[command(version)]
pub struct Args {
    /// JSON file overriding the site configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Specialty slug, skipping the specialty menu (e.g. Pliroforiki)
    #[arg(short, long, requires = "region")]
    pub specialty: Option<String>,

    /// Region slug, skipping the region menu (e.g. Attiki)
    #[arg(short, long, requires = "specialty")]
    pub region: Option<String>,

    /// Number of listings to show, skipping the prompt
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}
