use std::path::PathBuf;

use clap::{ArgAction, Parser};
use wpharvest_core::ExportOptions;

/// Export published WordPress articles to CSV through the public REST API.
#[derive(Debug, Parser)]
#[command(name = "wpharvest", version)]
#[command(about = "Export published WordPress articles to CSV", long_about = None)]
pub struct Cli {
    /// Site URL including the scheme, e.g. https://www.example.com
    pub site_url: String,

    /// Do not fetch categories or add a `categories` column.
    #[arg(long)]
    pub no_categories: bool,

    /// Do not fetch tags or add a `tags` column.
    #[arg(long)]
    pub no_tags: bool,

    /// Directory the CSV is written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// CSV file name; overrides the config file.
    #[arg(long)]
    pub output_file: Option<String>,

    /// RON file with timeout, retry and page-size overrides.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the log to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Suppress progress lines.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            include_categories: !self.no_categories,
            include_tags: !self.no_tags,
        }
    }
}
