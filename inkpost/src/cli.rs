use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for inkpost
#[derive(Parser, Debug)]
#[command(author, version, about = "inkpost: a static blog generator")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

/// All supported subcommands for the inkpost CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render every post to HTML, with ToC data and a sitemap.
  Build {
    /// Directory containing one subdirectory of markdown posts per
    /// locale.
    #[arg(short, long, default_value = "posts")]
    posts_dir: PathBuf,

    /// Output directory for generated pages.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Locale(s) to build (can be specified multiple times).
    #[arg(short, long = "locale", default_value = "en")]
    locales: Vec<String>,

    /// Site base URL used for sitemap entries, without a trailing
    /// slash.
    #[arg(short, long, default_value = "https://grzegorzdubiel.com")]
    base_url: String,

    /// Syntax highlighting theme name.
    #[arg(short, long)]
    theme: Option<String>,

    /// Number of threads to use for parallel processing.
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,
  },
}

impl Cli {
  /// Parse arguments from the process environment.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
