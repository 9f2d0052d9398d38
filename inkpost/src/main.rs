use color_eyre::eyre::Result;
use log::LevelFilter;

mod build;
mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match cli.command {
    Commands::Build {
      posts_dir,
      output_dir,
      locales,
      base_url,
      theme,
      jobs,
    } => {
      let thread_count = jobs.unwrap_or_else(num_cpus::get);
      rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build_global()?;

      build::run(&build::BuildConfig {
        posts_dir,
        output_dir,
        locales,
        base_url,
        theme,
      })
    },
  }
}
