//! The `build` subcommand: render every post for every locale.

use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context as _, Result};
use inkpost_markdown::{
  COPY_SCRIPT, MarkdownOptions, MarkdownProcessor, RandomIdGen,
  TableOfContents, needs_copy_script, render_with_recovery,
};
use inkpost_posts::{Post, PostStore, sitemap};
use log::{error, info};
use rayon::prelude::*;

/// Resolved settings for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
  pub posts_dir:  PathBuf,
  pub output_dir: PathBuf,
  pub locales:    Vec<String>,
  pub base_url:   String,
  pub theme:      Option<String>,
}

/// Run a full build: all locales, all posts, plus the sitemap.
///
/// The processor (and with it the highlighter's syntax and theme sets)
/// is constructed once, before the parallel fan-out. A post that fails
/// to write is logged and skipped; it does not abort the batch.
pub fn run(config: &BuildConfig) -> Result<()> {
  info!("Starting build...");
  fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
    format!(
      "Failed to create output directory: {}",
      config.output_dir.display()
    )
  })?;

  let processor = MarkdownProcessor::new(MarkdownOptions {
    highlight_theme: config.theme.clone(),
    ..Default::default()
  });

  let mut sitemap_entries = Vec::new();

  for locale in &config.locales {
    let store =
      PostStore::load(&config.posts_dir, locale).wrap_err_with(|| {
        format!("Failed to load posts for locale `{locale}`")
      })?;

    let pages_dir = config.output_dir.join(locale).join("posts");
    fs::create_dir_all(&pages_dir)?;

    let written = store
      .posts()
      .par_iter()
      .filter(|post| match render_post(&processor, post, &pages_dir) {
        Ok(()) => true,
        Err(err) => {
          error!("Failed to render {} ({locale}): {err}", post.slug);
          false
        },
      })
      .count();

    info!("Rendered {written}/{} posts for locale `{locale}`", store.len());
    sitemap_entries.extend(sitemap::post_entries(
      &config.base_url,
      locale,
      store.posts(),
    ));
  }

  let sitemap_path = config.output_dir.join("sitemap.xml");
  fs::write(&sitemap_path, sitemap::render(&sitemap_entries))
    .wrap_err_with(|| {
      format!("Failed to write sitemap: {}", sitemap_path.display())
    })?;

  info!("Build finished: {}", config.output_dir.display());
  Ok(())
}

/// Render one post: `<slug>.html` plus `<slug>.toc.json`.
fn render_post(
  processor: &MarkdownProcessor,
  post: &Post,
  pages_dir: &Path,
) -> Result<()> {
  let mut ids = RandomIdGen;
  let result = render_with_recovery(processor, &post.body, &mut ids);

  let toc = TableOfContents::from_html(&result.html);
  let toc_path = pages_dir.join(format!("{}.toc.json", post.slug));
  fs::write(&toc_path, serde_json::to_string_pretty(&toc)?)?;

  let mut html = result.html;
  if needs_copy_script(&html) {
    html.push_str(COPY_SCRIPT);
  }
  let page_path = pages_dir.join(format!("{}.html", post.slug));
  fs::write(&page_path, html)?;

  Ok(())
}
