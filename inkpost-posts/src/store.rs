//! Loading and listing posts from a locale directory.

use std::{fs, path::Path};

use log::error;
use walkdir::WalkDir;

use crate::{
  error::PostResult,
  meta::{PostMeta, split_front_matter},
};

/// Maximum excerpt length before the word-boundary cut.
const EXCERPT_LEN: usize = 200;

/// A fully loaded post: metadata, markdown body, and listing excerpt.
#[derive(Debug, Clone)]
pub struct Post {
  pub slug:    String,
  pub meta:    PostMeta,
  pub body:    String,
  pub excerpt: String,
}

impl Post {
  /// Load one post from a markdown file.
  pub fn load(path: &Path, slug: &str) -> PostResult<Self> {
    let content = fs::read_to_string(path)?;
    let (front, body) = split_front_matter(&content)?;
    let meta = PostMeta::parse(front, slug)?;

    Ok(Self {
      slug: slug.to_string(),
      meta,
      excerpt: excerpt(body),
      body: body.to_string(),
    })
  }
}

/// All valid posts for one locale, newest first.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
  posts: Vec<Post>,
}

impl PostStore {
  /// Load every `.md` file under `posts_dir/<locale>/`.
  ///
  /// A post that fails to load (unreadable file, missing or malformed
  /// front matter) is logged and excluded; the remaining posts still
  /// load. Only an unreadable locale directory fails the whole call.
  pub fn load(posts_dir: &Path, locale: &str) -> PostResult<Self> {
    let locale_dir = posts_dir.join(locale);
    let mut posts = Vec::new();

    for entry in WalkDir::new(&locale_dir).min_depth(1).max_depth(1) {
      let entry = entry.map_err(|err| {
        std::io::Error::other(format!(
          "cannot read posts directory {}: {err}",
          locale_dir.display()
        ))
      })?;
      let path = entry.path();
      if path.extension().is_none_or(|ext| ext != "md") {
        continue;
      }
      let Some(slug) = path.file_stem().and_then(|stem| stem.to_str())
      else {
        continue;
      };

      match Post::load(path, slug) {
        Ok(post) => posts.push(post),
        Err(err) => {
          error!("Skipping post {slug} ({locale}): {err}");
        },
      }
    }

    // Newest first; slug keeps same-day posts in a stable order.
    posts.sort_by(|a, b| {
      b.meta
        .created_at
        .cmp(&a.meta.created_at)
        .then_with(|| a.slug.cmp(&b.slug))
    });

    Ok(Self { posts })
  }

  #[must_use]
  pub fn posts(&self) -> &[Post] {
    &self.posts
  }

  #[must_use]
  pub fn get(&self, slug: &str) -> Option<&Post> {
    self.posts.iter().find(|post| post.slug == slug)
  }

  pub fn slugs(&self) -> impl Iterator<Item = &str> {
    self.posts.iter().map(|post| post.slug.as_str())
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.posts.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.posts.is_empty()
  }
}

/// Short listing excerpt: body text minus headings, cut at a word
/// boundary near [`EXCERPT_LEN`] characters.
fn excerpt(body: &str) -> String {
  let prose: String = body
    .lines()
    .filter(|line| !line.trim_start().starts_with('#'))
    .collect::<Vec<_>>()
    .join(" ");
  let prose = prose.split_whitespace().collect::<Vec<_>>().join(" ");

  if prose.len() <= EXCERPT_LEN {
    return prose;
  }

  let mut end = EXCERPT_LEN;
  while !prose.is_char_boundary(end) {
    end -= 1;
  }
  let head = &prose[..end];
  let cut = head.rfind(' ').unwrap_or(end);
  format!("{}...", &head[..cut])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Fine in tests")]
mod tests {
  use std::fs;

  use super::{PostStore, excerpt};

  fn write_post(dir: &std::path::Path, slug: &str, front: &str, body: &str) {
    let content = format!("---\n{front}\n---\n\n{body}");
    fs::write(dir.join(format!("{slug}.md")), content).unwrap();
  }

  fn locale_dir(root: &std::path::Path) -> std::path::PathBuf {
    let dir = root.join("en");
    fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn loads_posts_newest_first() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = locale_dir(tmp.path());
    write_post(&dir, "older", "createdAt: 01-01-2023", "Old body.");
    write_post(&dir, "newer", "createdAt: 15-06-2024", "New body.");

    let store = PostStore::load(tmp.path(), "en").unwrap();
    let slugs: Vec<&str> = store.slugs().collect();
    assert_eq!(slugs, vec!["newer", "older"]);
  }

  #[test]
  fn invalid_posts_are_skipped_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = locale_dir(tmp.path());
    write_post(&dir, "good", "createdAt: 01-01-2024", "Fine.");
    write_post(&dir, "no-date", "title: Missing Date", "Broken.");
    write_post(&dir, "bad-date", "createdAt: 2024/01/01", "Broken.");
    fs::write(dir.join("notes.txt"), "not a post").unwrap();

    let store = PostStore::load(tmp.path(), "en").unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get("good").is_some());
    assert!(store.get("no-date").is_none());
  }

  #[test]
  fn missing_locale_directory_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(PostStore::load(tmp.path(), "pl").is_err());
  }

  #[test]
  fn post_carries_body_and_meta() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = locale_dir(tmp.path());
    write_post(
      &dir,
      "hello",
      "title: Hello\ncreatedAt: 02-02-2024\ntags: a, b",
      "# Hello\n\nParagraph text.",
    );

    let store = PostStore::load(tmp.path(), "en").unwrap();
    let post = store.get("hello").unwrap();
    assert_eq!(post.meta.title, "Hello");
    assert_eq!(post.meta.tags, vec!["a", "b"]);
    assert!(post.body.contains("Paragraph text."));
    assert_eq!(post.excerpt, "Paragraph text.");
  }

  #[test]
  fn excerpt_skips_headings_and_cuts_on_word_boundary() {
    let long = format!("# Title\n\n{}", "word ".repeat(60));
    let cut = excerpt(&long);
    assert!(cut.len() <= 204);
    assert!(cut.ends_with("word..."));
    assert!(!cut.contains('#'));
  }

  #[test]
  fn short_body_excerpt_has_no_ellipsis() {
    assert_eq!(excerpt("Just a short body."), "Just a short body.");
  }
}
