#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use std::fs;

use inkpost::build::{BuildConfig, run};

fn write_post(dir: &std::path::Path, slug: &str, content: &str) {
  fs::write(dir.join(format!("{slug}.md")), content).expect("write post");
}

fn sample_config(root: &std::path::Path) -> BuildConfig {
  BuildConfig {
    posts_dir:  root.join("posts"),
    output_dir: root.join("dist"),
    locales:    vec!["en".to_string()],
    base_url:   "https://example.com".to_string(),
    theme:      None,
  }
}

#[test]
fn build_renders_pages_toc_and_sitemap() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let en = tmp.path().join("posts/en");
  fs::create_dir_all(&en).expect("posts dir");

  write_post(
    &en,
    "hello-world",
    "---\ntitle: Hello World\ncreatedAt: 05-03-2024\n---\n\n# Hello World\n\n## Usage\n\n```bash\nls -la\n```\n",
  );
  write_post(
    &en,
    "plain-post",
    "---\ncreatedAt: 01-01-2024\n---\n\n# Plain\n\nNo code here.\n",
  );
  // Missing createdAt: skipped at load time, absent from every output.
  write_post(&en, "broken", "---\ntitle: Broken\n---\n\n# Broken\n");

  run(&sample_config(tmp.path())).expect("build succeeds");

  let pages = tmp.path().join("dist/en/posts");

  let hello = fs::read_to_string(pages.join("hello-world.html"))
    .expect("page written");
  assert!(hello.contains(r#"<h1 id="hello-world">"#));
  assert!(hello.contains(r#"<div class="code-block">"#));
  assert!(hello.contains("function copyCodeBlock"));

  let plain =
    fs::read_to_string(pages.join("plain-post.html")).expect("page written");
  assert!(!plain.contains("function copyCodeBlock"));

  let toc = fs::read_to_string(pages.join("hello-world.toc.json"))
    .expect("toc written");
  assert!(toc.contains(r##""href": "#usage""##));

  assert!(!pages.join("broken.html").exists());

  let sitemap = fs::read_to_string(tmp.path().join("dist/sitemap.xml"))
    .expect("sitemap written");
  assert!(
    sitemap.contains("<loc>https://example.com/en/posts/hello-world</loc>")
  );
  assert!(sitemap.contains("<lastmod>2024-03-05</lastmod>"));
  assert!(!sitemap.contains("broken"));
}

#[test]
fn build_fails_for_missing_locale_directory() {
  let tmp = tempfile::tempdir().expect("tempdir");
  fs::create_dir_all(tmp.path().join("posts/en")).expect("posts dir");

  let config = BuildConfig {
    locales: vec!["pl".to_string()],
    ..sample_config(tmp.path())
  };
  assert!(run(&config).is_err());
}
