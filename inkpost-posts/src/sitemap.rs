//! Sitemap generation from the post listing.
//!
//! A pure downstream consumer of the store: only slugs and creation
//! dates flow in, XML flows out.

use std::fmt::Write as _;

use crate::store::Post;

/// One `<url>` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
  pub loc:     String,
  /// `YYYY-MM-DD`, per the sitemap protocol.
  pub lastmod: String,
}

/// Canonical per-locale URLs for a batch of posts.
///
/// `base_url` must not end with a slash; entries come out in the same
/// order as `posts`.
#[must_use]
pub fn post_entries(
  base_url: &str,
  locale: &str,
  posts: &[Post],
) -> Vec<SitemapEntry> {
  posts
    .iter()
    .map(|post| SitemapEntry {
      loc:     format!("{base_url}/{locale}/posts/{}", post.slug),
      lastmod: post.meta.created_at.to_string(),
    })
    .collect()
}

/// Render entries as a sitemap `<urlset>` document.
#[must_use]
pub fn render(entries: &[SitemapEntry]) -> String {
  let mut xml = String::with_capacity(128 + entries.len() * 96);
  xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
  xml.push('\n');
  xml.push_str(
    r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
  );
  xml.push('\n');

  for entry in entries {
    let loc = html_escape::encode_quoted_attribute(&entry.loc);
    let _ = writeln!(
      xml,
      "  <url><loc>{loc}</loc><lastmod>{}</lastmod></url>",
      entry.lastmod
    );
  }

  xml.push_str("</urlset>\n");
  xml
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Fine in tests")]
mod tests {
  use super::{post_entries, render};
  use crate::{meta::PostMeta, store::Post};

  fn post(slug: &str, date: &str) -> Post {
    let front = format!("createdAt: {date}");
    Post {
      slug:    slug.to_string(),
      meta:    PostMeta::parse(&front, slug).unwrap(),
      body:    String::new(),
      excerpt: String::new(),
    }
  }

  #[test]
  fn entries_use_locale_and_slug() {
    let posts = vec![post("first-post", "05-03-2024")];
    let entries = post_entries("https://example.com", "en", &posts);
    assert_eq!(entries[0].loc, "https://example.com/en/posts/first-post");
    assert_eq!(entries[0].lastmod, "2024-03-05");
  }

  #[test]
  fn renders_urlset_document() {
    let posts = vec![post("a", "01-01-2024"), post("b", "02-01-2024")];
    let entries = post_entries("https://example.com", "pl", &posts);
    let xml = render(&entries);

    assert!(xml.starts_with(r#"<?xml version="1.0""#));
    assert!(xml.contains("<loc>https://example.com/pl/posts/a</loc>"));
    assert!(xml.contains("<lastmod>2024-01-02</lastmod>"));
    assert!(xml.trim_end().ends_with("</urlset>"));
  }

  #[test]
  fn ampersands_in_base_url_are_escaped() {
    let posts = vec![post("x", "01-01-2024")];
    let entries = post_entries("https://example.com/?a=1&b=2", "en", &posts);
    let xml = render(&entries);
    assert!(xml.contains("&amp;b=2"));
  }
}
