//! Table-of-contents extraction from rendered HTML.
//!
//! Operates on the final HTML string, not the pipeline's internal DOM:
//! the re-parse keeps the builder usable on any rendered post, including
//! ones coming out of a cache.

use kuchikikiki::NodeRef;
use serde::{Deserialize, Serialize};
use tendril::TendrilSink as _;

use crate::processor::core::{heading_level, heading_nodes};

/// A heading in the flat, depth-ordered scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocEntry {
  /// Heading text.
  pub title: String,
  /// Heading level (1-5).
  pub level: u8,
  /// Fragment link, `#` + the heading's id.
  pub href:  String,
}

/// A node in the nested outline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocNode {
  pub title:    String,
  pub href:     String,
  pub level:    u8,
  pub children: Vec<TocNode>,
}

impl TocNode {
  fn from_entry(entry: &TocEntry) -> Self {
    Self {
      title:    entry.title.clone(),
      href:     entry.href.clone(),
      level:    entry.level,
      children: Vec::new(),
    }
  }

  /// Number of nodes in this subtree, itself included.
  #[must_use]
  pub fn count(&self) -> usize {
    1 + self.children.iter().map(Self::count).sum::<usize>()
  }
}

/// Flat list and nested outline of a document's headings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TableOfContents {
  pub list: Vec<TocEntry>,
  pub tree: Vec<TocNode>,
}

impl TableOfContents {
  /// Build a table of contents from rendered HTML.
  ///
  /// Collects `h1..h5` elements whose first direct child is a text node;
  /// headings without one (e.g. fully wrapped in inline markup) are
  /// skipped from both outputs. A heading without an `id` yields the
  /// degenerate href `#`.
  #[must_use]
  pub fn from_html(html: &str) -> Self {
    let document = kuchikikiki::parse_html().one(html);
    let list = collect_headings(&document);
    let tree = build_tree(&list);
    Self {
      list,
      tree,
    }
  }

  /// Total node count of the nested tree.
  #[must_use]
  pub fn tree_len(&self) -> usize {
    self.tree.iter().map(TocNode::count).sum()
  }
}

/// Flat scan: every `h1..h5` with an extractable title, document order.
fn collect_headings(document: &NodeRef) -> Vec<TocEntry> {
  let mut entries = Vec::new();

  for node in heading_nodes(document, 5) {
    let Some(element) = node.as_element() else {
      continue;
    };

    // First direct text child only; the anchor glyph lives inside its
    // own <a> element and never leaks into the title.
    let title = node
      .children()
      .find_map(|child| child.as_text().map(|t| t.borrow().clone()))
      .map(|t| t.trim().to_string())
      .filter(|t| !t.is_empty());
    let Some(title) = title else {
      continue;
    };

    let level = heading_level(element.name.local.as_ref());
    let href = element.attributes.borrow().get("id").map_or_else(
      || "#".to_string(),
      |id| format!("#{id}"),
    );

    entries.push(TocEntry {
      title,
      level,
      href,
    });
  }

  entries
}

/// Fold the flat list into a nested outline.
///
/// A level-1 heading starts a new root. Any other heading descends the
/// most recent root's last-child chain looking for a parent exactly one
/// level up; if none exists (a heading that skips levels, or a document
/// that opens below level 1) the heading is dropped from the tree while
/// remaining in the flat list.
fn build_tree(entries: &[TocEntry]) -> Vec<TocNode> {
  let mut roots: Vec<TocNode> = Vec::new();

  for entry in entries {
    let node = TocNode::from_entry(entry);
    if entry.level == 1 {
      roots.push(node);
    } else if let Some(last) = roots.last_mut() {
      push_to_children(last, node);
    }
  }

  roots
}

fn push_to_children(tree: &mut TocNode, node: TocNode) {
  if node.level == tree.level + 1 {
    tree.children.push(node);
    return;
  }
  if let Some(last) = tree.children.last_mut() {
    push_to_children(last, node);
  }
}

#[cfg(test)]
mod tests {
  use super::TableOfContents;

  #[test]
  fn flat_and_nested_from_simple_document() {
    let html = r##"<h1 id="title">Title</h1><p>x</p><h2 id="sub">Sub</h2>"##;
    let toc = TableOfContents::from_html(html);

    assert_eq!(toc.list.len(), 2);
    assert_eq!(toc.list[0].title, "Title");
    assert_eq!(toc.list[0].level, 1);
    assert_eq!(toc.list[0].href, "#title");
    assert_eq!(toc.list[1].title, "Sub");
    assert_eq!(toc.list[1].href, "#sub");

    assert_eq!(toc.tree.len(), 1);
    assert_eq!(toc.tree[0].title, "Title");
    assert_eq!(toc.tree[0].children.len(), 1);
    assert_eq!(toc.tree[0].children[0].title, "Sub");
  }

  #[test]
  fn heading_without_id_gets_bare_hash_href() {
    let toc = TableOfContents::from_html("<h1>Untagged</h1>");
    assert_eq!(toc.list[0].href, "#");
  }

  #[test]
  fn heading_without_direct_text_is_skipped_entirely() {
    let toc =
      TableOfContents::from_html(r#"<h2 id="x"><em>wrapped</em></h2>"#);
    assert!(toc.list.is_empty());
    assert!(toc.tree.is_empty());
  }

  #[test]
  fn level_skips_drop_from_tree_but_not_list() {
    let html = r##"<h1 id="a">A</h1><h4 id="d">D</h4>"##;
    let toc = TableOfContents::from_html(html);
    assert_eq!(toc.list.len(), 2);
    assert_eq!(toc.tree_len(), 1);
    assert!(toc.tree[0].children.is_empty());
  }

  #[test]
  fn orphan_subheading_before_any_root_is_dropped_from_tree() {
    let html = r##"<h2 id="lonely">Lonely</h2><h1 id="a">A</h1>"##;
    let toc = TableOfContents::from_html(html);
    assert_eq!(toc.list.len(), 2);
    assert_eq!(toc.tree.len(), 1);
    assert_eq!(toc.tree[0].title, "A");
  }

  #[test]
  fn deep_nesting_follows_last_child_chain() {
    let html = r##"<h1 id="a">A</h1><h2 id="b">B</h2><h3 id="c">C</h3><h2 id="d">D</h2><h3 id="e">E</h3>"##;
    let toc = TableOfContents::from_html(html);
    assert_eq!(toc.tree.len(), 1);
    let root = &toc.tree[0];
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].children[0].title, "C");
    assert_eq!(root.children[1].children[0].title, "E");
  }

  #[test]
  fn flat_list_never_shorter_than_tree() {
    let html = r##"<h1 id="a">A</h1><h3 id="c">C</h3><h2 id="b">B</h2>"##;
    let toc = TableOfContents::from_html(html);
    assert!(toc.list.len() >= toc.tree_len());
  }

  #[test]
  fn h6_is_ignored() {
    let toc = TableOfContents::from_html(r#"<h6 id="x">Deep</h6>"#);
    assert!(toc.list.is_empty());
  }
}
