//! Core implementation of the markdown processor.
//!
//! The pipeline runs in a fixed stage order:
//!
//! 1. comrak parse (raw HTML passthrough enabled)
//! 2. comrak HTML serialization, re-parsed into a kuchiki DOM
//! 3. heading slug pass (stable, de-duplicated `id` attributes)
//! 4. heading anchor pass (`#` deep-link appended after the text)
//! 5. code fence rewrite pass (highlighted, copyable widgets)
//! 6. fragment serialization
//!
//! Stages 3-5 must keep this order: the fence rewrite must not disturb
//! ids assigned in stage 3, and the anchor must point at the final id.

use std::collections::HashSet;

use comrak::{Arena, options::Options, parse_document};
use kuchikikiki::NodeRef;
use markup5ever::local_name;
use tendril::TendrilSink as _;

use super::types::{MarkdownOptions, MarkdownProcessor};
use crate::{
  syntax::create_default_manager,
  types::{Heading, MarkdownResult},
  utils::slugify,
  widget::{IdGen, RandomIdGen},
};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  ///
  /// The syntax manager is constructed here, once, so a processor shared
  /// across a batch registers languages and the theme a single time
  /// rather than per document or per code block.
  #[must_use]
  pub fn new(options: MarkdownOptions) -> Self {
    let syntax_manager = if options.highlight_code {
      Some(std::sync::Arc::new(create_default_manager(
        options.highlight_theme.as_deref(),
      )))
    } else {
      None
    };

    Self {
      options,
      syntax_manager,
    }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render markdown to HTML with randomly generated widget ids.
  #[must_use]
  pub fn render(&self, markdown: &str) -> MarkdownResult {
    self.render_with_ids(markdown, &mut RandomIdGen)
  }

  /// Render markdown to HTML using the supplied id generator.
  ///
  /// With a deterministic generator the output is byte-identical across
  /// runs on the same input.
  #[must_use]
  pub fn render_with_ids(
    &self,
    markdown: &str,
    ids: &mut dyn IdGen,
  ) -> MarkdownResult {
    let html = self.convert_to_html(markdown);
    self.postprocess(&html, ids)
  }

  /// Convert markdown to an HTML string using comrak.
  fn convert_to_html(&self, content: &str) -> String {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, content, &options);

    let mut html_output = String::new();
    comrak::format_html(root, &options, &mut html_output).unwrap_or_default();
    html_output
  }

  /// Build comrak options from `MarkdownOptions`.
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.footnotes = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    // Embedded HTML in post sources is expected; pass it through.
    options.render.r#unsafe = true;
    options.extension.header_id_prefix = None;
    options
  }

  /// Run the DOM passes over the comrak output and serialize.
  fn postprocess(&self, html: &str, ids: &mut dyn IdGen) -> MarkdownResult {
    let document = kuchikikiki::parse_html().one(html);

    let (headings, title) = self.assign_heading_ids(&document);

    if self.options.heading_anchors {
      Self::append_heading_anchors(&document, &headings);
    }

    if let Some(manager) = self.syntax_manager.as_deref() {
      super::codeblock::rewrite_code_fences(&document, manager, ids);
    }

    MarkdownResult {
      html: serialize_fragment(&document),
      headings,
      title,
    }
  }

  /// Slug pass: give every heading a stable, unique `id` attribute.
  ///
  /// An id already present on a heading (e.g. from embedded HTML) is
  /// kept and registered so generated slugs never collide with it.
  fn assign_heading_ids(
    &self,
    document: &NodeRef,
  ) -> (Vec<Heading>, Option<String>) {
    let mut headings = Vec::new();
    let mut title = None;
    let mut used: HashSet<String> = HashSet::new();

    for node in heading_nodes(document, 6) {
      let Some(element) = node.as_element() else {
        continue;
      };
      let level = heading_level(element.name.local.as_ref());
      let text = node.text_contents().trim().to_string();

      let existing = element
        .attributes
        .borrow()
        .get(local_name!("id"))
        .map(std::string::ToString::to_string);

      let id = match existing {
        Some(id) => {
          used.insert(id.clone());
          id
        },
        None => {
          let base = match slugify(&text) {
            s if s.is_empty() => "section".to_string(),
            s => s,
          };
          let mut candidate = base.clone();
          let mut n = 0usize;
          while used.contains(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
          }
          used.insert(candidate.clone());
          element
            .attributes
            .borrow_mut()
            .insert(local_name!("id"), candidate.clone());
          candidate
        },
      };

      if level == 1 && title.is_none() && !text.is_empty() {
        title = Some(text.clone());
      }

      headings.push(Heading {
        text,
        level,
        id,
      });
    }

    (headings, title)
  }

  /// Anchor pass: append a `#` deep-link after each heading's content.
  fn append_heading_anchors(document: &NodeRef, headings: &[Heading]) {
    let nodes: Vec<NodeRef> = heading_nodes(document, 6);

    for (node, heading) in nodes.iter().zip(headings) {
      let anchor = NodeRef::new_element(
        markup5ever::QualName::new(
          None,
          markup5ever::ns!(html),
          local_name!("a"),
        ),
        vec![
          (
            kuchikikiki::ExpandedName::new("", "href"),
            kuchikikiki::Attribute {
              prefix: None,
              value:  format!("#{}", heading.id),
            },
          ),
          (
            kuchikikiki::ExpandedName::new("", "class"),
            kuchikikiki::Attribute {
              prefix: None,
              value:  "heading-anchor".into(),
            },
          ),
        ],
      );
      anchor.append(NodeRef::new_text("#"));
      node.append(anchor);
    }
  }
}

/// Collect heading elements `h1..h{max_level}` in document order.
pub(crate) fn heading_nodes(document: &NodeRef, max_level: u8) -> Vec<NodeRef> {
  let selector = match max_level {
    5 => "h1, h2, h3, h4, h5",
    _ => "h1, h2, h3, h4, h5, h6",
  };
  document.select(selector).map_or_else(
    |()| Vec::new(),
    |matches| matches.map(|m| m.as_node().clone()).collect(),
  )
}

/// Parse the numeric suffix of a heading tag name.
pub(crate) fn heading_level(tag: &str) -> u8 {
  tag
    .strip_prefix('h')
    .and_then(|d| d.parse::<u8>().ok())
    .unwrap_or(1)
}

/// Serialize the children of `body`, giving fragment-stable output.
pub(crate) fn serialize_fragment(document: &NodeRef) -> String {
  let mut buf = Vec::new();
  if let Ok(body) = document.select_first("body") {
    for child in body.as_node().children() {
      child.serialize(&mut buf).ok();
    }
  }
  String::from_utf8(buf).unwrap_or_default()
}
