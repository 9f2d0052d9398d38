//! Types for the inkpost-markdown public API.
use serde::{Deserialize, Serialize};

/// A heading encountered while rendering a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Heading text (inline content, no markup).
  pub text:  String,
  /// Heading level (1-6).
  pub level: u8,
  /// Generated anchor id, unique within the document.
  pub id:    String,
}

/// Result of rendering one markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownResult {
  /// Rendered HTML output.
  pub html: String,

  /// Headings in document order (for navigation and the ToC builder).
  pub headings: Vec<Heading>,

  /// Title of the document, if found (first H1).
  pub title: Option<String>,
}

impl MarkdownResult {
  /// An empty result, used as the recovery fallback.
  #[must_use]
  pub const fn empty() -> Self {
    Self {
      html:     String::new(),
      headings: Vec::new(),
      title:    None,
    }
  }
}
