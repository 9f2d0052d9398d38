//! Type definitions for the markdown processor.
//!
//! Contains the configuration options (`MarkdownOptions`), the processor
//! struct itself, and the options builder.
//!
//! # Examples
//!
//! ```
//! use inkpost_markdown::{MarkdownOptions, MarkdownProcessor};
//!
//! let options = MarkdownOptions {
//!   gfm: true,
//!   highlight_code: true,
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! ```

use std::sync::Arc;

use crate::syntax::SyntaxManager;

/// Options for configuring the markdown processor.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown (GFM) extensions.
  pub gfm: bool,

  /// Enable syntax highlighting for code blocks.
  pub highlight_code: bool,

  /// Optional: custom syntax highlighting theme name.
  pub highlight_theme: Option<String>,

  /// Append a `#` deep-link anchor after each heading's text.
  pub heading_anchors: bool,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      gfm:             true,
      highlight_code:  true,
      highlight_theme: None,
      heading_anchors: true,
    }
  }
}

/// Main markdown processor.
///
/// Can be cheaply cloned since the syntax manager lives behind an `Arc`;
/// one processor is meant to be built per batch and shared across
/// documents.
#[derive(Clone)]
pub struct MarkdownProcessor {
  pub(crate) options:        MarkdownOptions,
  pub(crate) syntax_manager: Option<Arc<SyntaxManager>>,
}

/// Builder for constructing `MarkdownOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptionsBuilder {
  options: MarkdownOptions,
}

impl MarkdownOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Enable or disable syntax highlighting.
  #[must_use]
  pub const fn highlight_code(mut self, enabled: bool) -> Self {
    self.options.highlight_code = enabled;
    self
  }

  /// Set the syntax highlighting theme.
  #[must_use]
  pub fn highlight_theme<S: Into<String>>(mut self, theme: Option<S>) -> Self {
    self.options.highlight_theme = theme.map(Into::into);
    self
  }

  /// Enable or disable heading deep-link anchors.
  #[must_use]
  pub const fn heading_anchors(mut self, enabled: bool) -> Self {
    self.options.heading_anchors = enabled;
    self
  }

  /// Build the final `MarkdownOptions`.
  #[must_use]
  pub fn build(self) -> MarkdownOptions {
    self.options
  }
}
