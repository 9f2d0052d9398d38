//! Trait-based syntax highlighting with a pluggable backend.
//!
//! The pipeline talks to highlighting exclusively through
//! [`SyntaxManager`]; the concrete backend (currently Syntect with
//! two-face extensions) never leaks into the processor or the widget
//! builder.

pub mod error;
pub mod types;

mod syntect;

pub use error::{SyntaxError, SyntaxResult};
pub use syntect::{SyntectHighlighter, create_syntect_manager};
pub use types::{Highlighter, SyntaxConfig, SyntaxManager};

/// Create the default syntax manager.
///
/// The backend's syntax and theme sets are loaded lazily into
/// process-wide statics, so calling this repeatedly is cheap after the
/// first use.
#[must_use]
pub fn create_default_manager(theme: Option<&str>) -> SyntaxManager {
  create_syntect_manager(theme)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::language::Language;

  #[test]
  fn syntect_highlighter_reports_capabilities() {
    let highlighter = SyntectHighlighter::default();
    assert_eq!(highlighter.name(), "Syntect");
    assert!(!highlighter.supported_languages().is_empty());
    assert!(!highlighter.available_themes().is_empty());
  }

  #[test]
  fn highlight_simple_snippet() {
    let highlighter = SyntectHighlighter::default();
    let result = highlighter.highlight("const x = 1;", "javascript", None);
    let html = result.expect("failed to highlight code");
    assert!(html.contains("const"));
  }

  #[test]
  fn manager_highlights_every_allow_listed_language() {
    let manager = create_default_manager(None);
    for lang in Language::ALL {
      let result =
        manager.highlight_code("echo hi", lang.highlighter_token(), None);
      assert!(
        result.is_ok(),
        "language {:?} failed: {:?}",
        lang,
        result.err()
      );
    }
  }

  #[test]
  fn unknown_language_falls_back_to_plain_text() {
    let manager = create_default_manager(None);
    let result = manager.highlight_code("whatever", "no-such-language", None);
    assert!(result.is_ok());
  }

  #[test]
  fn every_advertised_theme_resolves() {
    let highlighter = SyntectHighlighter::default();
    for theme in highlighter.available_themes() {
      let result =
        highlighter.highlight("let x = 1;", "javascript", Some(&theme));
      assert!(result.is_ok(), "theme {theme} failed: {:?}", result.err());
    }
  }

  #[test]
  fn missing_theme_degrades_to_default() {
    let highlighter = SyntectHighlighter::new(Some("NoSuchTheme".to_string()));
    let result = highlighter.highlight("let x = 1;", "javascript", None);
    assert!(result.is_ok());
  }
}
