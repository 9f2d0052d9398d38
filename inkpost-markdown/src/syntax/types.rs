//! Core types and traits for syntax highlighting.

use super::error::{SyntaxError, SyntaxResult};

/// Trait for syntax highlighting backends.
///
/// Allows different highlighting implementations to be used
/// interchangeably. Implementations handle language lookup, theme
/// management, and the actual tokenization.
pub trait Highlighter: Send + Sync {
  /// Get the name of this highlighter backend
  fn name(&self) -> &'static str;

  /// Get a list of supported language tokens
  fn supported_languages(&self) -> Vec<String>;

  /// Get a list of available themes
  fn available_themes(&self) -> Vec<String>;

  /// Check if a language token is supported
  fn supports_language(&self, language: &str) -> bool {
    self
      .supported_languages()
      .iter()
      .any(|lang| lang.eq_ignore_ascii_case(language))
  }

  /// Check if a theme is available
  fn has_theme(&self, theme: &str) -> bool {
    self
      .available_themes()
      .iter()
      .any(|t| t.eq_ignore_ascii_case(theme))
  }

  /// Highlight code with the specified language token and theme.
  ///
  /// # Arguments
  ///
  /// * `code` - The source code to highlight
  /// * `language` - The language token (case-insensitive)
  /// * `theme` - The theme name (optional)
  ///
  /// # Returns
  ///
  /// Highlighted HTML string on success
  fn highlight(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String>;
}

/// Configuration for syntax highlighting.
///
/// Language aliasing lives in [`crate::language::Language`]; by the time
/// the manager is asked to highlight, the token is already allow-listed.
#[derive(Debug, Clone)]
pub struct SyntaxConfig {
  /// Default theme to use when none is specified
  pub default_theme: Option<String>,

  /// Whether to fall back to plain text for unsupported languages
  pub fallback_to_plain: bool,
}

impl Default for SyntaxConfig {
  fn default() -> Self {
    Self {
      default_theme:     None,
      fallback_to_plain: true,
    }
  }
}

/// High-level syntax highlighting manager.
///
/// Owns a highlighting backend and a configuration. Constructed once per
/// processor (not per code block) so that backend syntax and theme sets
/// are shared across every fence in a batch.
pub struct SyntaxManager {
  highlighter: Box<dyn Highlighter>,
  config:      SyntaxConfig,
}

impl SyntaxManager {
  /// Create a new syntax manager with the given highlighter and config
  #[must_use]
  pub fn new(highlighter: Box<dyn Highlighter>, config: SyntaxConfig) -> Self {
    Self {
      highlighter,
      config,
    }
  }

  /// Create a new syntax manager with the default configuration
  #[must_use]
  pub fn with_highlighter(highlighter: Box<dyn Highlighter>) -> Self {
    Self::new(highlighter, SyntaxConfig::default())
  }

  /// Get the underlying highlighter
  #[must_use]
  pub fn highlighter(&self) -> &dyn Highlighter {
    self.highlighter.as_ref()
  }

  /// Get the configuration
  #[must_use]
  pub const fn config(&self) -> &SyntaxConfig {
    &self.config
  }

  /// Highlight code with plain-text fallback.
  ///
  /// # Errors
  ///
  /// Returns an error if the language is unsupported and plain-text
  /// fallback is disabled, or if the backend fails.
  pub fn highlight_code(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String> {
    let theme = theme.or(self.config.default_theme.as_deref());

    if self.highlighter.supports_language(language)
      || self.config.fallback_to_plain
    {
      // Backends degrade an unknown token to their plain-text grammar.
      return self.highlighter.highlight(code, language, theme);
    }

    Err(SyntaxError::UnsupportedLanguage(language.to_string()))
  }
}
