//! Syntect-based syntax highlighting backend enhanced with two-face.
//!
//! Uses Sublime Text syntax definitions (TextMate grammars) with the
//! two-face crate layered on top for extended syntax definitions and
//! themes. Syntax and theme sets are expensive to build, so they live in
//! process-wide statics and are loaded exactly once no matter how many
//! documents or code blocks a batch contains.

use std::sync::OnceLock;

use syntect::{
  highlighting::Theme,
  html::highlighted_html_for_string,
  parsing::SyntaxSet,
};
use two_face::{
  re_exports::syntect::highlighting::ThemeSet,
  theme::{EmbeddedLazyThemeSet, EmbeddedThemeName},
};

use super::{
  error::{SyntaxError, SyntaxResult},
  types::{Highlighter, SyntaxConfig, SyntaxManager},
};

/// Theme used when neither the caller nor the config names one.
const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Syntect-based syntax highlighter
pub struct SyntectHighlighter {
  theme_name: String,
}

impl SyntectHighlighter {
  /// Create a new Syntect highlighter with the specified theme.
  pub fn new(theme_name: Option<String>) -> Self {
    Self {
      theme_name: theme_name.unwrap_or_else(|| DEFAULT_THEME.to_string()),
    }
  }

  /// Get the syntect `SyntaxSet`.
  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  /// Get the syntect `ThemeSet` with extended themes.
  fn theme_set() -> &'static EmbeddedLazyThemeSet {
    static THEME_SET: OnceLock<EmbeddedLazyThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(two_face::theme::extra)
  }

  /// Get the default syntect `ThemeSet` for fallback themes.
  fn default_theme_set() -> &'static ThemeSet {
    static DEFAULT_THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    DEFAULT_THEME_SET.get_or_init(ThemeSet::load_defaults)
  }

  /// Resolve a theme by name, falling back to the configured default.
  fn get_theme(&self, theme_name: Option<&str>) -> &'static Theme {
    let theme_set = Self::theme_set();
    let default_theme_set = Self::default_theme_set();
    let name = match theme_name {
      Some(name) => name,
      None if !self.theme_name.is_empty() => &self.theme_name,
      None => DEFAULT_THEME,
    };

    if let Some(theme) = default_theme_set.themes.get(name) {
      return theme;
    }

    let embedded_theme = match name {
      "Dracula" => Some(EmbeddedThemeName::Dracula),
      "Github" => Some(EmbeddedThemeName::Github),
      "GruvboxDark" => Some(EmbeddedThemeName::GruvboxDark),
      "GruvboxLight" => Some(EmbeddedThemeName::GruvboxLight),
      "MonokaiExtended" => Some(EmbeddedThemeName::MonokaiExtended),
      "Nord" => Some(EmbeddedThemeName::Nord),
      "OneHalfDark" => Some(EmbeddedThemeName::OneHalfDark),
      "OneHalfLight" => Some(EmbeddedThemeName::OneHalfLight),
      "SolarizedDark" => Some(EmbeddedThemeName::SolarizedDark),
      "SolarizedLight" => Some(EmbeddedThemeName::SolarizedLight),
      "Zenburn" => Some(EmbeddedThemeName::Zenburn),
      _ => None,
    };

    if let Some(embedded_name) = embedded_theme {
      return theme_set.get(embedded_name);
    }

    default_theme_set
      .themes
      .get(DEFAULT_THEME)
      .unwrap_or_else(|| theme_set.get(EmbeddedThemeName::OneHalfDark))
  }
}

impl Default for SyntectHighlighter {
  fn default() -> Self {
    Self::new(None)
  }
}

impl Highlighter for SyntectHighlighter {
  fn name(&self) -> &'static str {
    "Syntect"
  }

  fn supported_languages(&self) -> Vec<String> {
    Self::syntax_set()
      .syntaxes()
      .iter()
      .flat_map(|syntax| {
        std::iter::once(syntax.name.to_lowercase())
          .chain(syntax.file_extensions.iter().map(|ext| ext.to_lowercase()))
      })
      .collect()
  }

  fn available_themes(&self) -> Vec<String> {
    let default_theme_set = Self::default_theme_set();
    let mut themes: Vec<String> =
      default_theme_set.themes.keys().cloned().collect();

    themes.extend([
      "Dracula".to_string(),
      "Github".to_string(),
      "GruvboxDark".to_string(),
      "GruvboxLight".to_string(),
      "MonokaiExtended".to_string(),
      "Nord".to_string(),
      "OneHalfDark".to_string(),
      "OneHalfLight".to_string(),
      "SolarizedDark".to_string(),
      "SolarizedLight".to_string(),
      "Zenburn".to_string(),
    ]);
    themes.sort();
    themes.dedup();
    themes
  }

  fn highlight(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String> {
    let syntax_set = Self::syntax_set();
    let syntax = syntax_set
      .find_syntax_by_token(language)
      .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let theme = self.get_theme(theme);

    highlighted_html_for_string(code, syntax_set, syntax, theme)
      .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))
  }
}

/// Create a Syntect-based syntax manager with the given default theme.
pub fn create_syntect_manager(theme: Option<&str>) -> SyntaxManager {
  let highlighter = Box::new(SyntectHighlighter::new(theme.map(String::from)));
  let config = SyntaxConfig {
    default_theme:     Some(
      theme.map_or_else(|| DEFAULT_THEME.to_string(), String::from),
    ),
    fallback_to_plain: true,
  };
  SyntaxManager::new(highlighter, config)
}
