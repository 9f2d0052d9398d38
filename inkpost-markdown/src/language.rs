//! The allow-list of languages a fenced code block may declare.
//!
//! Fences carry a raw tag (`language-typescript` class on the `code`
//! element). The tag is resolved to a [`Language`] variant; anything
//! outside the allow-list degrades to the fallback instead of erroring,
//! so an unknown tag never breaks a post.

use serde::{Deserialize, Serialize};

/// A fenced code block language the pipeline knows how to render.
///
/// This is a closed set on purpose: the widget header needs an icon and a
/// display label per language, and an enum keeps both mappings exhaustive
/// at compile time.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Typescript,
  Html,
  Css,
  Javascript,
  Powershell,
  Bash,
  Console,
  Jsx,
  Json,
  Markdown,
  Yaml,
}

impl Language {
  /// Every allow-listed language, in declaration order. The first entry
  /// doubles as the fallback for absent or unrecognized tags.
  pub const ALL: [Self; 11] = [
    Self::Typescript,
    Self::Html,
    Self::Css,
    Self::Javascript,
    Self::Powershell,
    Self::Bash,
    Self::Console,
    Self::Jsx,
    Self::Json,
    Self::Markdown,
    Self::Yaml,
  ];

  /// Fallback language used when a fence has no tag or an unknown one.
  pub const FALLBACK: Self = Self::Javascript;

  /// Resolve a raw fence tag to a language.
  ///
  /// `None`, an empty tag, or a tag outside the allow-list all resolve to
  /// [`Self::FALLBACK`]. This never fails.
  #[must_use]
  pub fn from_tag(tag: Option<&str>) -> Self {
    match tag.map(str::trim) {
      Some("typescript" | "ts") => Self::Typescript,
      Some("html") => Self::Html,
      Some("css") => Self::Css,
      Some("javascript" | "js") => Self::Javascript,
      Some("powershell") => Self::Powershell,
      Some("bash") => Self::Bash,
      Some("console") => Self::Console,
      Some("jsx") => Self::Jsx,
      Some("json") => Self::Json,
      Some("markdown" | "md") => Self::Markdown,
      Some("yaml" | "yml") => Self::Yaml,
      _ => Self::FALLBACK,
    }
  }

  /// Canonical tag for this language.
  #[must_use]
  pub const fn tag(self) -> &'static str {
    match self {
      Self::Typescript => "typescript",
      Self::Html => "html",
      Self::Css => "css",
      Self::Javascript => "javascript",
      Self::Powershell => "powershell",
      Self::Bash => "bash",
      Self::Console => "console",
      Self::Jsx => "jsx",
      Self::Json => "json",
      Self::Markdown => "markdown",
      Self::Yaml => "yaml",
    }
  }

  /// Token handed to the syntax highlighter backend.
  ///
  /// `console` has no grammar of its own and highlights as a shell
  /// session.
  #[must_use]
  pub const fn highlighter_token(self) -> &'static str {
    match self {
      Self::Console => "bash",
      other => other.tag(),
    }
  }

  /// Human-readable label shown in the code block header.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Console | Self::Powershell => "terminal",
      Self::Jsx => "JSX",
      Self::Markdown => "Markdown",
      Self::Yaml => "YML",
      other => other.tag(),
    }
  }

  /// Shell-like languages render a `$` prompt in place of line numbers.
  #[must_use]
  pub const fn is_shell_like(self) -> bool {
    matches!(self, Self::Powershell | Self::Bash | Self::Console)
  }
}

#[cfg(test)]
mod tests {
  use super::Language;

  #[test]
  fn recognized_tags_resolve_to_themselves() {
    for lang in Language::ALL {
      assert_eq!(Language::from_tag(Some(lang.tag())), lang);
    }
  }

  #[test]
  fn unknown_or_absent_tags_fall_back() {
    assert_eq!(Language::from_tag(None), Language::Javascript);
    assert_eq!(Language::from_tag(Some("")), Language::Javascript);
    assert_eq!(Language::from_tag(Some("brainfuck")), Language::Javascript);
  }

  #[test]
  fn display_labels() {
    assert_eq!(Language::Console.label(), "terminal");
    assert_eq!(Language::Powershell.label(), "terminal");
    assert_eq!(Language::Jsx.label(), "JSX");
    assert_eq!(Language::Markdown.label(), "Markdown");
    assert_eq!(Language::Yaml.label(), "YML");
    assert_eq!(Language::Typescript.label(), "typescript");
  }

  #[test]
  fn shell_like_variants() {
    assert!(Language::Bash.is_shell_like());
    assert!(Language::Console.is_shell_like());
    assert!(Language::Powershell.is_shell_like());
    assert!(!Language::Typescript.is_shell_like());
    assert!(!Language::Json.is_shell_like());
  }
}
