//! Code block widget builder.
//!
//! Fenced code blocks are replaced with a self-contained widget: a header
//! row (language icon, display label, copy button) above a body div
//! wrapping the highlighted HTML. The copy button's inline `onclick`
//! references the body's element id, so the ids generated here and the
//! companion script in [`crate::assets`] form one contract: changing the
//! id scheme on either side breaks the copy feature.

use std::fmt::Write as _;

use crate::language::Language;

/// Length of generated element ids.
const ID_LEN: usize = 12;

/// Source of unique element ids for generated markup.
///
/// Injected rather than called ambiently so tests (and the idempotence
/// guarantee) can supply a deterministic generator.
pub trait IdGen {
  /// Produce the next id. Ids must be unique within one document.
  fn next_id(&mut self) -> String;
}

/// Random short-id generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGen;

impl IdGen for RandomIdGen {
  fn next_id(&mut self) -> String {
    use rand::{RngExt as _, distr::Alphanumeric};

    let mut rng = rand::rng();
    (0..ID_LEN).map(|_| char::from(rng.sample(Alphanumeric))).collect()
  }
}

/// Deterministic counter-based generator for tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGen {
  counter: usize,
}

impl SequentialIdGen {
  #[must_use]
  pub const fn new() -> Self {
    Self { counter: 0 }
  }
}

impl IdGen for SequentialIdGen {
  fn next_id(&mut self) -> String {
    let id = format!("cb-{}", self.counter);
    self.counter += 1;
    id
  }
}

/// Inline SVG icon for the widget header.
const fn icon(language: Language) -> &'static str {
  match language {
    Language::Console | Language::Powershell | Language::Bash => {
      r##"<svg class="lang-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><polyline points="4 17 10 11 4 5"/><line x1="12" y1="19" x2="20" y2="19"/></svg>"##
    },
    Language::Typescript => {
      r##"<svg class="lang-icon" viewBox="0 0 24 24" width="16" height="16" fill="currentColor"><path d="M3 3h18v18H3V3zm10.7 14.8c.5 1 1.5 1.7 3 1.7 1.6 0 2.7-.8 2.7-2.2 0-1.3-.7-1.9-2-2.4l-.7-.3c-.8-.3-1.1-.5-1.1-1 0-.4.3-.8.9-.8.5 0 .9.2 1.2.8l1.4-.9c-.6-1-1.4-1.4-2.6-1.4-1.6 0-2.6 1-2.6 2.3 0 1.2.7 1.8 1.9 2.3l.7.3c.8.4 1.3.6 1.3 1.2 0 .5-.5.9-1.2.9-.9 0-1.4-.5-1.8-1.1l-1.1.6zM8.9 12.3H11v-1.6H5v1.6h2.1V19h1.8v-6.7z"/></svg>"##
    },
    Language::Markdown => {
      r##"<svg class="lang-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><rect x="2" y="5" width="20" height="14" rx="2"/><path d="M5 15v-6l3 3 3-3v6M15 12h4M17 10v4"/></svg>"##
    },
    Language::Yaml => {
      r##"<svg class="lang-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/></svg>"##
    },
    Language::Html
    | Language::Css
    | Language::Javascript
    | Language::Jsx
    | Language::Json => {
      r##"<svg class="lang-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/></svg>"##
    },
  }
}

/// Copy-to-clipboard glyphs toggled by the companion script.
const COPY_ICON: &str = r##"<svg class="copy-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><rect x="9" y="9" width="13" height="13" rx="2"/><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/></svg>"##;
const DONE_ICON: &str = r##"<svg class="done-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"><polyline points="20 6 9 17 4 12"/></svg>"##;

/// Render the header row: icon, display label, copy button.
fn header(language: Language, block_id: &str, button_id: &str) -> String {
  format!(
    r##"<div class="code-block-header">{icon}<p class="code-block-lang">{label}</p><button id="{button_id}" aria-label="Copy to clipboard" class="copy-button" onclick="copyCodeBlock('{block_id}', '{button_id}')" type="button">{done}{copy}</button></div>"##,
    icon = icon(language),
    label = language.label(),
    done = DONE_ICON,
    copy = COPY_ICON,
  )
}

/// Build the full widget around already-highlighted HTML.
///
/// The body div carries `id = block_id` so the copy button (and the
/// companion script) can locate the code text. Shell-like languages get
/// the `line-prompt` class (a `$` prefix per line); everything else gets
/// `line-numbers` (a CSS counter).
pub fn build(
  highlighted_html: &str,
  language: Language,
  ids: &mut dyn IdGen,
) -> String {
  let block_id = ids.next_id();
  let button_id = ids.next_id();
  let numbering = if language.is_shell_like() {
    "line-prompt"
  } else {
    "line-numbers"
  };

  let mut out = String::with_capacity(highlighted_html.len() + 512);
  out.push_str(r#"<div class="code-block">"#);
  out.push_str(&header(language, &block_id, &button_id));
  let _ = write!(
    out,
    r#"<div id="{block_id}" class="code-block-body {numbering}">{highlighted_html}</div>"#,
  );
  out.push_str("</div>");
  out
}

/// Build a widget around raw, unhighlighted code.
///
/// Used when the backend fails on a block: the code is HTML-escaped and
/// wrapped in a plain `pre`, keeping the header and copy affordance.
pub fn build_plain(
  code: &str,
  language: Language,
  ids: &mut dyn IdGen,
) -> String {
  let escaped = html_escape::encode_text(code);
  let pre = format!("<pre>{escaped}</pre>");
  build(&pre, language, ids)
}

#[cfg(test)]
mod tests {
  use super::{ID_LEN, IdGen as _, RandomIdGen, SequentialIdGen, build, build_plain};
  use crate::language::Language;

  #[test]
  fn sequential_ids_are_distinct() {
    let mut ids = SequentialIdGen::new();
    assert_eq!(ids.next_id(), "cb-0");
    assert_eq!(ids.next_id(), "cb-1");
  }

  #[test]
  fn random_ids_are_alphanumeric_and_fixed_length() {
    let mut ids = RandomIdGen;
    let first = ids.next_id();
    let second = ids.next_id();
    assert_eq!(first.len(), ID_LEN);
    assert!(first.chars().all(char::is_alphanumeric));
    assert_ne!(first, second);
  }

  #[test]
  fn widget_wires_copy_button_to_body_id() {
    let mut ids = SequentialIdGen::new();
    let html = build("<pre>x</pre>", Language::Typescript, &mut ids);
    assert!(html.contains(r#"<div id="cb-0" class="code-block-body"#));
    assert!(html.contains(r#"onclick="copyCodeBlock('cb-0', 'cb-1')""#));
    assert!(html.contains(r#"<button id="cb-1""#));
  }

  #[test]
  fn shell_languages_use_prompt_numbering() {
    let mut ids = SequentialIdGen::new();
    let html = build("<pre>ls</pre>", Language::Bash, &mut ids);
    assert!(html.contains("line-prompt"));
    assert!(!html.contains("line-numbers"));
  }

  #[test]
  fn non_shell_languages_use_counter_numbering() {
    let mut ids = SequentialIdGen::new();
    let html = build("<pre>{}</pre>", Language::Json, &mut ids);
    assert!(html.contains("line-numbers"));
  }

  #[test]
  fn header_shows_display_label() {
    let mut ids = SequentialIdGen::new();
    let html = build("<pre>ls</pre>", Language::Console, &mut ids);
    assert!(html.contains(r#"<p class="code-block-lang">terminal</p>"#));
  }

  #[test]
  fn plain_fallback_escapes_code() {
    let mut ids = SequentialIdGen::new();
    let html = build_plain("<script>alert(1)</script>", Language::Html, &mut ids);
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>alert"));
  }
}
