//! Code fence rewrite pass.
//!
//! Locates `pre > code` pairs in the DOM, highlights their text, and
//! replaces each `pre` with a widget built by [`crate::widget`]. Fences
//! are collected before any mutation so replacement never happens while
//! the tree is being walked.

use kuchikikiki::NodeRef;
use log::warn;
use tendril::TendrilSink as _;

use crate::{
  language::Language,
  syntax::SyntaxManager,
  widget::{self, IdGen},
};

/// One fence awaiting replacement.
struct Fence {
  pre:      NodeRef,
  code:     String,
  language: Language,
}

/// Replace every highlightable fence in `document` with a code widget.
///
/// A `pre` with no `code` child never matches; a `code` with no text
/// content is skipped. Both are left untouched rather than treated as
/// errors.
pub fn rewrite_code_fences(
  document: &NodeRef,
  manager: &SyntaxManager,
  ids: &mut dyn IdGen,
) {
  let Ok(matches) = document.select("pre > code") else {
    return;
  };

  let mut fences = Vec::new();
  for code_match in matches {
    let code_node = code_match.as_node();
    let Some(pre) = code_node.parent() else {
      continue;
    };

    let raw = code_node.text_contents();
    if raw.trim().is_empty() {
      continue;
    }
    // comrak leaves a trailing newline inside the fence
    let code = raw.strip_suffix('\n').unwrap_or(&raw).to_string();

    let tag = code_node.as_element().and_then(|element| {
      element
        .attributes
        .borrow()
        .get("class")
        .and_then(extract_language_tag)
    });
    let language = Language::from_tag(tag.as_deref());

    fences.push(Fence {
      pre,
      code,
      language,
    });
  }

  for fence in fences {
    let widget_html = match manager.highlight_code(
      &fence.code,
      fence.language.highlighter_token(),
      None,
    ) {
      Ok(highlighted) => widget::build(&highlighted, fence.language, ids),
      Err(err) => {
        warn!(
          "Highlighting failed for a {} block, rendering plain: {err}",
          fence.language.tag()
        );
        widget::build_plain(&fence.code, fence.language, ids)
      },
    };

    let fragment = kuchikikiki::parse_html().one(widget_html.as_str());
    if let Ok(body) = fragment.select_first("body") {
      // Collect first: moving a node invalidates the sibling iterator.
      let children: Vec<NodeRef> = body.as_node().children().collect();
      for child in children {
        fence.pre.insert_before(child);
      }
    }
    fence.pre.detach();
  }
}

/// Pull the `language-xxx` tag out of a class attribute value.
fn extract_language_tag(class_attr: &str) -> Option<String> {
  class_attr
    .split_whitespace()
    .find_map(|class| class.strip_prefix("language-"))
    .map(std::string::ToString::to_string)
}

#[cfg(test)]
mod tests {
  use super::extract_language_tag;

  #[test]
  fn extracts_language_from_class_list() {
    assert_eq!(
      extract_language_tag("language-typescript"),
      Some("typescript".to_string())
    );
    assert_eq!(
      extract_language_tag("hljs language-bash extra"),
      Some("bash".to_string())
    );
    assert_eq!(extract_language_tag("plain"), None);
  }
}
