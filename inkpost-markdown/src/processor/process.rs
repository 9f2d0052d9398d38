//! Processing helpers with error recovery.
//!
//! One malformed post must never take down a batch: these wrappers catch
//! panics from the underlying parser stack and degrade to a safe
//! fallback instead of propagating.

use log::error;

use super::types::MarkdownProcessor;
use crate::{types::MarkdownResult, widget::IdGen};

/// Render markdown content, recovering from panics.
///
/// On panic the result is [`MarkdownResult::empty`] and the failure is
/// logged; other documents in the batch are unaffected.
#[must_use]
pub fn render_with_recovery(
  processor: &MarkdownProcessor,
  content: &str,
  ids: &mut dyn IdGen,
) -> MarkdownResult {
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor.render_with_ids(content, ids)
  })) {
    Ok(result) => result,
    Err(panic_err) => {
      error!("Panic during markdown processing: {panic_err:?}");
      MarkdownResult::empty()
    },
  }
}

/// Safely process markup content with error recovery.
///
/// Wraps a processing function that may panic on malformed input and
/// returns partial or fallback content rather than failing outright.
pub fn process_safe<F>(content: &str, processor_fn: F, fallback: &str) -> String
where
  F: FnOnce(&str) -> String,
{
  if content.is_empty() {
    return String::new();
  }

  let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor_fn(content)
  }));

  match result {
    Ok(processed_text) => processed_text,
    Err(e) => {
      if let Some(error_msg) = e.downcast_ref::<String>() {
        error!("Error processing markup: {error_msg}");
      } else if let Some(error_msg) = e.downcast_ref::<&str>() {
        error!("Error processing markup: {error_msg}");
      } else {
        error!("Unknown error occurred while processing markup");
      }

      if fallback.is_empty() {
        content.to_string()
      } else {
        fallback.to_string()
      }
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    processor::types::MarkdownOptions,
    widget::SequentialIdGen,
  };

  #[test]
  fn process_safe_success() {
    let result =
      process_safe("test content", |s| format!("processed: {s}"), "fallback");
    assert_eq!(result, "processed: test content");
  }

  #[test]
  #[allow(clippy::panic)]
  fn process_safe_fallback() {
    let result = process_safe("test content", |_| panic!("boom"), "fallback");
    assert_eq!(result, "fallback");
  }

  #[test]
  fn recovery_renders_normally_for_valid_input() {
    let processor = MarkdownProcessor::new(MarkdownOptions {
      highlight_code: false,
      ..Default::default()
    });
    let mut ids = SequentialIdGen::new();
    let result =
      render_with_recovery(&processor, "# Hello\n\nWorld.", &mut ids);
    assert!(result.html.contains("<h1"));
    assert_eq!(result.title, Some("Hello".to_string()));
  }
}
