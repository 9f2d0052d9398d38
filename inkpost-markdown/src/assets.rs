//! Client-side companion assets for generated markup.

/// Copy-to-clipboard handler referenced by the widget's inline `onclick`.
///
/// The `copyCodeBlock(blockId, buttonId)` signature must match the ids
/// emitted by [`crate::widget::build`]; the two are one contract.
pub const COPY_SCRIPT: &str = r#"<script>
function copyCodeBlock(blockId, buttonId) {
  var block = document.getElementById(blockId);
  var button = document.getElementById(buttonId);
  if (!block || !button) return;
  navigator.clipboard.writeText(block.innerText).then(function () {
    button.classList.add("copied");
    setTimeout(function () {
      button.classList.remove("copied");
    }, 2000);
  });
}
</script>"#;

/// Whether rendered HTML contains a copy button and therefore needs
/// [`COPY_SCRIPT`] on the page.
#[must_use]
pub fn needs_copy_script(html: &str) -> bool {
  html.contains("copyCodeBlock(")
}

#[cfg(test)]
mod tests {
  use super::needs_copy_script;

  #[test]
  fn detects_copy_button_markup() {
    assert!(needs_copy_script(
      r#"<button onclick="copyCodeBlock('a', 'b')">x</button>"#
    ));
    assert!(!needs_copy_script("<p>no code here</p>"));
  }
}
