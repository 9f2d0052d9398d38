//! Small shared helpers.

/// Slugify a string for use as an anchor id.
/// Converts to lowercase, replaces non-alphanumeric characters with
/// dashes, collapses runs, and trims leading/trailing dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
  let mut slug = String::with_capacity(text.len());
  let mut prev_dash = false;
  for c in text.chars() {
    if c.is_alphanumeric() {
      slug.extend(c.to_lowercase());
      prev_dash = false;
    } else if !prev_dash {
      slug.push('-');
      prev_dash = true;
    }
  }
  slug.trim_matches('-').to_string()
}
