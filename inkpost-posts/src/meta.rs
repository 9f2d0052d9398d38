//! Post metadata parsed from front matter.

use jiff::civil::Date;
use serde::Serialize;

use crate::error::{PostError, PostResult};

/// `createdAt` wire format, day first.
const DATE_FORMAT: &str = "%d-%m-%Y";

const DEFAULT_AUTHOR: &str = "Grzegorz Dubiel";
const DEFAULT_AVATAR: &str = "/profile.png";

/// Metadata from a post's front matter block.
///
/// `author` and `authorAvatar` fall back to site defaults when absent;
/// `createdAt` is mandatory and must parse as `DD-MM-YYYY`. A missing
/// `title` falls back to the post's slug so a listing entry is never
/// blank.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
  pub title:         String,
  pub author:        String,
  pub created_at:    Date,
  pub author_avatar: String,
  pub description:   String,
  pub image:         Option<String>,
  pub tags:          Vec<String>,
}

impl PostMeta {
  /// Parse front matter lines (`key: value`, one per line).
  ///
  /// Unknown keys are ignored rather than rejected, so posts can carry
  /// extra metadata for other consumers.
  pub fn parse(front_matter: &str, slug: &str) -> PostResult<Self> {
    let mut title = None;
    let mut author = None;
    let mut created_at_raw = None;
    let mut author_avatar = None;
    let mut description = None;
    let mut image = None;
    let mut tags = Vec::new();

    for line in front_matter.lines() {
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      let Some((key, value)) = line.split_once(':') else {
        continue;
      };
      let value = value.trim();
      if value.is_empty() {
        continue;
      }

      match key.trim() {
        "title" => title = Some(value.to_string()),
        "author" => author = Some(value.to_string()),
        "createdAt" => created_at_raw = Some(value.to_string()),
        "authorAvatar" => author_avatar = Some(value.to_string()),
        "description" => description = Some(value.to_string()),
        "image" => image = Some(value.to_string()),
        "tags" => {
          tags = value
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        },
        _ => {},
      }
    }

    let raw = created_at_raw.ok_or(PostError::MissingField("createdAt"))?;
    let created_at = Date::strptime(DATE_FORMAT, &raw)
      .map_err(|_| PostError::InvalidDate(raw))?;

    Ok(Self {
      title: title.unwrap_or_else(|| slug.to_string()),
      author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
      created_at,
      author_avatar: author_avatar
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
      description: description.unwrap_or_default(),
      image,
      tags,
    })
  }

  /// `createdAt` back in its wire format.
  #[must_use]
  pub fn created_at_display(&self) -> String {
    self.created_at.strftime(DATE_FORMAT).to_string()
  }
}

/// Split a post source into its front matter block and body.
///
/// The block is delimited by `---` lines at the top of the file.
pub fn split_front_matter(content: &str) -> PostResult<(&str, &str)> {
  let trimmed = content.trim_start();
  let rest = trimmed
    .strip_prefix("---")
    .ok_or(PostError::MissingFrontMatter)?;
  let end = rest.find("\n---").ok_or(PostError::MissingFrontMatter)?;
  let front = rest[..end].trim();
  let body = rest[end + 4..].trim_start_matches('\n');
  Ok((front, body))
}
