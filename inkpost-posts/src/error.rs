//! Error types for post loading.

/// Errors that can occur while loading a single post.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
  /// The post file could not be read.
  #[error("failed to read post file: {0}")]
  Io(#[from] std::io::Error),

  /// The file has no `---` front matter block.
  #[error("missing front matter block")]
  MissingFrontMatter,

  /// A required front matter field is absent.
  #[error("missing `{0}` in front matter")]
  MissingField(&'static str),

  /// `createdAt` was present but not a valid `DD-MM-YYYY` date.
  #[error("invalid `createdAt` value `{0}`, expected DD-MM-YYYY")]
  InvalidDate(String),
}

/// Result type for post operations.
pub type PostResult<T> = Result<T, PostError>;
