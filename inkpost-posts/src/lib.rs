//! # inkpost-posts - the post store
//!
//! Loads blog posts from a per-locale directory of markdown files with
//! front matter, isolating per-post failures: a post with a missing or
//! malformed `createdAt` is logged and excluded while the rest of the
//! batch loads normally.
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use inkpost_posts::PostStore;
//!
//! let store = PostStore::load(Path::new("posts"), "en")?;
//! for post in store.posts() {
//!   println!("{} ({})", post.meta.title, post.meta.created_at);
//! }
//! # Ok::<(), inkpost_posts::PostError>(())
//! ```

mod error;
mod meta;
pub mod sitemap;
mod store;

pub use error::{PostError, PostResult};
pub use meta::{PostMeta, split_front_matter};
pub use store::{Post, PostStore};
