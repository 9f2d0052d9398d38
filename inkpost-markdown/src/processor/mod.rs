//! Markdown processing pipeline.
//!
//! The processor module is organized into focused submodules:
//!
//! - [`core`]: main processor implementation and stage ordering
//! - [`codeblock`]: the code fence rewrite pass
//! - [`process`]: panic-recovering helpers for batch use
//! - [`types`]: configuration structures and the processor struct
pub mod codeblock;
pub mod core;
pub mod process;
pub mod types;

pub use process::{process_safe, render_with_recovery};
pub use types::{MarkdownOptions, MarkdownOptionsBuilder, MarkdownProcessor};
