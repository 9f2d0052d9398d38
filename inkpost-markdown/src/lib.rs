//! # inkpost-markdown - blog post rendering pipeline
//!
//! Markdown-to-HTML processing for blog posts, featuring AST-based
//! conversion with GFM support, stable heading slugs with deep-link
//! anchors, syntax-highlighted code widgets with copy buttons, and
//! table-of-contents extraction.
//!
//! ## Quick Start
//!
//! ```rust
//! use inkpost_markdown::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor.render("# Hello World\n\nThis is **bold** text.");
//!
//! println!("HTML: {}", result.html);
//! println!("Title: {:?}", result.title);
//! println!("Headings: {:?}", result.headings);
//! ```
//!
//! ## Features
//!
//! - **AST-based processing** using `comrak`, with raw HTML passthrough
//! - **Heading slugs and anchors** with de-duplicated `id` attributes
//! - **Code block widgets** via `syntect`: language label, copy button,
//!   and a highlighted body
//! - **Table of contents** built from the rendered HTML, as both a flat
//!   list and a nested outline
//! - **Error recovery** with graceful degradation for malformed input
//!
//! ## Deterministic output
//!
//! Code widgets carry generated element ids. The default generator is
//! random; supply a [`SequentialIdGen`] through
//! [`MarkdownProcessor::render_with_ids`] for byte-identical output
//! across runs:
//!
//! ```rust
//! use inkpost_markdown::{
//!   MarkdownOptions, MarkdownProcessor, SequentialIdGen,
//! };
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let mut ids = SequentialIdGen::new();
//! let result = processor.render_with_ids("```ts\nlet x = 1;\n```", &mut ids);
//! ```

pub mod assets;
pub mod language;
pub mod processor;
pub mod syntax;
pub mod toc;
mod types;
pub mod utils;
pub mod widget;

pub use crate::{
  assets::{COPY_SCRIPT, needs_copy_script},
  language::Language,
  processor::{
    MarkdownOptions, MarkdownOptionsBuilder, MarkdownProcessor, process_safe,
    render_with_recovery,
  },
  syntax::{
    Highlighter, SyntaxConfig, SyntaxError, SyntaxManager,
    create_default_manager,
  },
  toc::{TableOfContents, TocEntry, TocNode},
  types::{Heading, MarkdownResult},
  widget::{IdGen, RandomIdGen, SequentialIdGen},
};
