//! Expose inkpost's internal API for use in integration testing. Not
//! intended for production use; depend on `inkpost-markdown` and
//! `inkpost-posts` directly instead.
pub mod build;
pub mod cli;
