//! Text-level parsers for marker extraction.
//!
//! These work on raw source text with regular expressions rather than an AST:
//! - `comments`: drops comments that start a line
//! - `markers`: slices out each `<LocalizeText ... />` occurrence
//! - `attributes`: reads quoted attribute values from one marker

pub mod attributes;
pub mod comments;
pub mod markers;
