//! Runtime message resolution.
//!
//! - `tokens`: `{{ name }}` placeholder substitution
//! - `resolver`: message table lookup with default-message fallback

pub mod resolver;
pub mod tokens;

pub use resolver::{MessageTable, Resolver};
pub use tokens::{ReplacementValues, replace_tokens};
