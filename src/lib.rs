//! localize-text - message catalog extraction for `<LocalizeText>` components
//!
//! Scans JSX sources for `<LocalizeText id="..." description="..." defaultMessage="..." />`
//! markers, collects them into a catalog and renders it as `key-value`, `csv`
//! or `json`. The `runtime` module resolves message ids back to text,
//! substituting `{{ name }}` placeholders.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline and renderers
//! - `runtime`: Message resolution and placeholder replacement
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod runtime;
pub mod utils;
