//! Extraction engine.
//!
//! ## Pipeline
//!
//! 1. `file_scanner` enumerates matching source files under the root
//! 2. `pipeline` reads every file in parallel and runs the `parsers` chain
//!    (comments → markers → attributes) on it
//! 3. Per-file records are joined into a `Catalog` in enumeration order
//! 4. `render` turns the catalog into `key-value`, `csv` or `json` text

pub mod catalog;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;
pub mod render;

pub use catalog::{Catalog, ExtractionRecord};
pub use pipeline::{ExtractOptions, ExtractOutput, extract_catalog, extract_from_source};
pub use render::{OutputFormat, render};
