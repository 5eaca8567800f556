//! Extraction pipeline: scan, per-file extraction, aggregation.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::{
    catalog::{Catalog, ExtractionRecord},
    file_scanner::{SourceFile, scan_files},
    parsers::{attributes::parse_attributes, comments::strip_comments, markers::MarkerExtractor},
};

/// Settings for one extraction run, already merged from CLI and config.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub component: String,
}

/// Outcome of an extraction run.
#[derive(Debug)]
pub struct ExtractOutput {
    pub catalog: Catalog,
    pub files_scanned: usize,
    pub files_ignored: usize,
}

/// Run the per-file chain on already loaded text:
/// strip comments, find markers, parse each marker's attributes.
pub fn extract_from_source(
    source: &str,
    file: &str,
    markers: &MarkerExtractor,
) -> Vec<ExtractionRecord> {
    let cleaned = strip_comments(source);
    markers
        .extract_markers(&cleaned)
        .into_iter()
        .map(|marker| ExtractionRecord::new(file, parse_attributes(marker)))
        .collect()
}

fn extract_file(file: &SourceFile, markers: &MarkerExtractor) -> Result<Vec<ExtractionRecord>> {
    let bytes = fs::read(&file.path)
        .with_context(|| format!("Failed to read file: {}", file.path.display()))?;
    // Invalid UTF-8 sequences decode to U+FFFD instead of failing the run.
    let source = String::from_utf8_lossy(&bytes);
    Ok(extract_from_source(&source, &file.relative, markers))
}

/// Scan `root` and build the catalog.
///
/// Files are read and processed in parallel; results are joined in the
/// order the files were enumerated. Any read failure aborts the run and no
/// catalog is produced.
pub fn extract_catalog(root: &Path, options: &ExtractOptions) -> Result<ExtractOutput> {
    let markers = MarkerExtractor::new(&options.component)?;
    let scan = scan_files(root, &options.extensions, &options.ignores)?;

    let per_file: Vec<Vec<ExtractionRecord>> = scan
        .files
        .par_iter()
        .map(|file| extract_file(file, &markers))
        .collect::<Result<_>>()?;

    Ok(ExtractOutput {
        catalog: Catalog::aggregate(per_file),
        files_scanned: scan.files.len(),
        files_ignored: scan.ignored_count,
    })
}
