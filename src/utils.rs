//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Render a relative path with `/` separators regardless of platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use localize_text::utils::to_slash_path;
///
/// assert_eq!(to_slash_path(Path::new("src/components/Button.jsx")), "src/components/Button.jsx");
/// assert_eq!(to_slash_path(Path::new("./App.jsx")), "App.jsx");
/// assert_eq!(to_slash_path(Path::new("")), "");
/// ```
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Pluralize a noun for summary lines: `1 file`, `2 files`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
