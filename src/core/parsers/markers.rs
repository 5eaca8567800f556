use anyhow::{Context, Result};
use regex::Regex;

/// Tag name of the marker component when none is configured.
pub const DEFAULT_COMPONENT: &str = "LocalizeText";

/// Finds self-closing marker elements (`<LocalizeText ... />`) in source text.
///
/// Matching is textual: each occurrence runs from the opening `<Component`
/// to the nearest following `/>`, so adjacent markers never merge and a
/// marker may span several lines.
#[derive(Debug, Clone)]
pub struct MarkerExtractor {
    component: String,
    regex: Regex,
}

/// `<Name/>` or `<Name` followed by whitespace, up to the nearest `/>`.
fn marker_pattern(component: &str) -> String {
    format!(r"(?s)<{}(?:\s.*?)?/>", regex::escape(component))
}

impl MarkerExtractor {
    pub fn new(component: &str) -> Result<Self> {
        if component.trim().is_empty() {
            anyhow::bail!("Marker component name must not be empty");
        }
        let regex = Regex::new(&marker_pattern(component))
            .with_context(|| format!("Invalid marker component name: \"{}\"", component))?;
        Ok(Self {
            component: component.to_string(),
            regex,
        })
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Source text of every marker occurrence, in the order they appear.
    pub fn extract_markers<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

impl Default for MarkerExtractor {
    fn default() -> Self {
        Self {
            component: DEFAULT_COMPONENT.to_string(),
            regex: Regex::new(&marker_pattern(DEFAULT_COMPONENT)).unwrap(),
        }
    }
}
