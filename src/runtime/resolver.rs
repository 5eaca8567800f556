use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

use super::tokens::{ReplacementValues, replace_tokens};

/// Message id to message template.
pub type MessageTable = HashMap<String, String>;

/// Resolves message ids to display text.
///
/// Built once from a message table and default replacement values, then
/// passed to whatever renders text.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    messages: MessageTable,
    default_values: ReplacementValues,
}

impl Resolver {
    pub fn new(messages: MessageTable, default_values: ReplacementValues) -> Self {
        Self {
            messages,
            default_values,
        }
    }

    /// Load a flat JSON object of `id: template` pairs, the layout written by
    /// the `key-value` output format. `null` entries are skipped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Option<String>> =
            serde_json::from_str(json).context("Message table must be a JSON object of strings")?;
        let messages = raw
            .into_iter()
            .filter_map(|(id, template)| template.map(|t| (id, t)))
            .collect();
        Ok(Self::new(messages, ReplacementValues::new()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read message table: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse message table: {}", path.display()))
    }

    pub fn with_default_values(mut self, default_values: ReplacementValues) -> Self {
        self.default_values = default_values;
        self
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    /// Resolve `id` to text.
    ///
    /// The template from the message table wins; otherwise `default_message`
    /// is used; otherwise the result is empty. Placeholders in the chosen
    /// template are filled from `values`, then the resolver's default values.
    pub fn localize(
        &self,
        id: &str,
        values: &ReplacementValues,
        default_message: Option<&str>,
    ) -> String {
        match self.messages.get(id).map(String::as_str).or(default_message) {
            Some(template) => replace_tokens(template, values, Some(&self.default_values)),
            None => String::new(),
        }
    }
}
