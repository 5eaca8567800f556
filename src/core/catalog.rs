use serde::{Deserialize, Serialize};

use super::parsers::attributes::MarkerAttributes;

/// One marker occurrence found in a source file.
///
/// Absent attributes stay `None` (serialized as `null`) so renderers can
/// tell a missing description from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    /// Path of the source file, relative to the scan root, `/`-separated.
    pub file: String,
    pub id: Option<String>,
    pub description: Option<String>,
    pub default_message: Option<String>,
}

impl ExtractionRecord {
    pub fn new(file: impl Into<String>, attributes: MarkerAttributes) -> Self {
        let MarkerAttributes {
            id,
            description,
            default_message,
        } = attributes;
        Self {
            file: file.into(),
            id,
            description,
            default_message,
        }
    }
}

/// All records from one scan, in file order then marker order.
///
/// Records are never merged, even when ids collide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ExtractionRecord>,
}

impl Catalog {
    /// Concatenate per-file results, keeping their order.
    pub fn aggregate<I>(per_file: I) -> Self
    where
        I: IntoIterator<Item = Vec<ExtractionRecord>>,
    {
        Self {
            records: per_file.into_iter().flatten().collect(),
        }
    }

    pub fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that have no `id` attribute.
    pub fn missing_id_count(&self) -> usize {
        self.records.iter().filter(|r| r.id.is_none()).count()
    }
}

impl From<Vec<ExtractionRecord>> for Catalog {
    fn from(records: Vec<ExtractionRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ExtractionRecord;
    type IntoIter = std::slice::Iter<'a, ExtractionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
