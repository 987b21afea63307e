use serde::{Deserialize, Serialize};

use crate::error::{TrellisError, TrellisResult};

/// Role a trellis dimension plays for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrellisCategory {
    /// Identifies the panel's measurement; drives axis synchronization.
    Mandatory,
    NonMandatoryTrellis,
    NonMandatorySeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrellisEntry {
    pub category: TrellisCategory,
    pub trellised_by: String,
    pub trellis_option: String,
}

impl TrellisEntry {
    #[must_use]
    pub fn new(
        category: TrellisCategory,
        trellised_by: impl Into<String>,
        trellis_option: impl Into<String>,
    ) -> Self {
        Self {
            category,
            trellised_by: trellised_by.into(),
            trellis_option: trellis_option.into(),
        }
    }

    #[must_use]
    pub fn mandatory(trellised_by: impl Into<String>, trellis_option: impl Into<String>) -> Self {
        Self::new(TrellisCategory::Mandatory, trellised_by, trellis_option)
    }

    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.category == TrellisCategory::Mandatory
    }
}

/// Ordered trellis entries of one panel with at most one `Mandatory` entry.
///
/// The mandatory entry is located once at construction so cohort matching
/// is a direct lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<TrellisEntry>", into = "Vec<TrellisEntry>")]
pub struct TrellisEntries {
    entries: Vec<TrellisEntry>,
    mandatory: Option<usize>,
}

impl TrellisEntries {
    pub fn new(entries: Vec<TrellisEntry>) -> TrellisResult<Self> {
        let mut mandatory: Option<usize> = None;
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_mandatory() {
                continue;
            }
            if let Some(first) = mandatory {
                return Err(TrellisError::DuplicateMandatoryTrellis {
                    first: entries[first].trellised_by.clone(),
                    second: entry.trellised_by.clone(),
                });
            }
            mandatory = Some(index);
        }
        Ok(Self { entries, mandatory })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TrellisEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrellisEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn mandatory(&self) -> Option<&TrellisEntry> {
        self.mandatory.map(|index| &self.entries[index])
    }

    /// The `trellis_option` of the mandatory entry.
    #[must_use]
    pub fn measurement(&self) -> Option<&str> {
        self.mandatory().map(|entry| entry.trellis_option.as_str())
    }
}

impl TryFrom<Vec<TrellisEntry>> for TrellisEntries {
    type Error = TrellisError;

    fn try_from(entries: Vec<TrellisEntry>) -> TrellisResult<Self> {
        Self::new(entries)
    }
}

impl From<TrellisEntries> for Vec<TrellisEntry> {
    fn from(entries: TrellisEntries) -> Self {
        entries.entries
    }
}

impl<'a> IntoIterator for &'a TrellisEntries {
    type Item = &'a TrellisEntry;
    type IntoIter = std::slice::Iter<'a, TrellisEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Grid-wide trellis layout; decides value-based versus index-based X ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrellisDesign {
    #[default]
    ContinuousOverTime,
    /// X axis is a category index; ranges count distinct categories.
    CategoricalOverTime,
    CategoricalCounts,
    VariableAxes,
}

impl TrellisDesign {
    #[must_use]
    pub fn is_index_based(self) -> bool {
        matches!(self, Self::CategoricalOverTime)
    }
}
