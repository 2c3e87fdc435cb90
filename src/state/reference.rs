//! Static reference data: districts, talukas and engineering branches

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// District list shipped with the binary
const BUNDLED_DISTRICTS: &str = include_str!("../../data/districts.json");

/// Engineering branches offered in the branch picker
pub const ENGINEERING_BRANCHES: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Electronics",
    "Electrical",
    "Mechanical",
    "Civil",
    "Chemical",
    "Aerospace",
];

/// A district and its talukas, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictEntry {
    pub name: String,
    #[serde(alias = "tahasil")]
    pub talukas: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read district data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid district data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable district/taluka lookup, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    districts: Vec<DistrictEntry>,
}

impl ReferenceData {
    /// Build from already-parsed entries
    #[cfg(test)]
    pub fn new(districts: Vec<DistrictEntry>) -> Self {
        Self { districts }
    }

    /// The district list compiled into the binary
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        Self::from_json(BUNDLED_DISTRICTS)
    }

    /// Parse a JSON array of `{name, talukas}` records
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let districts: Vec<DistrictEntry> = serde_json::from_str(json)?;
        Ok(Self { districts })
    }

    /// Load from a JSON file on disk
    pub fn from_file(path: &Path) -> Result<Self, ReferenceDataError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// District names in display order
    pub fn district_names(&self) -> Vec<&str> {
        self.districts.iter().map(|d| d.name.as_str()).collect()
    }

    /// Talukas of the named district, or an empty slice when unknown
    pub fn talukas_of(&self, district: &str) -> &[String] {
        if district.is_empty() {
            return &[];
        }
        self.districts
            .iter()
            .find(|d| d.name == district)
            .map(|d| d.talukas.as_slice())
            .unwrap_or(&[])
    }
}
