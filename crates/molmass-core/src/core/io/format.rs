use super::csv_dataset::CsvDataset;
use super::error::DatasetError;
use super::json_dataset::JsonDataset;
use super::traits::DatasetFile;
use crate::core::elements::record::ElementRecord;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    #[default]
    Json,
    Csv,
}

impl DatasetFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        extension.parse().ok()
    }

    /// Format implied by the extension of `path`, falling back to JSON.
    pub fn infer(path: &Path) -> Self {
        Self::from_extension(path).unwrap_or_default()
    }

    pub const fn extension(&self) -> &'static str {
        match self {
            DatasetFormat::Json => "json",
            DatasetFormat::Csv => "csv",
        }
    }

    pub fn read_path(&self, path: &Path) -> Result<Vec<ElementRecord>, DatasetError> {
        match self {
            DatasetFormat::Json => JsonDataset::read_from_path(path),
            DatasetFormat::Csv => CsvDataset::read_from_path(path),
        }
    }

    pub fn write_path(&self, records: &[ElementRecord], path: &Path) -> Result<(), DatasetError> {
        match self {
            DatasetFormat::Json => JsonDataset::write_to_path(records, path),
            DatasetFormat::Csv => CsvDataset::write_to_path(records, path),
        }
    }
}

impl FromStr for DatasetFormat {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(DatasetFormat::Json),
            "csv" => Ok(DatasetFormat::Csv),
            other => Err(DatasetError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
