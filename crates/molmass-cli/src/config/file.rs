use crate::error::{CliError, Result};
use molmass::core::io::format::DatasetFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub dataset: Option<FileDatasetConfig>,
    pub calculation: Option<FileCalculationConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileDatasetConfig {
    pub path: Option<PathBuf>,
    pub format: Option<DatasetFormat>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCalculationConfig {
    pub strict: Option<bool>,
    pub precision: Option<usize>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key.trim() {
                "dataset.path" => {
                    self.dataset.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value_str));
                }
                "dataset.format" => {
                    self.dataset.get_or_insert_with(Default::default).format =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid format value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "calculation.strict" => {
                    self.calculation
                        .get_or_insert_with(Default::default)
                        .strict = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "calculation.precision" => {
                    self.calculation
                        .get_or_insert_with(Default::default)
                        .precision = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_kebab_case_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molmass.toml");
        fs::write(
            &path,
            r#"
            [dataset]
            path = "data/elements.csv"
            format = "csv"

            [calculation]
            strict = false
            precision = 5
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let dataset = config.dataset.unwrap();
        assert_eq!(dataset.path, Some(PathBuf::from("data/elements.csv")));
        assert_eq!(dataset.format, Some(DatasetFormat::Csv));
        let calculation = config.calculation.unwrap();
        assert_eq!(calculation.strict, Some(false));
        assert_eq!(calculation.precision, Some(5));
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molmass.toml");
        fs::write(&path, "[calculation]\nrounding = 2\n").unwrap();

        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn set_values_override_file_values() {
        let mut config = FileConfig {
            calculation: Some(FileCalculationConfig {
                strict: Some(true),
                precision: Some(3),
            }),
            ..Default::default()
        };
        config
            .apply_set_values(&[
                "calculation.precision=6".to_string(),
                "calculation.strict=false".to_string(),
                "dataset.format=csv".to_string(),
                "dataset.path=a=b.csv".to_string(),
            ])
            .unwrap();

        let calculation = config.calculation.unwrap();
        assert_eq!(calculation.precision, Some(6));
        assert_eq!(calculation.strict, Some(false));
        let dataset = config.dataset.unwrap();
        assert_eq!(dataset.format, Some(DatasetFormat::Csv));
        assert_eq!(dataset.path, Some(PathBuf::from("a=b.csv")));
    }

    #[test]
    fn set_values_reject_malformed_pairs() {
        let mut config = FileConfig::default();
        for bad in ["calculation.precision", "calculation.precision=many", "unknown.key=1"] {
            let result = config.apply_set_values(&[bad.to_string()]);
            assert!(matches!(result, Err(CliError::Config(_))), "accepted {bad}");
        }
    }
}
