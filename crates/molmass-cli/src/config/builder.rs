use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, CalculationSettings, DatasetSettings};
use crate::error::Result;
use directories::ProjectDirs;
use molmass::core::formula::ParseMode;
use molmass::core::io::format::DatasetFormat;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "molmass.toml";

/// Values supplied directly on the command line. They take precedence over the
/// configuration file and the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub dataset_path: Option<PathBuf>,
    pub dataset_format: Option<DatasetFormat>,
    pub strict: Option<bool>,
    pub precision: Option<usize>,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "molmass", "molmass")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn build_config(
    config_path: Option<&Path>,
    set_values: &[String],
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let mut file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => FileConfig::from_file(&path)?,
            _ => {
                debug!("No configuration file found, using defaults.");
                FileConfig::default()
            }
        },
    };
    file_config.apply_set_values(set_values)?;

    let dataset_file = file_config.dataset.take().unwrap_or_default();
    let dataset_path = overrides
        .dataset_path
        .clone()
        .or(dataset_file.path)
        .unwrap_or_else(|| PathBuf::from(&defaults.dataset_path));
    let dataset_format = overrides
        .dataset_format
        .or(dataset_file.format)
        .unwrap_or_else(|| DatasetFormat::infer(&dataset_path));

    let calculation_file = file_config.calculation.take().unwrap_or_default();
    let strict = overrides
        .strict
        .or(calculation_file.strict)
        .unwrap_or(defaults.strict);
    let precision = overrides
        .precision
        .or(calculation_file.precision)
        .unwrap_or(defaults.precision);

    let config = AppConfig {
        dataset: DatasetSettings {
            path: dataset_path,
            format: dataset_format,
        },
        calculation: CalculationSettings {
            mode: if strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
            precision,
        },
    };
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
