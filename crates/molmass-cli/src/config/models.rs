use molmass::core::formula::ParseMode;
use molmass::core::io::format::DatasetFormat;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSettings {
    pub path: PathBuf,
    pub format: DatasetFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationSettings {
    pub mode: ParseMode,
    pub precision: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dataset: DatasetSettings,
    pub calculation: CalculationSettings,
}
