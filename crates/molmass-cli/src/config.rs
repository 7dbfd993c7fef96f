mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{ConfigOverrides, build_config, default_config_path};
pub use models::{AppConfig, CalculationSettings, DatasetSettings};
