use crate::config::AppConfig;
use crate::error::{CliError, Result};
use molmass::workflows;
use std::io::Write;
use tracing::info;

pub fn run(config: &AppConfig) -> Result<()> {
    execute(config, &mut std::io::stdout().lock())
}

fn execute(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let settings = &config.dataset;
    let summary = workflows::generate::run(&settings.path, settings.format).map_err(|e| {
        CliError::DatasetWrite {
            path: settings.path.clone(),
            source: e,
        }
    })?;
    info!(
        "Wrote {} elements to {:?}",
        summary.element_count, &summary.path
    );

    writeln!(
        out,
        "Dataset file '{}' created successfully with {} elements.",
        summary.path.display(),
        summary.element_count
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalculationSettings, DatasetSettings};
    use molmass::core::elements::registry::ElementTable;
    use molmass::core::formula::ParseMode;
    use molmass::core::io::format::DatasetFormat;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_for(path: PathBuf, format: DatasetFormat) -> AppConfig {
        AppConfig {
            dataset: DatasetSettings { path, format },
            calculation: CalculationSettings {
                mode: ParseMode::Strict,
                precision: 3,
            },
        }
    }

    #[test]
    fn writes_dataset_and_confirms_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.json");
        let mut out = Vec::new();

        execute(&config_for(path.clone(), DatasetFormat::Json), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!(
                "Dataset file '{}' created successfully with 118 elements.\n",
                path.display()
            )
        );
        assert_eq!(ElementTable::load(&path).unwrap().len(), 118);
    }

    #[test]
    fn write_failure_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("elements.json");
        let mut out = Vec::new();

        let result = execute(&config_for(path.clone(), DatasetFormat::Json), &mut out);
        assert!(matches!(
            result,
            Err(CliError::DatasetWrite { path: p, .. }) if p == path
        ));
        assert!(out.is_empty());
    }
}
