use crate::core::elements::builder::DatasetBuilder;
use crate::core::io::error::DatasetError;
use crate::core::io::format::DatasetFormat;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub path: PathBuf,
    pub format: DatasetFormat,
    pub element_count: usize,
}

/// Writes the standard element dataset to `output`, overwriting any existing file.
///
/// # Errors
///
/// Write failures are propagated unchanged.
#[instrument(skip_all, name = "generate_workflow")]
pub fn run(output: &Path, format: DatasetFormat) -> Result<GenerateSummary, DatasetError> {
    let records = DatasetBuilder::standard().build_standard();
    info!(
        "Writing {} element records as {} to {:?}",
        records.len(),
        format,
        output
    );
    format.write_path(&records, output)?;

    Ok(GenerateSummary {
        path: output.to_path_buf(),
        format,
        element_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::registry::ElementTable;
    use crate::core::elements::table::{PUBCHEM_URL, RSC_URL};
    use tempfile::tempdir;

    #[test]
    fn writes_all_elements_and_reports_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.json");

        let summary = run(&path, DatasetFormat::Json).unwrap();
        assert_eq!(summary.element_count, 118);
        assert_eq!(summary.path, path);

        let table = ElementTable::load(&path).unwrap();
        assert_eq!(table.len(), 118);
        assert_eq!(table.get("Hg").unwrap().source, RSC_URL);
        assert_eq!(table.get("Au").unwrap().source, PUBCHEM_URL);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.csv");
        std::fs::write(&path, "stale").unwrap();

        run(&path, DatasetFormat::Csv).unwrap();
        let table = ElementTable::load(&path).unwrap();
        assert_eq!(table.len(), 118);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("elements.json");
        assert!(matches!(
            run(&path, DatasetFormat::Json),
            Err(DatasetError::Io(_))
        ));
    }
}
