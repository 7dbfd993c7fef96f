pub mod calc;
pub mod generate;
pub mod lookup;

use crate::config::DatasetSettings;
use crate::error::{CliError, Result};
use molmass::core::elements::registry::ElementTable;
use tracing::info;

fn load_element_table(settings: &DatasetSettings) -> Result<ElementTable> {
    info!(
        "Loading element dataset from {:?} ({})",
        &settings.path, settings.format
    );
    ElementTable::load_as(&settings.path, settings.format).map_err(|e| CliError::FileParsing {
        path: settings.path.clone(),
        source: e.into(),
    })
}
