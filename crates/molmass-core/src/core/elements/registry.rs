use super::record::ElementRecord;
use crate::core::io::error::DatasetError;
use crate::core::io::format::DatasetFormat;
use crate::core::mass::MassTable;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Immutable lookup over a loaded element dataset.
///
/// Built once at startup and shared by reference with every calculation; nothing
/// mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    records: Vec<ElementRecord>,
    by_symbol: HashMap<String, usize>,
}

impl ElementTable {
    /// A table with no elements. Every symbol looked up against it is unknown.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ElementRecord>) -> Result<Self, DatasetError> {
        let mut by_symbol = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_symbol.insert(record.symbol.clone(), index).is_some() {
                return Err(DatasetError::DuplicateSymbol {
                    symbol: record.symbol.clone(),
                });
            }
        }
        Ok(Self { records, by_symbol })
    }

    /// Loads the dataset at `path`, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        Self::load_as(path, DatasetFormat::infer(path))
    }

    pub fn load_as(path: &Path, format: DatasetFormat) -> Result<Self, DatasetError> {
        debug!("Loading {} element dataset from {:?}", format, path);
        let records = format.read_path(path)?;
        let table = Self::from_records(records)?;
        debug!("Loaded {} elements.", table.len());
        Ok(table)
    }

    pub fn get(&self, symbol: &str) -> Option<&ElementRecord> {
        self.by_symbol.get(symbol).map(|&index| &self.records[index])
    }

    pub fn by_atomic_number(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.records
            .iter()
            .find(|record| record.atomic_number == atomic_number)
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn mass_table(&self) -> MassTable {
        MassTable::from_records(&self.records)
    }
}
