use super::record::ElementRecord;
use super::table::{ALTERNATE_SOURCE_SYMBOLS, ELEMENT_DATA, ElementEntry, PUBCHEM_URL, RSC_URL};
use phf::Set;
use tracing::debug;

/// Produces ordered [`ElementRecord`]s from `(name, symbol, atomic_mass, group)` entries.
///
/// Atomic numbers are assigned from the 1-based position of each entry, and the
/// source URL is chosen by membership of the symbol in the alternate-source set.
#[derive(Debug, Clone, Copy)]
pub struct DatasetBuilder<'a> {
    default_source: &'a str,
    alternate_source: &'a str,
    alternate_symbols: &'a Set<&'static str>,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(
        default_source: &'a str,
        alternate_source: &'a str,
        alternate_symbols: &'a Set<&'static str>,
    ) -> Self {
        Self {
            default_source,
            alternate_source,
            alternate_symbols,
        }
    }

    /// Builder configured with the PubChem/RSC sources of the embedded table.
    pub fn standard() -> DatasetBuilder<'static> {
        DatasetBuilder::new(PUBCHEM_URL, RSC_URL, &ALTERNATE_SOURCE_SYMBOLS)
    }

    pub fn source_for(&self, symbol: &str) -> &'a str {
        if self.alternate_symbols.contains(symbol) {
            self.alternate_source
        } else {
            self.default_source
        }
    }

    pub fn build(&self, entries: &[ElementEntry]) -> Vec<ElementRecord> {
        let records: Vec<ElementRecord> = entries
            .iter()
            .zip(1u32..)
            .map(
                |(&(name, symbol, atomic_mass, group), atomic_number)| ElementRecord {
                    name: name.to_string(),
                    symbol: symbol.to_string(),
                    atomic_number,
                    atomic_mass,
                    group,
                    source: self.source_for(symbol).to_string(),
                },
            )
            .collect();
        debug!("Built {} element records.", records.len());
        records
    }

    /// Builds records for the full embedded 118-element table.
    pub fn build_standard(&self) -> Vec<ElementRecord> {
        self.build(&ELEMENT_DATA)
    }
}
