use crate::core::elements::record::ElementRecord;
use std::collections::HashMap;

/// Atomic masses keyed by element symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassTable {
    masses: HashMap<String, f64>,
}

impl MassTable {
    pub fn from_records(records: &[ElementRecord]) -> Self {
        records
            .iter()
            .map(|record| (record.symbol.clone(), record.atomic_mass))
            .collect()
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.masses.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.masses.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for MassTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            masses: iter
                .into_iter()
                .map(|(symbol, mass)| (symbol.into(), mass))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::builder::DatasetBuilder;

    #[test]
    fn from_records_maps_every_symbol() {
        let records = DatasetBuilder::standard().build_standard();
        let table = MassTable::from_records(&records);

        assert_eq!(table.len(), 118);
        assert_eq!(table.get("H"), Some(1.008));
        assert_eq!(table.get("S"), Some(32.065));
        assert_eq!(table.get("Pb"), Some(207.2));
        assert!(!table.contains("Xx"));
    }

    #[test]
    fn collects_from_pairs() {
        let table: MassTable = [("C", 12.011), ("O", 15.999)].into_iter().collect();
        assert_eq!(table.get("O"), Some(15.999));
        assert_eq!(table.get("N"), None);
    }
}
