use std::fmt;

/// Element symbols mapped to atom counts for one formula.
///
/// Symbols keep the order in which they first appeared in the formula, which makes
/// summation and error reporting deterministic. Equality ignores that order.
#[derive(Debug, Clone, Default)]
pub struct Composition {
    counts: Vec<(String, u64)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|&(_, count)| count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(s, count)| (s.as_str(), *count))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total_atoms(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |total, &(_, count)| total.saturating_add(count))
    }

    /// Adds `count` atoms of `symbol`, returning the new total or `None` on overflow.
    ///
    /// A zero count still records the symbol.
    pub(crate) fn try_add(&mut self, symbol: &str, count: u64) -> Option<u64> {
        let entry = self.entry(symbol);
        *entry = entry.checked_add(count)?;
        Some(*entry)
    }

    fn entry(&mut self, symbol: &str) -> &mut u64 {
        let index = match self.counts.iter().position(|(s, _)| s == symbol) {
            Some(index) => index,
            None => {
                self.counts.push((symbol.to_string(), 0));
                self.counts.len() - 1
            }
        };
        &mut self.counts[index].1
    }
}

impl PartialEq for Composition {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(symbol, count)| other.get(symbol) == Some(count))
    }
}

impl Eq for Composition {}

impl<S: Into<String>> FromIterator<(S, u64)> for Composition {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut composition = Composition::new();
        for (symbol, count) in iter {
            let symbol: String = symbol.into();
            let entry = composition.entry(&symbol);
            *entry = entry.saturating_add(count);
        }
        composition
    }
}

impl fmt::Display for Composition {
    /// Formats as space-separated symbols with counts above one, e.g. `Al2 S3 O12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (symbol, count)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if count == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}{}", symbol, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_add_accumulates_counts_in_first_seen_order() {
        let mut composition = Composition::new();
        composition.try_add("C", 1);
        composition.try_add("H", 3);
        composition.try_add("C", 1);

        assert_eq!(composition.get("C"), Some(2));
        assert_eq!(composition.get("H"), Some(3));
        assert_eq!(composition.symbols().collect::<Vec<_>>(), vec!["C", "H"]);
    }

    #[test]
    fn try_add_detects_overflow() {
        let mut composition = Composition::new();
        composition.try_add("H", u64::MAX);
        assert_eq!(composition.try_add("H", 1), None);
        assert_eq!(composition.get("H"), Some(u64::MAX));
    }

    #[test]
    fn zero_count_still_records_symbol() {
        let mut composition = Composition::new();
        composition.try_add("O", 0);
        assert_eq!(composition.get("O"), Some(0));
        assert_eq!(composition.len(), 1);
    }

    #[test]
    fn equality_ignores_order() {
        let a: Composition = [("H", 2), ("O", 1)].into_iter().collect();
        let b: Composition = [("O", 1), ("H", 2)].into_iter().collect();
        let c: Composition = [("O", 1), ("H", 3)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn total_atoms_sums_all_counts() {
        let composition: Composition = [("Al", 2), ("S", 3), ("O", 12)].into_iter().collect();
        assert_eq!(composition.total_atoms(), 17);
    }

    #[test]
    fn display_omits_unit_counts() {
        let composition: Composition = [("Na", 1), ("Cl", 1)].into_iter().collect();
        assert_eq!(composition.to_string(), "Na Cl");

        let sulfate: Composition = [("Al", 2), ("S", 3), ("O", 12)].into_iter().collect();
        assert_eq!(sulfate.to_string(), "Al2 S3 O12");
    }
}
