use super::table::MassTable;
use crate::core::formula::{Composition, FormulaError, ParseMode, parse_formula_with};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("Unknown element: {symbol}")]
    UnknownElement { symbol: String },
}

/// Sums `count * atomic_mass` over `composition`, in the order symbols first appeared.
///
/// # Errors
///
/// Returns [`CalculationError::UnknownElement`] for the first symbol without a mass.
pub fn molar_mass(composition: &Composition, masses: &MassTable) -> Result<f64, CalculationError> {
    composition
        .iter()
        .try_fold(0.0, |total, (symbol, count)| {
            let atomic_mass = masses
                .get(symbol)
                .ok_or_else(|| CalculationError::UnknownElement {
                    symbol: symbol.to_string(),
                })?;
            Ok(total + atomic_mass * count as f64)
        })
}

/// Parses `formula` leniently and returns its molar mass in g/mol, unrounded.
pub fn calculate_molar_mass(formula: &str, masses: &MassTable) -> Result<f64, CalculationError> {
    calculate_molar_mass_with(formula, masses, ParseMode::Lenient)
}

pub fn calculate_molar_mass_with(
    formula: &str,
    masses: &MassTable,
    mode: ParseMode,
) -> Result<f64, CalculationError> {
    let composition = parse_formula_with(formula, mode)?;
    molar_mass(&composition, masses)
}
