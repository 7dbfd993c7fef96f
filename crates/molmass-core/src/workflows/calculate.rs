use crate::core::formula::{Composition, ParseMode, parse_formula_with};
use crate::core::mass::{CalculationError, MassTable, molar_mass};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct MolarMassReport {
    pub formula: String,
    pub composition: Composition,
    /// Unrounded molar mass in g/mol.
    pub molar_mass: f64,
}

/// Parses `formula` and sums its atomic masses.
///
/// The formula is used as given; callers that accept user input should pass it through
/// [`normalize_formula`](crate::core::formula::normalize_formula) first.
#[instrument(skip(masses), name = "calculate_workflow")]
pub fn run(
    formula: &str,
    masses: &MassTable,
    mode: ParseMode,
) -> Result<MolarMassReport, CalculationError> {
    let composition = parse_formula_with(formula, mode)?;
    debug!("Parsed composition: {}", composition);
    let mass = molar_mass(&composition, masses)?;

    Ok(MolarMassReport {
        formula: formula.to_string(),
        composition,
        molar_mass: mass,
    })
}
