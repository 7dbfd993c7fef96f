//! # Mass Module
//!
//! Atomic mass lookup and molar mass summation.
//!
//! A [`MassTable`] is derived once from a loaded element table and then passed by
//! reference into every calculation. Summation fails fast on the first symbol that
//! has no mass entry; no partial total is ever returned.

pub mod calculator;
pub mod table;

pub use calculator::{CalculationError, calculate_molar_mass, calculate_molar_mass_with, molar_mass};
pub use table::MassTable;
