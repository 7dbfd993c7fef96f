//! # Workflows Module
//!
//! High-level entry points that tie the `core` building blocks into complete procedures.
//!
//! - **Generate Workflow** ([`generate`]) - Builds the reference records from the embedded
//!   table and writes them to a dataset file, reporting how many were written.
//! - **Calculate Workflow** ([`calculate`]) - Parses a formula against a loaded mass table
//!   and reports both the flattened composition and the molar mass.

pub mod calculate;
pub mod generate;
