//! # Core Module
//!
//! This module provides the building blocks used by the molmass workflows.
//!
//! ## Architecture
//!
//! - **Element Data** ([`elements`]) - Element records, the embedded reference table,
//!   the dataset builder and the immutable [`ElementTable`](elements::ElementTable)
//!   lookup structure
//! - **File I/O** ([`io`]) - Reading and writing the element dataset as JSON or CSV
//! - **Formula Parsing** ([`formula`]) - Tokenization and stack-based reduction of
//!   chemical formulas into element counts
//! - **Mass Calculation** ([`mass`]) - Atomic mass lookup and molar mass summation
//!
//! ## Data Flow
//!
//! Data moves in one direction: the builder produces records, records are written to a
//! dataset file, the file is loaded into an element table, and the table's masses are
//! used to evaluate parsed formulas. The dataset file is the only link between the
//! generating and calculating halves.

pub mod elements;
pub mod formula;
pub mod io;
pub mod mass;
