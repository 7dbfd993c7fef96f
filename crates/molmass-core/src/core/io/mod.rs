//! Provides input/output functionality for the element dataset file.
//!
//! The dataset file is the only integration point between the generator and the
//! calculator. This module defines a trait-based interface for reading and writing it,
//! JSON and CSV implementations of that trait, and [`DatasetFormat`](format::DatasetFormat)
//! to pick an implementation from a file extension or a configured name.

pub mod csv_dataset;
pub mod error;
pub mod format;
pub mod json_dataset;
pub mod traits;
