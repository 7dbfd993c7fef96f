//! # Elements Module
//!
//! Data model and reference data for the chemical elements.
//!
//! ## Key Components
//!
//! - [`record`] - The [`ElementRecord`](record::ElementRecord) written to and read from
//!   the dataset file, and the [`ElementGroup`](record::ElementGroup) classification
//! - [`table`] - The embedded 118-element reference table and source URLs
//! - [`builder`] - Turns the embedded table into ordered records with atomic numbers
//!   and data sources assigned
//! - [`registry`] - The loaded, immutable [`ElementTable`](registry::ElementTable)
//!   shared read-only by every calculation
//!
//! ## Usage
//!
//! ```ignore
//! use molmass::core::elements::builder::DatasetBuilder;
//! use molmass::core::elements::registry::ElementTable;
//!
//! let records = DatasetBuilder::standard().build_standard();
//! let table = ElementTable::from_records(records)?;
//! let potassium = table.by_atomic_number(19).unwrap();
//! ```

pub mod builder;
pub mod record;
pub mod registry;
pub mod table;
