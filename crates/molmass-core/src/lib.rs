//! # molmass Core Library
//!
//! A small library for computing molar masses of chemical formulas, backed by a
//! generated reference dataset of the chemical elements.
//!
//! ## Architectural Philosophy
//!
//! The library follows a two-layer layout that keeps data, parsing and I/O apart from
//! the end-to-end procedures built on top of them.
//!
//! - **[`core`]: The Foundation.** Contains the element data model and the embedded
//!   reference table, dataset readers and writers, the formula parser that reduces nested
//!   groups to a flat [`Composition`](core::formula::Composition), and the atomic mass
//!   lookup used for summation.
//!
//! - **[`workflows`]: The Public API.** Ties the pieces of `core` together into complete
//!   procedures: generating the reference dataset and calculating the molar mass of a
//!   formula against a loaded element table.

pub mod core;
pub mod workflows;
