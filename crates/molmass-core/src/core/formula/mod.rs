//! # Formula Module
//!
//! Parsing of chemical formulas such as `H2O`, `CH3COOH` or `Al2(SO4)3` into a flat
//! [`Composition`](composition::Composition) of element symbols and atom counts.
//!
//! ## Grammar
//!
//! A formula is a sequence of element symbols (one uppercase letter, optionally followed
//! by one lowercase letter), runs of ASCII digits, and the group delimiters `(` and `)`.
//! A digit run directly after a symbol is that symbol's count; a digit run directly after
//! `)` multiplies every count inside the group. Missing counts default to 1.
//!
//! ## Key Components
//!
//! - [`token`] - Left-to-right scanner producing positioned tokens
//! - [`parser`] - Stack-based reduction of nested groups, in lenient or strict mode
//! - [`composition`] - The flattened symbol-to-count result
//! - [`normalize`] - Input clean-up (whitespace, Unicode subscript digits) applied by
//!   callers before parsing
//! - [`error`] - Failures reported by the parser

pub mod composition;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod token;

pub use composition::Composition;
pub use error::FormulaError;
pub use normalize::normalize_formula;
pub use parser::{ParseMode, parse_formula, parse_formula_with};
