use thiserror::Error;

/// Positions are byte offsets into the formula string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Count '{digits}' at position {position} is too large")]
    CountTooLarge { digits: String, position: usize },

    #[error("Atom count for '{symbol}' overflows")]
    CountOverflow { symbol: String },

    #[error("Unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },

    #[error("Unclosed '(' at position {position}")]
    UnclosedGroup { position: usize },

    #[error("Count '{digits}' at position {position} does not follow an element or group")]
    StrayCount { digits: String, position: usize },

    #[error("Unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },

    #[error("Formula is empty")]
    Empty,
}
