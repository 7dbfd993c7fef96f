const SUBSCRIPT_ZERO: u32 = 0x2080;

/// Prepares user input for the parser.
///
/// Removes all whitespace and replaces Unicode subscript digits (`₀`-`₉`) with their
/// ASCII forms, so `Al₂(SO₄)₃` becomes `Al2(SO4)3`. Everything else is left untouched
/// for the parser to accept or reject.
pub fn normalize_formula(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '\u{2080}'..='\u{2089}' => char::from(b'0' + (c as u32 - SUBSCRIPT_ZERO) as u8),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscript_digits_become_ascii() {
        assert_eq!(normalize_formula("Al₂(SO₄)₃"), "Al2(SO4)3");
        assert_eq!(normalize_formula("C₆H₁₂O₆"), "C6H12O6");
        assert_eq!(normalize_formula("₀₁₂₃₄₅₆₇₈₉"), "0123456789");
    }

    #[test]
    fn whitespace_is_removed() {
        assert_eq!(normalize_formula("  CO2\n"), "CO2");
        assert_eq!(normalize_formula("Na Cl"), "NaCl");
    }

    #[test]
    fn other_characters_are_preserved() {
        assert_eq!(normalize_formula("H2O+"), "H2O+");
        assert_eq!(normalize_formula("H²"), "H²");
    }
}
