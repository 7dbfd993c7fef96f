#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// An uppercase letter optionally followed by one lowercase letter.
    Element(&'a str),
    /// A run of ASCII digits, kept as text so overflow is reported by the parser.
    Count(&'a str),
    Open,
    Close,
    /// Any character that starts none of the above.
    Unrecognized(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

pub fn tokenize(formula: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = formula.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let kind = match c {
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            'A'..='Z' => {
                let end = match chars.peek() {
                    Some(&(index, next)) if next.is_ascii_lowercase() => {
                        chars.next();
                        index + 1
                    }
                    _ => start + 1,
                };
                TokenKind::Element(&formula[start..end])
            }
            '0'..='9' => {
                let mut end = start + 1;
                while let Some(&(index, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    chars.next();
                    end = index + 1;
                }
                TokenKind::Count(&formula[start..end])
            }
            other => TokenKind::Unrecognized(other),
        };
        tokens.push(Token {
            kind,
            position: start,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(formula: &str) -> Vec<TokenKind<'_>> {
        tokenize(formula).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn splits_symbols_counts_and_groups() {
        use TokenKind::*;
        assert_eq!(
            kinds("Al2(SO4)3"),
            vec![
                Element("Al"),
                Count("2"),
                Open,
                Element("S"),
                Element("O"),
                Count("4"),
                Close,
                Count("3"),
            ]
        );
    }

    #[test]
    fn multi_digit_counts_form_one_token() {
        use TokenKind::*;
        assert_eq!(
            kinds("C6H12O6"),
            vec![
                Element("C"),
                Count("6"),
                Element("H"),
                Count("12"),
                Element("O"),
                Count("6"),
            ]
        );
    }

    #[test]
    fn symbol_takes_at_most_one_lowercase_letter() {
        use TokenKind::*;
        assert_eq!(kinds("Xxy"), vec![Element("Xx"), Unrecognized('y')]);
        assert_eq!(kinds("NaCl"), vec![Element("Na"), Element("Cl")]);
    }

    #[test]
    fn unrecognized_characters_are_reported_with_positions() {
        let tokens = tokenize("H₂ O");
        assert_eq!(tokens[0].kind, TokenKind::Element("H"));
        assert_eq!(tokens[1].kind, TokenKind::Unrecognized('₂'));
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].kind, TokenKind::Unrecognized(' '));
        assert_eq!(tokens[2].position, 4);
        assert_eq!(tokens[3].kind, TokenKind::Element("O"));
    }

    #[test]
    fn leading_lowercase_is_not_a_symbol() {
        assert_eq!(
            kinds("co"),
            vec![TokenKind::Unrecognized('c'), TokenKind::Unrecognized('o')]
        );
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
