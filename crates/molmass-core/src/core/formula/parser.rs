use super::composition::Composition;
use super::error::FormulaError;
use super::token::{Token, TokenKind, tokenize};
use tracing::warn;

/// How the parser treats input that does not fit the formula grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skips unrecognized characters and stray counts, ignores an unmatched `)` along
    /// with its multiplier, and drops groups still open at the end of input. Each loss
    /// is logged as a warning.
    #[default]
    Lenient,
    /// Rejects all of the above, as well as an empty formula.
    Strict,
}

/// Parses `formula` in [`ParseMode::Lenient`].
pub fn parse_formula(formula: &str) -> Result<Composition, FormulaError> {
    parse_formula_with(formula, ParseMode::Lenient)
}

pub fn parse_formula_with(formula: &str, mode: ParseMode) -> Result<Composition, FormulaError> {
    FormulaParser::new(formula, mode)?.parse()
}

struct Group {
    composition: Composition,
    opened_at: usize,
}

struct FormulaParser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
    mode: ParseMode,
    root: Composition,
    groups: Vec<Group>,
}

impl<'a> FormulaParser<'a> {
    fn new(formula: &'a str, mode: ParseMode) -> Result<Self, FormulaError> {
        let mut tokens = tokenize(formula);

        let first_unrecognized = tokens.iter().find_map(|t| match t.kind {
            TokenKind::Unrecognized(character) => Some((character, t.position)),
            _ => None,
        });

        if let Some((character, position)) = first_unrecognized {
            if mode == ParseMode::Strict {
                return Err(FormulaError::UnrecognizedCharacter {
                    character,
                    position,
                });
            }
            tokens.retain(|t| match t.kind {
                TokenKind::Unrecognized(c) => {
                    warn!(
                        "Skipping unrecognized character {:?} at position {}",
                        c, t.position
                    );
                    false
                }
                _ => true,
            });
        }

        if mode == ParseMode::Strict && tokens.is_empty() {
            return Err(FormulaError::Empty);
        }

        Ok(Self {
            tokens,
            position: 0,
            mode,
            root: Composition::new(),
            groups: Vec::new(),
        })
    }

    fn current_token(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn top_mut(&mut self) -> &mut Composition {
        match self.groups.last_mut() {
            Some(group) => &mut group.composition,
            None => &mut self.root,
        }
    }

    fn parse(mut self) -> Result<Composition, FormulaError> {
        while let Some(token) = self.current_token() {
            self.advance();
            match token.kind {
                TokenKind::Open => self.groups.push(Group {
                    composition: Composition::new(),
                    opened_at: token.position,
                }),
                TokenKind::Element(symbol) => {
                    let count = self.take_count()?.unwrap_or(1);
                    self.top_mut()
                        .try_add(symbol, count)
                        .ok_or_else(|| FormulaError::CountOverflow {
                            symbol: symbol.to_string(),
                        })?;
                }
                TokenKind::Close => self.close_group(token.position)?,
                TokenKind::Count(digits) => self.stray_count(digits, token.position)?,
                TokenKind::Unrecognized(_) => {}
            }
        }
        self.finish()
    }

    /// Consumes the digit run at the cursor, if there is one.
    fn take_count(&mut self) -> Result<Option<u64>, FormulaError> {
        let Some(Token {
            kind: TokenKind::Count(digits),
            position,
        }) = self.current_token()
        else {
            return Ok(None);
        };
        self.advance();
        digits
            .parse::<u64>()
            .map(Some)
            .map_err(|_| FormulaError::CountTooLarge {
                digits: digits.to_string(),
                position,
            })
    }

    fn close_group(&mut self, position: usize) -> Result<(), FormulaError> {
        let Some(group) = self.groups.pop() else {
            return match self.mode {
                ParseMode::Strict => Err(FormulaError::UnmatchedClose { position }),
                ParseMode::Lenient => {
                    let multiplier = self.take_count()?;
                    warn!(
                        "Ignoring unmatched ')' at position {} (multiplier {:?})",
                        position, multiplier
                    );
                    Ok(())
                }
            };
        };

        let multiplier = self.take_count()?.unwrap_or(1);
        let parent = self.top_mut();
        for (symbol, count) in group.composition.iter() {
            count
                .checked_mul(multiplier)
                .and_then(|scaled| parent.try_add(symbol, scaled))
                .ok_or_else(|| FormulaError::CountOverflow {
                    symbol: symbol.to_string(),
                })?;
        }
        Ok(())
    }

    fn stray_count(&mut self, digits: &str, position: usize) -> Result<(), FormulaError> {
        match self.mode {
            ParseMode::Strict => Err(FormulaError::StrayCount {
                digits: digits.to_string(),
                position,
            }),
            ParseMode::Lenient => {
                warn!(
                    "Skipping count '{}' at position {} with nothing to apply to",
                    digits, position
                );
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<Composition, FormulaError> {
        if let Some(outermost) = self.groups.first() {
            match self.mode {
                ParseMode::Strict => {
                    return Err(FormulaError::UnclosedGroup {
                        position: outermost.opened_at,
                    });
                }
                ParseMode::Lenient => {
                    for group in &self.groups {
                        warn!(
                            "Discarding unclosed group opened at position {} ({})",
                            group.opened_at, group.composition
                        );
                    }
                }
            }
        }
        Ok(self.root)
    }
}
