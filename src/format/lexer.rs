//! Lexer splitting an expression into its name and raw argument text.

use crate::error::{FormatError, Result};
use crate::{CALL_CLOSE, CALL_OPEN, QUOTES};

/// An expression split into its parts, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawExpression<'a> {
    /// The leading identifier
    pub name: &'a str,
    /// Text between the outer parentheses, `None` when there are no parentheses
    pub arguments: Option<&'a str>,
}

/// Lexer for a single format expression.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            column: 1,
        }
    }

    /// Split the expression into identifier and raw argument text.
    ///
    /// Accepts `identifier` or `identifier(...)` where the parenthesis opened
    /// after the identifier closes on the last character of the input.
    pub fn split(mut self) -> Result<RawExpression<'a>> {
        let name = self.read_identifier()?;

        match self.chars.peek().copied() {
            None => Ok(RawExpression {
                name,
                arguments: None,
            }),
            Some((_, CALL_OPEN)) => {
                let arguments = self.read_arguments()?;
                Ok(RawExpression {
                    name,
                    arguments: Some(arguments),
                })
            }
            Some((_, ch)) => Err(FormatError::syntax(
                self.column,
                format!("unexpected character '{}' after identifier '{}'", ch, name),
            )),
        }
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if next.is_some() {
            self.column += 1;
        }
        next
    }

    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(pos, _)| *pos)
            .unwrap_or(self.input.len())
    }

    fn read_identifier(&mut self) -> Result<&'a str> {
        match self.chars.peek().copied() {
            None => return Err(FormatError::syntax(self.column, "empty expression")),
            Some((_, ch)) if ch.is_ascii_alphabetic() => {}
            Some((_, ch)) => {
                return Err(FormatError::syntax(
                    self.column,
                    format!("expected identifier, found '{}'", ch),
                ));
            }
        }

        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() {
                self.advance();
            } else {
                break;
            }
        }

        let end = self.position();
        let input = self.input;
        Ok(&input[..end])
    }

    fn read_arguments(&mut self) -> Result<&'a str> {
        let open_column = self.column;
        self.advance(); // consume '('
        let start = self.position();

        let mut depth = 1usize;
        let mut quote: Option<(char, usize)> = None;

        while let Some((pos, ch)) = self.advance() {
            match quote {
                Some((q, _)) => {
                    if ch == q {
                        quote = None;
                    }
                }
                None if QUOTES.contains(&ch) => quote = Some((ch, self.column - 1)),
                None if ch == CALL_OPEN => depth += 1,
                None if ch == CALL_CLOSE => {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(&(_, trailing)) = self.chars.peek() {
                            return Err(FormatError::syntax(
                                self.column,
                                format!("unexpected character '{}' after closing ')'", trailing),
                            ));
                        }
                        let input = self.input;
                        return Ok(&input[start..pos]);
                    }
                }
                None => {}
            }
        }

        match quote {
            Some((q, column)) => Err(FormatError::syntax(
                column,
                format!("unterminated {} quote in argument list", q),
            )),
            None => Err(FormatError::syntax(
                open_column,
                "unterminated call, missing ')'",
            )),
        }
    }
}
