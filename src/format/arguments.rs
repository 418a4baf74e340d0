//! Decoder turning raw argument text into literal values.
//!
//! Arguments are separated by commas at the top level only: commas inside a
//! `[...]` list or a quoted string do not split. Each argument is then decoded
//! by the first rule that matches:
//!
//! | Rule | Example | Literal |
//! |------|---------|---------|
//! | Matching single or double quotes | `'male'` | String (quotes stripped) |
//! | `true` / `false` | `false` | Boolean |
//! | `[` ... `]` | `['a', 'b']` | List (elements decoded recursively) |
//! | Optional sign, digits | `-10` | Integer |
//! | Optional sign, digits `.` digits | `0.5` | Float |
//! | Anything else | `male` | String (bare token, kept as written) |
//!
//! Whitespace around an argument is ignored. Empty argument text decodes to a
//! single empty string, so `name()` carries one argument.

use super::ast::Literal;
use crate::error::DecodeError;
use crate::{ARGUMENT_SEPARATOR, LIST_CLOSE, LIST_OPEN, QUOTES};

/// Decode the text found between a call's parentheses.
pub fn decode_arguments(raw: &str) -> Result<Vec<Literal>, DecodeError> {
    decode_sequence(raw, 0)
}

/// Decode every top-level comma separated item of `text`.
///
/// `offset` is the number of characters preceding `text` in the argument
/// text, used to report columns.
fn decode_sequence(text: &str, offset: usize) -> Result<Vec<Literal>, DecodeError> {
    split_top_level(text, offset)?
        .into_iter()
        .map(|(token, token_offset)| decode_token(token, token_offset))
        .collect()
}

/// Split `text` on top-level separators, returning each piece with its offset.
fn split_top_level(text: &str, offset: usize) -> Result<Vec<(&str, usize)>, DecodeError> {
    let mut parts = Vec::new();
    let mut open_lists: Vec<usize> = Vec::new();
    let mut quote: Option<(char, usize)> = None;
    let mut start = 0;
    let mut start_offset = offset;

    for (index, (pos, ch)) in text.char_indices().enumerate() {
        let column = offset + index + 1;
        match quote {
            Some((q, _)) => {
                if ch == q {
                    quote = None;
                }
            }
            None if QUOTES.contains(&ch) => quote = Some((ch, column)),
            None if ch == LIST_OPEN => open_lists.push(column),
            None if ch == LIST_CLOSE => {
                if open_lists.pop().is_none() {
                    return Err(DecodeError::UnexpectedCloseBracket { column });
                }
            }
            None if ch == ARGUMENT_SEPARATOR && open_lists.is_empty() => {
                parts.push((&text[start..pos], start_offset));
                start = pos + ch.len_utf8();
                start_offset = column;
            }
            None => {}
        }
    }

    if let Some((quote, column)) = quote {
        return Err(DecodeError::UnterminatedQuote { quote, column });
    }
    if let Some(&column) = open_lists.last() {
        return Err(DecodeError::UnmatchedBracket { column });
    }

    parts.push((&text[start..], start_offset));
    Ok(parts)
}

fn decode_token(token: &str, offset: usize) -> Result<Literal, DecodeError> {
    let trimmed = token.trim_start();
    let offset = offset + (token.chars().count() - trimmed.chars().count());
    let token = trimmed.trim_end();

    if let Some(inner) = strip_quotes(token) {
        return Ok(Literal::String(inner.to_string()));
    }

    match token {
        "true" => return Ok(Literal::Boolean(true)),
        "false" => return Ok(Literal::Boolean(false)),
        _ => {}
    }

    if let Some(inner) = token
        .strip_prefix(LIST_OPEN)
        .and_then(|rest| rest.strip_suffix(LIST_CLOSE))
    {
        if inner.trim().is_empty() {
            return Ok(Literal::List(Vec::new()));
        }
        return decode_sequence(inner, offset + 1).map(Literal::List);
    }

    if is_integer(token) {
        // Digits beyond the i64 range still make a usable number
        return Ok(match token.parse::<i64>() {
            Ok(value) => Literal::Integer(value),
            Err(_) => token
                .parse::<f64>()
                .map(Literal::Float)
                .unwrap_or_else(|_| Literal::String(token.to_string())),
        });
    }

    if is_decimal(token) {
        if let Ok(value) = token.parse::<f64>() {
            return Ok(Literal::Float(value));
        }
    }

    Ok(Literal::String(token.to_string()))
}

fn strip_quotes(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if !QUOTES.contains(&first) || token.len() < 2 * first.len_utf8() {
        return None;
    }
    token.strip_prefix(first)?.strip_suffix(first)
}

fn strip_sign(token: &str) -> &str {
    token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer(token: &str) -> bool {
    is_digits(strip_sign(token))
}

fn is_decimal(token: &str) -> bool {
    match strip_sign(token).split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => false,
    }
}
