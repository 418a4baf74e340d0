//! Format expression language.
//!
//! An expression names a property or calls a method with literal arguments.
//! There are no operators, variables, comments or nested calls.
//!
//! # Grammar Overview
//!
//! ```text
//! expression = identifier [ "(" [ arglist ] ")" ]
//! identifier = letter { letter | digit }
//! arglist    = argument { "," argument }
//! argument   = quoted | boolean | list | integer | float | bare
//! list       = "[" [ arglist ] "]"
//!
//! quoted     = "'" { any_char } "'" | '"' { any_char } '"'
//! boolean    = "true" | "false"
//! integer    = [ "-" | "+" ] digit { digit }
//! float      = [ "-" | "+" ] digit { digit } "." digit { digit }
//! bare       = { any_char }
//! ```
//!
//! # Examples
//!
//! | Expression | Kind | Arguments |
//! |------------|------|-----------|
//! | `name` | property | |
//! | `name()` | method | `''` |
//! | `name('male')` | method | `'male'` |
//! | `numberBetween(0,10)` | method | `0`, `10` |
//! | `randomElements(['a', 'b'], 1, false)` | method | `['a', 'b']`, `1`, `false` |

mod arguments;
mod ast;
mod lexer;
mod parser;

pub use arguments::decode_arguments;
pub use ast::{Format, Literal};
pub use lexer::{Lexer, RawExpression};
pub use parser::FormatParser;
