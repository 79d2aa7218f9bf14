//! Lexical analysis for the Monkey language.
//!
//! Turns source text into a flat stream of [`Token`]s, one per
//! [`Lexer::next_token`] call, ending with [`TokenKind::Eof`].

pub mod cursor;
pub mod keywords;
pub mod token;

mod scanner;

pub use keywords::lookup_ident;
pub use scanner::{Lexer, TraceHook};
pub use token::{Token, TokenKind};
