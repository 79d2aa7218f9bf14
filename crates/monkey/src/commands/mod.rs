pub mod check;
pub mod repl;
pub mod tokens;

use std::fs;
use std::ops::Range;
use std::path::Path;

use monkey_lexer::{Lexer, Token, TokenKind};

use crate::error::{CliError, Result};

pub fn read_source(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading source");
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a lexer, forwarding identifier classification to `tracing` when asked.
pub fn new_lexer(source: &str, trace: bool) -> Lexer<'_> {
    if trace {
        Lexer::with_trace_hook(source, |ident, kind: TokenKind| {
            tracing::trace!(ident, kind = %kind, "classified identifier");
        })
    } else {
        Lexer::new(source)
    }
}

/// Lex `source` and pair each token with the byte range it covers.
pub fn lex_with_ranges(source: &str, trace: bool) -> Vec<(Token, Range<usize>)> {
    let mut lexer = new_lexer(source, trace);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token();
        let end = lexer.position();
        let start = end - token.literal.len();
        let is_eof = token.is_eof();
        out.push((token, start..end));
        if is_eof {
            break;
        }
    }
    out
}
