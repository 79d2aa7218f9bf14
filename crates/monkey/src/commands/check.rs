//! The `monkey check` command.

use std::ops::Range;
use std::path::Path;

use ariadne::{Color, Label, Report, ReportKind, Source};
use monkey_lexer::{Token, TokenKind};

use crate::error::{CliError, Result};

pub fn run(path: &Path, trace: bool) -> Result<()> {
    let source = super::read_source(path)?;
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let illegal = illegal_tokens(&source, trace);
    if illegal.is_empty() {
        println!("No illegal input.");
        return Ok(());
    }

    for (token, range) in &illegal {
        print_illegal(token, range.clone(), &source, &file_name)?;
    }
    Err(CliError::IllegalInput(illegal.len()))
}

/// Every `Illegal` token in `source` with its byte range.
pub fn illegal_tokens(source: &str, trace: bool) -> Vec<(Token, Range<usize>)> {
    super::lex_with_ranges(source, trace)
        .into_iter()
        .filter(|(token, _)| token.kind == TokenKind::Illegal)
        .collect()
}

/// Convert a byte range into the character range ariadne labels expect.
pub fn char_range(source: &str, range: Range<usize>) -> Range<usize> {
    let start = source[..range.start].chars().count();
    let len = source[range].chars().count();
    start..start + len
}

fn print_illegal(token: &Token, range: Range<usize>, source: &str, file_name: &str) -> Result<()> {
    let message = format!("unexpected character {:?}", token.literal);
    let range = char_range(source, range);
    Report::build(ReportKind::Error, file_name, range.start)
        .with_message(&message)
        .with_label(
            Label::new((file_name, range))
                .with_message("not a recognized token")
                .with_color(Color::Red),
        )
        .finish()
        .eprint((file_name, Source::from(source)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_source_has_no_illegal_tokens() {
        assert!(illegal_tokens("let add = fn(a, b) { a + b };", false).is_empty());
    }

    #[test]
    fn illegal_tokens_carry_ranges() {
        let found = illegal_tokens("let x = 5 * 2;\n$", false);
        let summary: Vec<_> = found
            .iter()
            .map(|(t, r)| (t.literal.as_str(), r.clone()))
            .collect();
        assert_eq!(summary, vec![("*", 10..11), ("$", 15..16)]);
    }

    #[test]
    fn multibyte_prefix_shifts_label_to_char_offsets() {
        let source = "→ @";
        let found = illegal_tokens(source, false);
        let ranges: Vec<_> = found.iter().map(|(_, r)| r.clone()).collect();
        assert_eq!(ranges, vec![0..3, 4..5]);
        assert_eq!(char_range(source, 0..3), 0..1);
        assert_eq!(char_range(source, 4..5), 2..3);
    }

    #[test]
    fn ascii_ranges_are_unchanged() {
        assert_eq!(char_range("x @", 2..3), 2..3);
    }

    #[test]
    fn run_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.mk");
        std::fs::write(&path, "let y = 1 - 2;").unwrap();
        let err = run(&path, false).unwrap_err();
        assert!(matches!(err, CliError::IllegalInput(1)));
    }
}
