//! The `monkey tokens` command.

use std::path::Path;

use monkey_common::OutputFormat;
use monkey_lexer::Token;

use crate::error::Result;

pub fn run(path: &Path, format: OutputFormat, trace: bool) -> Result<()> {
    let source = super::read_source(path)?;
    let tokens = super::new_lexer(&source, trace).tokenize();
    tracing::debug!(count = tokens.len(), "lexed file");

    match format {
        OutputFormat::Text => print!("{}", render_text(&tokens)),
        OutputFormat::Json => println!("{}", render_json(&tokens)?),
    }
    Ok(())
}

/// One line per token: kind, then the quoted literal.
pub fn render_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{:<9}{:?}\n", token.kind.as_str(), token.literal));
    }
    out
}

pub fn render_json(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_lexer::Lexer;

    #[test]
    fn text_output() {
        let tokens = Lexer::new("let x = 5;").tokenize();
        assert_eq!(
            render_text(&tokens),
            concat!(
                "LET      \"let\"\n",
                "IDENT    \"x\"\n",
                "=        \"=\"\n",
                "INT      \"5\"\n",
                ";        \";\"\n",
                "EOF      \"\"\n",
            )
        );
    }

    #[test]
    fn json_output_is_an_array_of_tokens() {
        let tokens = Lexer::new("fn").tokenize();
        let json = render_json(&tokens).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "FUNCTION");
        assert_eq!(value[0]["literal"], "fn");
        assert_eq!(value[1]["kind"], "EOF");
    }
}
