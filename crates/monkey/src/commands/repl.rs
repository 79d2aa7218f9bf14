//! The `monkey repl` command.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use monkey_common::OutputFormat;

use crate::error::{CliError, Result};

/// What the loop should do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Quit,
    Help,
    Unknown,
    Skip,
    Lex,
}

fn classify(line: &str) -> Action {
    match line {
        "" => Action::Skip,
        ":quit" | ":q" => Action::Quit,
        ":help" | ":h" => Action::Help,
        l if l.starts_with(':') => Action::Unknown,
        _ => Action::Lex,
    }
}

pub fn run(prompt: &str, format: OutputFormat, trace: bool) -> Result<()> {
    println!("Monkey lexer REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| CliError::Repl(e.to_string()))?;

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                match classify(line) {
                    Action::Skip => continue,
                    Action::Quit => break,
                    Action::Help => {
                        println!("Commands:");
                        println!("  :help, :h    Show this help");
                        println!("  :quit, :q    Exit the REPL");
                        continue;
                    }
                    Action::Unknown => {
                        println!("Unknown command: {}", line);
                        continue;
                    }
                    Action::Lex => {}
                }

                if let Err(e) = rl.add_history_entry(line) {
                    tracing::debug!(error = %e, "failed to record history entry");
                }

                let tokens = super::new_lexer(line, trace).tokenize();
                match format {
                    OutputFormat::Text => print!("{}", super::tokens::render_text(&tokens)),
                    OutputFormat::Json => println!("{}", super::tokens::render_json(&tokens)?),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(CliError::Repl(e.to_string())),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(classify(":q"), Action::Quit);
        assert_eq!(classify(":quit"), Action::Quit);
        assert_eq!(classify(":h"), Action::Help);
        assert_eq!(classify(":env"), Action::Unknown);
        assert_eq!(classify(""), Action::Skip);
        assert_eq!(classify("let x = 1;"), Action::Lex);
    }
}
