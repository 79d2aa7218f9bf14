use super::cursor::Cursor;
use super::keywords;
use super::token::{Token, TokenKind};

/// Callback invoked with each identifier and the kind it classified to.
pub type TraceHook = Box<dyn Fn(&str, TokenKind)>;

/// Hand-written lexer for the Monkey language.
///
/// Produces one token per [`Lexer::next_token`] call. Unrecognized input is
/// returned as [`TokenKind::Illegal`] rather than reported; once the source
/// is exhausted every further call yields [`TokenKind::Eof`].
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    trace: Option<TraceHook>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            trace: None,
            finished: false,
        }
    }

    /// Build a lexer that reports every identifier classification to `hook`.
    pub fn with_trace_hook(source: &'src str, hook: impl Fn(&str, TokenKind) + 'static) -> Self {
        let mut lexer = Self::new(source);
        lexer.set_trace_hook(hook);
        lexer
    }

    pub fn set_trace_hook(&mut self, hook: impl Fn(&str, TokenKind) + 'static) {
        self.trace = Some(Box::new(hook));
    }

    /// Byte offset of the cursor. Right after a token is produced this is
    /// the end of its literal.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Tokenize the entire source. The last token is always `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(byte) = self.cursor.current() else {
            return Token::eof();
        };

        if let Some(kind) = TokenKind::from_punct(byte) {
            let start = self.cursor.position();
            self.cursor.advance();
            return Token::new(kind, self.cursor.slice_from(start));
        }

        match byte {
            b if is_letter(b) => self.scan_identifier(),
            b if is_digit(b) => self.scan_number(),
            _ => self.scan_illegal(),
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Scan an identifier or keyword. Digits end the run.
    fn scan_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.eat_while(is_letter);
        let literal = self.cursor.slice_from(start);
        let kind = keywords::lookup_ident(literal);

        if let Some(trace) = &self.trace {
            trace(literal, kind);
        }

        Token::new(kind, literal)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.eat_while(is_digit);
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    /// Consume one whole character, so the literal stays valid UTF-8.
    fn scan_illegal(&mut self) -> Token {
        let start = self.cursor.position();
        let width = self.cursor.current_char().map_or(1, char::len_utf8);
        for _ in 0..width {
            self.cursor.advance();
        }
        Token::new(TokenKind::Illegal, self.cursor.slice_from(start))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
