/// Low-level byte reader over source text.
///
/// Holds the byte currently under examination plus the index it came from
/// (`position`) and the index of the next byte to read (`read_position`).
/// Past the end of the buffer the current byte is `None`.
pub struct Cursor<'src> {
    source: &'src str,
    /// Index of the current byte.
    position: usize,
    /// Index of the next byte to read. Always `position + 1` once primed.
    read_position: usize,
    current: Option<u8>,
}

impl<'src> Cursor<'src> {
    /// Create a cursor with the first byte of `source` already current.
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// Index of the byte under examination.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The byte under examination, or `None` past the end.
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Move one byte forward. A no-op once the end has been reached.
    pub fn advance(&mut self) {
        if self.position >= self.source.len() && self.read_position > 0 {
            return;
        }
        self.current = self.source.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// True if there are no more bytes.
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// The full character starting at the current position.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }

    /// Slice the source from byte offset `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position]
    }

    /// Consume bytes while `predicate` returns true.
    pub fn eat_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while let Some(byte) = self.current {
            if !predicate(byte) {
                break;
            }
            self.advance();
        }
    }
}
