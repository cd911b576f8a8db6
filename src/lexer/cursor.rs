//! Character-level cursor over the source text.

/// Tracks the byte position of the next unconsumed character in the source,
/// along with the 1-based line and 0-based column it sits on.
///
/// The cursor never moves backwards. Every consuming operation advances the
/// byte position by at least one character, so a scan over finite input
/// always terminates.
pub struct Cursor<'s> {
    source: &'s str,
    current: usize,
    line: usize,
    column: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 0,
        }
    }

    /// Checks whether the cursor has consumed all of its input.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Returns the next unconsumed character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Returns the character after the next one, without consuming anything.
    /// Used to decide whether a `.` after a digit run starts a fraction.
    pub fn peek_second(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    /// Consumes and returns the next character, updating the line and column
    /// bookkeeping. Consuming `\n` increments the line and resets the column
    /// to the start of the new line.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Peeks at the next character, and consumes it if it matches the
    /// expected character. Returns true if the character was consumed.
    /// On a mismatch the cursor does not move.
    pub fn match_next(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Byte position of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.current
    }

    /// 1-based line of the next unconsumed character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based column of the next unconsumed character on its line.
    pub fn column(&self) -> usize {
        self.column
    }
}
