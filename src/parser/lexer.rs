//! Low-level scanner for composite format strings.
//!
//! The scanner is a plain cursor over the input with helpers for the
//! shapes the composite grammar needs: brace runs, digit runs, and
//! "everything until one of these characters" slices. The parser drives
//! it and makes all structural decisions.

/// A cursor over a template string.
pub struct Scanner<'a> {
    /// The input string being scanned.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewinds or fast-forwards to an absolute byte position.
    /// Must be a char boundary of the input.
    pub fn seek(&mut self, position: usize) {
        debug_assert!(self.input.is_char_boundary(position));
        self.position = position;
    }

    /// Returns true if the whole input has been consumed.
    pub fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Returns the character at the current position, if any.
    pub fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    pub fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.position += ch.len_utf8();
        }
    }

    /// Consumes `ch` if it is next; returns whether it was consumed.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    pub fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.peek() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Consumes characters while the predicate holds and returns the
    /// consumed slice (possibly empty).
    pub fn take_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if predicate(ch) {
                self.advance();
            } else {
                break;
            }
        }
        &self.input[start..self.position]
    }

    /// Consumes up to (not including) the next `{` or `}` and returns the
    /// consumed slice.
    pub fn take_until_brace(&mut self) -> &'a str {
        self.take_while(|c| c != '{' && c != '}')
    }

    /// Returns the slice between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_run() {
        let mut scanner = Scanner::new("{{{abc");
        assert_eq!(scanner.count_run(|c| c == '{'), 3);
        assert_eq!(scanner.peek(), Some('a'));
    }

    #[test]
    fn test_take_until_brace() {
        let mut scanner = Scanner::new("hello {0}");
        assert_eq!(scanner.take_until_brace(), "hello ");
        assert_eq!(scanner.peek(), Some('{'));
    }

    #[test]
    fn test_seek_rewinds() {
        let mut scanner = Scanner::new("abc");
        scanner.advance();
        scanner.advance();
        scanner.seek(0);
        assert_eq!(scanner.peek(), Some('a'));
    }
}
