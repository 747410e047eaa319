//! One-line-lookahead cursor over a sequence of lines

/// Holds the current, not yet consumed, line of an underlying iterator.
///
/// A trailing `\r` is dropped so CRLF reports parse like LF ones.
pub struct LineCursor<I: Iterator> {
    lines: I,
    current: Option<I::Item>,
    consumed: usize,
}

impl<I> LineCursor<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(lines: impl IntoIterator<IntoIter = I>) -> Self {
        let mut lines = lines.into_iter();
        let current = lines.next();
        Self {
            lines,
            current,
            consumed: 0,
        }
    }

    /// The line under examination, or `None` at end of stream
    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|line| {
            let line = line.as_ref();
            line.strip_suffix('\r').unwrap_or(line)
        })
    }

    /// Consume the current line
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.consumed += 1;
            self.current = self.lines.next();
        }
    }

    /// Number of lines consumed so far (1-based line number of `current`
    /// is `consumed() + 1`)
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_lines() {
        let mut cursor = LineCursor::new(vec!["a", "b"]);
        assert_eq!(cursor.current(), Some("a"));
        cursor.advance();
        assert_eq!(cursor.current(), Some("b"));
        assert_eq!(cursor.consumed(), 1);
        cursor.advance();
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert_eq!(cursor.consumed(), 2);
    }

    #[test]
    fn test_cursor_drops_carriage_return() {
        let cursor = LineCursor::new(vec!["** Found 0 DRC violations **\r".to_string()]);
        assert_eq!(cursor.current(), Some("** Found 0 DRC violations **"));
    }

    #[test]
    fn test_empty_input_has_no_line() {
        let cursor = LineCursor::new(Vec::<String>::new());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.consumed(), 0);
    }
}
