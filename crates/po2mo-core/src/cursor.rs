/// Forward-only cursor over the trimmed lines of a catalog.
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().map(str::trim).collect(),
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.position += 1;
        Some(line)
    }

    /// Advances past every leading line matching `predicate`, returning them in order.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> Vec<&'a str>
    where
        P: FnMut(&str) -> bool,
    {
        let mut consumed = Vec::new();
        while let Some(line) = self.peek() {
            if !predicate(line) {
                break;
            }
            consumed.push(line);
            self.position += 1;
        }
        consumed
    }

    pub fn line_number(&self) -> usize {
        self.position + 1
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::LineCursor;

    #[test]
    fn yields_trimmed_lines_in_order() {
        let mut cursor = LineCursor::new("  first  \n\tsecond\r\n");
        assert_eq!(cursor.peek(), Some("first"));
        assert_eq!(cursor.advance(), Some("first"));
        assert_eq!(cursor.advance(), Some("second"));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn peek_does_not_move() {
        let cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.line_number(), 1);
    }

    #[test]
    fn consume_while_stops_at_first_mismatch() {
        let mut cursor = LineCursor::new("\"a\"\n\"b\"\nmsgstr \"c\"\n\"d\"");
        let consumed = cursor.consume_while(|line| line.starts_with('"'));
        assert_eq!(consumed, vec!["\"a\"", "\"b\""]);
        assert_eq!(cursor.peek(), Some("msgstr \"c\""));
        assert_eq!(cursor.line_number(), 3);
    }

    #[test]
    fn consume_while_on_empty_input() {
        let mut cursor = LineCursor::new("");
        assert!(cursor.consume_while(|_| true).is_empty());
        assert!(cursor.is_at_end());
    }
}
