use super::error::{self, ParseError};
use crate::prelude::*;

use std::str::SplitWhitespace;

/// A single line of the input, without its line terminator
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Line {
    /// 1-based position in the file
    pub(crate) number: usize,
    pub(crate) text: String,
}

impl Line {
    pub(crate) fn new(number: usize, text: String) -> Self {
        Self { number, text }
    }

    /// whitespace separated tokens. Runs of spaces collapse, so `3  0 1   2` has four tokens
    pub(crate) fn tokens(&self) -> SplitWhitespace<'_> {
        self.text.split_whitespace()
    }

    pub(crate) fn first_token(&self) -> Option<&str> {
        self.tokens().next()
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Sequential reader over the lines of a legacy file.
///
/// Holds at most one line of look-ahead, which is how the parser decides which section comes
/// next without consuming it. Also collects the warnings raised while parsing.
pub(crate) struct LineCursor<R> {
    reader: R,
    line_number: usize,
    // `Some(None)` is a peeked end of file
    peeked: Option<Option<Line>>,
    warnings: Vec<Warning>,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            peeked: None,
            warnings: Vec::new(),
        }
    }

    fn read_raw(&mut self) -> Result<Option<Line>, ParseError> {
        let mut text = String::new();
        if self.reader.read_line(&mut text)? == 0 {
            return Ok(None);
        }

        self.line_number += 1;

        let trimmed_len = text.trim_end_matches(&['\n', '\r'][..]).len();
        text.truncate(trimmed_len);

        Ok(Some(Line::new(self.line_number, text)))
    }

    /// consume the next line, `None` at end of file
    pub(crate) fn next_line(&mut self) -> Result<Option<Line>, ParseError> {
        match self.peeked.take() {
            Some(line) => Ok(line),
            None => self.read_raw(),
        }
    }

    /// look at the next line without consuming it
    pub(crate) fn peek_line(&mut self) -> Result<Option<&Line>, ParseError> {
        if self.peeked.is_none() {
            let line = self.read_raw()?;
            self.peeked = Some(line);
        }

        Ok(self.peeked.as_ref().and_then(|line| line.as_ref()))
    }

    pub(crate) fn peek_is_blank(&mut self) -> Result<bool, ParseError> {
        Ok(matches!(self.peek_line()?, Some(line) if line.is_blank()))
    }

    pub(crate) fn skip_blank_lines(&mut self) -> Result<(), ParseError> {
        while self.peek_is_blank()? {
            self.next_line()?;
        }
        Ok(())
    }

    /// skip blank lines and look at the first line with content
    pub(crate) fn peek_non_blank(&mut self) -> Result<Option<&Line>, ParseError> {
        self.skip_blank_lines()?;
        self.peek_line()
    }

    /// first token of the next line with content, `None` at end of file
    pub(crate) fn peek_keyword(&mut self) -> Result<Option<String>, ParseError> {
        Ok(self
            .peek_non_blank()?
            .and_then(Line::first_token)
            .map(str::to_owned))
    }

    /// consume the next line, which must exist
    pub(crate) fn require_line(&mut self, expected: &str) -> Result<Line, ParseError> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(error::StructuralMismatch::eof(expected).into()),
        }
    }

    /// skip blank lines and consume a line starting with `keyword`
    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<Line, ParseError> {
        self.skip_blank_lines()?;
        let line = self.require_line(keyword)?;

        if line.first_token() != Some(keyword) {
            return Err(error::StructuralMismatch::at(keyword, &line).into());
        }

        Ok(line)
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        warning.raise(&mut self.warnings);
    }

    pub(crate) fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(input: &str) -> LineCursor<&[u8]> {
        LineCursor::new(input.as_bytes())
    }

    #[test]
    fn numbers_lines_and_strips_terminators() {
        let mut cursor = cursor("first\r\nsecond\n");
        let first = cursor.next_line().unwrap().unwrap();
        let second = cursor.next_line().unwrap().unwrap();

        assert_eq!(first, Line::new(1, "first".into()));
        assert_eq!(second, Line::new(2, "second".into()));
        assert!(cursor.next_line().unwrap().is_none());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = cursor("\n\n  CELLS 1 2\n");
        assert_eq!(cursor.peek_keyword().unwrap().as_deref(), Some("CELLS"));

        let line = cursor.expect_keyword("CELLS").unwrap();
        assert_eq!(line.number, 3);
        assert!(cursor.peek_keyword().unwrap().is_none());
    }

    #[test]
    fn wrong_keyword() {
        let mut cursor = cursor("POINTS 3 float\n");
        let err = cursor.expect_keyword("CELLS").unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch(_)));
    }

    #[test]
    fn missing_keyword_at_eof() {
        let mut cursor = cursor("\n\n");
        let err = cursor.expect_keyword("POINTS").unwrap_err();
        match err {
            ParseError::StructuralMismatch(mismatch) => assert!(mismatch.found.is_eof()),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn tokens_collapse_whitespace() {
        let line = Line::new(1, "3   0  1 2".into());
        assert_eq!(line.tokens().collect::<Vec<_>>(), ["3", "0", "1", "2"]);
    }
}
