use super::Line;

use std::fmt;

/// longest piece of a line repeated back in an error message
const MAX_SHOWN: usize = 48;

/// Short description of the line the parser found when it expected something else
#[derive(Debug, Clone, PartialEq)]
pub struct LineSummary {
    line: Option<usize>,
    text: String,
}

impl fmt::Display for LineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) if self.text.is_empty() => write!(f, "a blank line on line {line}"),
            Some(line) => write!(f, "`{}` on line {line}", self.text),
            None => write!(f, "end of file"),
        }
    }
}

impl LineSummary {
    pub(crate) fn new(line: &Line) -> Self {
        let trimmed = line.text.trim();
        let text = match trimmed.char_indices().nth(MAX_SHOWN) {
            Some((cut, _)) => format!("{}...", &trimmed[..cut]),
            None => trimmed.to_string(),
        };

        Self {
            line: Some(line.number),
            text,
        }
    }

    pub(crate) fn eof() -> Self {
        Self {
            line: None,
            text: String::new(),
        }
    }

    /// line number of the summarized line, `None` at end of file
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// the (possibly shortened) text of the line
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_eof(&self) -> bool {
        self.line.is_none()
    }
}
