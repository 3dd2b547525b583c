use std::fmt;

use serde::Serialize;

use crate::url_part::UrlPart;

/// One labeled, offset-tagged unit of tokenizer output.
///
/// Offsets are character indices into the string that was tokenized, never
/// into a decoded copy of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    text: String,
    part: UrlPart,
    start: usize,
    end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, part: UrlPart, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token start {start} is past its end {end}");
        Self {
            text: text.into(),
            part,
            start,
            end,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn part(&self) -> UrlPart {
        self.part
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Type label handed to the analysis pipeline: the lowercased part name.
    pub fn token_type(&self) -> &'static str {
        self.part.name()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}..{}]", self.text, self.part, self.start, self.end)
    }
}
