use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A line on which a marker was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Line index (0-based)
    pub line: usize,
    /// Full text of the line, unmodified
    pub text: String,
}

impl Occurrence {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self { line, text: text.into() }
    }

    /// Line number as shown to users (1-based)
    pub fn display_line(&self) -> usize {
        self.line + 1
    }
}

/// A begin occurrence matched with the end occurrence that closes it.
///
/// The begin always sits on a strictly earlier line than the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PairFields")]
pub struct Pair {
    pub begin: Occurrence,
    pub end: Occurrence,
}

/// Unchecked shape of a serialized [`Pair`].
#[derive(Deserialize)]
struct PairFields {
    begin: Occurrence,
    end: Occurrence,
}

impl TryFrom<PairFields> for Pair {
    type Error = Error;

    fn try_from(fields: PairFields) -> Result<Self> {
        let PairFields { begin, end } = fields;
        if begin.line >= end.line {
            return Err(Error::PairOutOfOrder { begin: begin.line, end: end.line });
        }
        Ok(Self { begin, end })
    }
}

impl Pair {
    pub fn new(begin: Occurrence, end: Occurrence) -> Self {
        debug_assert!(
            begin.line < end.line,
            "begin line {} must precede end line {}",
            begin.line,
            end.line
        );
        Self { begin, end }
    }

    /// The inclusive line range covered by this window.
    pub fn span(&self) -> RangeInclusive<usize> {
        self.begin.line..=self.end.line
    }

    /// Number of lines in the window, both markers included.
    pub fn line_count(&self) -> usize {
        self.end.line - self.begin.line + 1
    }
}
