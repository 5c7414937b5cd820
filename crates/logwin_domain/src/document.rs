use derive_more::Deref;

use crate::{Error, Pair, Result};

/// An ordered, 0-indexed snapshot of a document's lines.
///
/// Lines are kept byte-for-byte: splitting happens on `'\n'` only, so a
/// carriage return stays at the end of its line and a trailing newline
/// produces a final empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Document(Vec<String>);

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self(text.split('\n').map(str::to_owned).collect())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(lines.into_iter().map(Into::into).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Returns lines `begin..=end` (0-based, inclusive).
    pub fn window(&self, begin: usize, end: usize) -> Result<&[String]> {
        if begin > end {
            return Err(Error::WindowStartAfterEnd { begin, end });
        }
        if end >= self.0.len() {
            return Err(Error::WindowBeyondDocument { end, total: self.0.len() });
        }
        Ok(&self.0[begin..=end])
    }

    /// The text a pair encloses, markers included, as a standalone document.
    pub fn window_text(&self, pair: &Pair) -> Result<String> {
        let span = pair.span();
        Ok(self.window(*span.start(), *span.end())?.join("\n"))
    }
}
