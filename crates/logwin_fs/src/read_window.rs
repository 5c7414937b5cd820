use std::cmp;
use std::path::Path;

use anyhow::Result;

use crate::error::Error;

/// Where a window read landed within its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// First line returned (1-based, inclusive)
    pub start_line: usize,
    /// Last line returned (1-based, inclusive), capped at the document end
    pub end_line: usize,
    /// Total number of lines in the document
    pub total_lines: usize,
}

impl WindowInfo {
    pub fn new(start_line: usize, end_line: usize, total_lines: usize) -> Self {
        Self { start_line, end_line, total_lines }
    }

    /// Returns true if the window does not cover the whole document.
    pub fn is_partial(&self) -> bool {
        self.start_line > 1 || self.end_line < self.total_lines
    }
}

impl crate::LogFS {
    /// Reads lines `start_line..=end_line` (1-based, as displayed) of a file
    /// as a standalone document.
    ///
    /// An end past the last line is capped, matching how a window is opened
    /// from a result list whose document may have shrunk since.
    pub async fn read_window<T: AsRef<Path>>(
        path: T,
        start_line: usize,
        end_line: usize,
    ) -> Result<(String, WindowInfo)> {
        if start_line == 0 || end_line == 0 {
            return Err(Error::IndexStartingWithZero { start: start_line, end: end_line }.into());
        }
        if start_line > end_line {
            return Err(Error::StartGreaterThanEnd { start: start_line, end: end_line }.into());
        }

        let document = Self::read_document(path).await?;
        let total_lines = document.len();
        if start_line > total_lines {
            return Err(Error::StartBeyondDocument { start: start_line, total: total_lines }.into());
        }

        let end_line = cmp::min(end_line, total_lines);
        let content = document.window(start_line - 1, end_line - 1)?.join("\n");

        Ok((content, WindowInfo::new(start_line, end_line, total_lines)))
    }
}
