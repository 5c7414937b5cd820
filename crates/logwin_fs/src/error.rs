use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Binary files are not supported. File detected as {0}")]
    BinaryFileNotSupported(String),

    #[error("Line numbers start at 1, got start={start} end={end}")]
    IndexStartingWithZero { start: usize, end: usize },

    #[error("Start line {start} is greater than end line {end}")]
    StartGreaterThanEnd { start: usize, end: usize },

    #[error("Start line {start} is beyond the end of the document ({total} lines)")]
    StartBeyondDocument { start: usize, total: usize },
}
