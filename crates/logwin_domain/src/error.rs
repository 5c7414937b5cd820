use thiserror::Error;

use crate::MarkerRole;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The {role} marker must not be empty")]
    EmptyMarker { role: MarkerRole },

    #[error("Pair begin line {begin} must precede its end line {end}")]
    PairOutOfOrder { begin: usize, end: usize },

    #[error("Window start line {begin} is after its end line {end}")]
    WindowStartAfterEnd { begin: usize, end: usize },

    #[error("Window end line {end} is beyond the document ({total} lines)")]
    WindowBeyondDocument { end: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
