use thiserror::Error;

/// Problems with what the user asked for, reported as warnings rather than
/// failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("Please enter search criteria: both --begin and --end are required")]
    MissingSearchCriteria,

    #[error("Please provide text to match against")]
    MissingFilterText,

    #[error("No active document: pass a file or pipe content on stdin")]
    NoActiveDocument,

    #[error("--in-place needs a file to rewrite")]
    InPlaceWithoutFile,

    #[error("Pair {number} does not exist ({total} pairs found)")]
    PairNotFound { number: usize, total: usize },
}
