//! Window search and line filtering over document snapshots.
//!
//! Every entry point is a pure function of its inputs: no state survives a
//! call and nothing borrowed from the caller is retained in the result.

mod assembler;
mod filter;
mod matcher;
mod scanner;
mod search;

pub use assembler::assemble;
pub use filter::filter_lines;
pub use matcher::{Claim, Matching, match_pairs};
pub use scanner::scan;
pub use search::search_windows;
