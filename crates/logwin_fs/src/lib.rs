//! File access for logwin: document snapshots in, filtered documents out.

mod decode;
mod error;
mod read_document;
mod read_window;
mod replace;

pub use decode::decode;
pub use error::Error;
pub use read_window::WindowInfo;

/// Namespace for document file operations.
pub struct LogFS;
