mod document;
mod error;
mod marker;
mod occurrence;
mod policy;
mod result;

pub use document::*;
pub use error::*;
pub use marker::*;
pub use occurrence::*;
pub use policy::*;
pub use result::*;
