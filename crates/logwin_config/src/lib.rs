mod error;
mod reader;
mod settings;

pub use error::*;
pub use reader::*;
pub use settings::*;
