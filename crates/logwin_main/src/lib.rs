mod app;
mod cli;
mod display;
mod error;
mod logging;

pub use app::*;
pub use cli::*;
pub use display::*;
pub use error::*;
pub use logging::init_tracing;
