//! CLI command implementations

mod build;
mod preview;

pub use build::build;
pub use preview::preview;
