//! Application commands - CLI to core bridge

mod catalog;
mod report;
mod shift;

pub use catalog::*;
pub use report::*;
pub use shift::*;
