//! Command implementations

mod analyze;
mod exclusions;
mod score;

pub use analyze::{AnalyzeArgs, analyze};
pub use exclusions::exclusions;
pub use score::score;
