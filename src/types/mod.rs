pub mod analysis;
pub mod error;
pub mod intent;

pub use analysis::AnalysisResult;
pub use error::{HookError, Result, ResultExt};
pub use intent::{Agent, Complexity, ExecutionAdvice, Intent};
