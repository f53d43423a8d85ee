//! Workspace Inspection
//!
//! Read-only access to the workspace status and rules documents.

mod cache;
mod checker;

pub use cache::{CacheStats, FileCache};
pub use checker::{WorkspaceChecker, extract_task_ids};
