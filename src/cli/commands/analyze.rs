//! Analyze Command
//!
//! Run the hook on one instruction.
//!
//! Usage:
//!   intent-hook analyze <TEXT>... [-f json]

use crate::cli::OutputFormat;
use crate::hook::{HookOptions, on_user_input, run_hook};
use crate::types::Result;

pub fn run(text: &str, options: &HookOptions, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", on_user_input(text, options));
        }
        OutputFormat::Json => {
            let result = run_hook(text, options)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
