//! Demo Command
//!
//! Analyze the built-in sample instructions with one analyzer, so repeated
//! workspace reads show up as cache hits.

use crate::analysis::Reporter;
use crate::cli::Output;
use crate::constants::DEMO_INPUTS;
use crate::hook::HookOptions;
use crate::types::Result;

pub fn run(options: &HookOptions) -> Result<()> {
    let out = Output::new();
    let analyzer = options.analyzer()?;

    for input in DEMO_INPUTS {
        out.section(&format!("测试输入: {}", input));
        let result = analyzer.analyze(input);
        println!("{}", Reporter::render(&result));
    }

    let stats = analyzer.workspace().cache().stats();
    out.info(&format!(
        "File cache: {} hits, {} misses, {} failed reads",
        stats.hits, stats.misses, stats.failures
    ));
    Ok(())
}
