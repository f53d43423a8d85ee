//! Agent Recommendation
//!
//! Each intent has an ordered candidate list. Complex tasks skip to the
//! second candidate; an offset past the end falls back to the first.

use crate::types::{Agent, Complexity, Intent};

/// Candidate agents for an intent, most preferred first
pub fn candidates(intent: Intent) -> &'static [Agent] {
    match intent {
        Intent::Development => &[Agent::Kiro, Agent::Claude],
        Intent::Documentation => &[Agent::Claude, Agent::ProductManager],
        Intent::Design => &[Agent::Claude, Agent::ProductManager],
        Intent::Review => &[Agent::Roo, Agent::SecurityReviewer],
        Intent::Management => &[Agent::ProductManager, Agent::Claude],
    }
}

/// Candidate index offset for a complexity level
fn complexity_offset(complexity: Complexity) -> usize {
    match complexity {
        Complexity::Simple | Complexity::Medium => 0,
        Complexity::Complex => 1,
    }
}

/// Recommend an agent for an intent / complexity pair
pub fn recommend_agent(intent: Intent, complexity: Complexity) -> Agent {
    let agents = candidates(intent);
    let offset = complexity_offset(complexity);

    agents
        .get(offset)
        .or_else(|| agents.first())
        .copied()
        .unwrap_or_default()
}
