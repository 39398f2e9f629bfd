//! Agent registry — static metadata for the AI behavior profiles.
//!
//! Each profile bundles a display name, a description, the model the LLM
//! subsystem should use, and the system prompt that shapes the agent's
//! behavior. The registry is fixed at compile time; adding an agent means
//! adding an entry here and wiring it into whatever service should use it.

use serde::Serialize;

pub const SUMMARY_AGENT_ID: &str = "summary_agent";
pub const CHAT_AGENT_ID: &str = "chat_agent";

/// Full agent profile, including prompt material that never leaves the
/// process. API responses use the [`AgentInfo`] projection instead.
#[derive(Debug, Clone, Copy)]
pub struct AgentProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub model: &'static str,
    pub system_prompt: &'static str,
}

impl AgentProfile {
    /// Public projection safe to expose over HTTP.
    pub fn info(&self) -> AgentInfo {
        AgentInfo {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
        }
    }
}

/// Wire shape for agent listings and lookups.
#[derive(Debug, Clone, Serialize)]
pub struct AgentInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

const REGISTRY: &[AgentProfile] = &[
    AgentProfile {
        id: SUMMARY_AGENT_ID,
        name: "Summary Agent",
        description: "Agent responsible for summarizing legal proceedings and documents",
        model: "gemini-pro",
        system_prompt: "You are a legal expert specialized in summarizing court proceedings \
            and legal documents. Provide concise, accurate summaries that capture the key \
            points, decisions, and implications of legal matters.",
    },
    AgentProfile {
        id: CHAT_AGENT_ID,
        name: "Chat Agent",
        description: "Agent for interactive legal consultation and question answering",
        model: "gemini-pro",
        system_prompt: "You are a legal assistant helping lawyers and legal professionals \
            with their queries. Provide accurate, well-reasoned responses based on legal \
            principles and precedents. Be concise but thorough in your explanations.",
    },
];

/// All registered profiles, in declaration order.
pub fn list() -> &'static [AgentProfile] {
    REGISTRY
}

/// Look up a profile by id.
pub fn find(agent_id: &str) -> Option<&'static AgentProfile> {
    REGISTRY.iter().find(|a| a.id == agent_id)
}
