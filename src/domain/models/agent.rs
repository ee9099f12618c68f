#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::GeneratedLesson;
use super::StepByStepTutorial;

/// Generation parameters forwarded verbatim to the conversational endpoint.
/// Opaque to the pipeline, which never interprets them locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub context_window: u32,
}

impl Default for AgentConfig {
    fn default() -> AgentConfig {
        return AgentConfig {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            context_window: 4000,
        };
    }
}

impl AgentConfig {
    /// Builds a new config with the override's set fields replacing this
    /// one's. Neither input is mutated.
    pub fn merge(&self, overrides: &AgentConfigOverride) -> AgentConfig {
        return AgentConfig {
            model: overrides.model.clone().unwrap_or_else(|| return self.model.to_string()),
            temperature: overrides.temperature.unwrap_or(self.temperature),
            max_tokens: overrides.max_tokens.unwrap_or(self.max_tokens),
            context_window: overrides.context_window.unwrap_or(self.context_window),
        };
    }
}

/// Caller-supplied partial config. Unset fields fall back to the defaults in
/// [`AgentConfig`] at merge time.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfigOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
}

/// Request body for the conversational endpoint.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTurn {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub config: AgentConfig,
    pub is_tutorial_request: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistanceRequest {
    pub user_question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step_title: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistanceResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippets: Option<Vec<String>>,
}

/// The assistance envelope extended with session tracking, follow-up
/// questions, and the tutorial fields the orchestrator attaches.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub session_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_next_questions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorial: Option<GeneratedLesson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_by_step_tutorial: Option<StepByStepTutorial>,
}
