#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use super::AgentMessage;
use super::AgentResponse;
use super::AgentSession;
use super::AgentTurn;
use super::AssistanceRequest;
use super::AssistanceResponse;
use super::CodeFeedback;
use super::GeneratedLesson;
use super::LessonStep;
use super::StepByStepTutorial;
use super::TutorialRequest;
use super::UserData;
use super::UserDataPatch;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendName {
    Http,
    Offline,
}

/// Output of the tutorial draft stage: a full-text explanation, not yet
/// broken into steps. Some drafting sources skip refinement and hand back
/// structured steps directly, hence the optional `steps`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialDraft {
    pub lesson_title: String,
    pub lesson_description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<LessonStep>>,
}

impl TutorialDraft {
    /// A draft that already carries structured steps can stand in for a
    /// refined lesson.
    pub fn into_lesson(self) -> Option<GeneratedLesson> {
        let steps = self.steps?;
        if steps.is_empty() {
            return None;
        }

        return Some(GeneratedLesson {
            lesson_title: self.lesson_title,
            lesson_description: self.lesson_description,
            steps,
        });
    }
}

/// Request body for the code evaluation endpoint.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSubmission {
    pub code: String,
    pub step: LessonStep,
    pub lesson_title: String,
}

pub type BackendHandle = Arc<dyn Backend + Send + Sync>;

/// The remote generation and session store surface. Every method maps to one
/// HTTP operation; callers catch failures and substitute local content, so
/// implementations report errors instead of degrading themselves.
#[async_trait]
pub trait Backend {
    fn name(&self) -> BackendName;

    /// Produces the unstructured first pass over a topic.
    async fn draft_tutorial(&self, topic: &str) -> Result<TutorialDraft>;

    /// Converts a draft's free-text content into an ordered step sequence.
    async fn refine_tutorial(&self, draft: &TutorialDraft, topic: &str) -> Result<GeneratedLesson>;

    /// Produces the rich walkthrough shape in a single call.
    async fn generate_tutorial(&self, request: &TutorialRequest) -> Result<StepByStepTutorial>;

    async fn evaluate_code(&self, submission: &CodeSubmission) -> Result<CodeFeedback>;

    async fn agent_reply(&self, turn: &AgentTurn) -> Result<AgentResponse>;

    async fn assistance(&self, request: &AssistanceRequest) -> Result<AssistanceResponse>;

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<AgentSession>>;

    async fn session_messages(&self, session_id: &str) -> Result<Vec<AgentMessage>>;

    async fn create_session(&self, user_id: &str, topic: &str) -> Result<AgentSession>;

    async fn get_user(&self, user_id: &str) -> Result<UserData>;

    async fn update_user(&self, user_id: &str, patch: &UserDataPatch) -> Result<UserData>;
}
