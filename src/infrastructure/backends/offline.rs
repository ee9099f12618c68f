#[cfg(test)]
#[path = "offline_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::AgentMessage;
use crate::domain::models::AgentResponse;
use crate::domain::models::AgentSession;
use crate::domain::models::AgentTurn;
use crate::domain::models::AssistanceRequest;
use crate::domain::models::AssistanceResponse;
use crate::domain::models::Backend;
use crate::domain::models::BackendName;
use crate::domain::models::CodeFeedback;
use crate::domain::models::CodeSubmission;
use crate::domain::models::GeneratedLesson;
use crate::domain::models::StepByStepTutorial;
use crate::domain::models::TutorialDraft;
use crate::domain::models::TutorialRequest;
use crate::domain::models::UserData;
use crate::domain::models::UserDataPatch;

/// The no-server backend. Every operation reports failure so callers land on
/// their local fallbacks; the services own the offline content, not this
/// struct.
#[derive(Default)]
pub struct OfflineBackend {}

#[async_trait]
impl Backend for OfflineBackend {
    fn name(&self) -> BackendName {
        return BackendName::Offline;
    }

    #[allow(clippy::implicit_return)]
    async fn draft_tutorial(&self, _topic: &str) -> Result<TutorialDraft> {
        bail!("offline backend has no remote tutorial drafting");
    }

    #[allow(clippy::implicit_return)]
    async fn refine_tutorial(&self, _draft: &TutorialDraft, _topic: &str) -> Result<GeneratedLesson> {
        bail!("offline backend has no remote tutorial refinement");
    }

    #[allow(clippy::implicit_return)]
    async fn generate_tutorial(&self, _request: &TutorialRequest) -> Result<StepByStepTutorial> {
        bail!("offline backend has no remote tutorial generation");
    }

    #[allow(clippy::implicit_return)]
    async fn evaluate_code(&self, _submission: &CodeSubmission) -> Result<CodeFeedback> {
        bail!("offline backend has no remote code evaluation");
    }

    #[allow(clippy::implicit_return)]
    async fn agent_reply(&self, _turn: &AgentTurn) -> Result<AgentResponse> {
        bail!("offline backend has no remote agent");
    }

    #[allow(clippy::implicit_return)]
    async fn assistance(&self, _request: &AssistanceRequest) -> Result<AssistanceResponse> {
        bail!("offline backend has no remote assistance");
    }

    #[allow(clippy::implicit_return)]
    async fn list_sessions(&self, _user_id: &str) -> Result<Vec<AgentSession>> {
        bail!("offline backend has no remote session store");
    }

    #[allow(clippy::implicit_return)]
    async fn session_messages(&self, _session_id: &str) -> Result<Vec<AgentMessage>> {
        bail!("offline backend has no remote session store");
    }

    #[allow(clippy::implicit_return)]
    async fn create_session(&self, _user_id: &str, _topic: &str) -> Result<AgentSession> {
        bail!("offline backend has no remote session store");
    }

    #[allow(clippy::implicit_return)]
    async fn get_user(&self, _user_id: &str) -> Result<UserData> {
        bail!("offline backend has no remote user store");
    }

    #[allow(clippy::implicit_return)]
    async fn update_user(&self, _user_id: &str, _patch: &UserDataPatch) -> Result<UserData> {
        bail!("offline backend has no remote user store");
    }
}
