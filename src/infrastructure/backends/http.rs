#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::fmt;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
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

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DraftRequest {
    topic: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefineRequest {
    full_tutorial: TutorialDraft,
    topic: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionRequest {
    user_id: String,
    topic: String,
}

pub struct HttpBackend {
    url: String,
    timeout: String,
}

impl Default for HttpBackend {
    fn default() -> HttpBackend {
        return HttpBackend {
            url: Config::get(ConfigKey::ApiURL),
            timeout: Config::get(ConfigKey::ApiTimeout),
        };
    }
}

impl HttpBackend {
    /// Builds a backend against an explicit base URL with the stock timeout.
    pub fn with_url(url: String) -> HttpBackend {
        return HttpBackend {
            url,
            timeout: "10000".to_string(),
        };
    }

    async fn send_json<T: DeserializeOwned + fmt::Debug>(
        &self,
        operation: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<T> {
        let res = builder
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        let status = res.status().as_u16();
        if !res.status().is_success() {
            tracing::error!(status = status, operation = operation, "request was rejected");
            bail!("{operation} request failed with status {status}");
        }

        let body = res.json::<T>().await?;
        tracing::debug!(body = ?body, operation = operation, "response body");
        return Ok(body);
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn name(&self) -> BackendName {
        return BackendName::Http;
    }

    #[allow(clippy::implicit_return)]
    async fn draft_tutorial(&self, topic: &str) -> Result<TutorialDraft> {
        let req = DraftRequest {
            topic: topic.to_string(),
        };

        return self
            .send_json(
                "generate-tutorial",
                reqwest::Client::new()
                    .post(format!("{url}/api/generate-tutorial", url = self.url))
                    .json(&req),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn refine_tutorial(&self, draft: &TutorialDraft, topic: &str) -> Result<GeneratedLesson> {
        let req = RefineRequest {
            full_tutorial: draft.clone(),
            topic: topic.to_string(),
        };

        return self
            .send_json(
                "refine-tutorial",
                reqwest::Client::new()
                    .post(format!("{url}/api/refine-tutorial", url = self.url))
                    .json(&req),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn generate_tutorial(&self, request: &TutorialRequest) -> Result<StepByStepTutorial> {
        return self
            .send_json(
                "tutorial/generate",
                reqwest::Client::new()
                    .post(format!("{url}/api/tutorial/generate", url = self.url))
                    .json(request),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn evaluate_code(&self, submission: &CodeSubmission) -> Result<CodeFeedback> {
        return self
            .send_json(
                "evaluate-code",
                reqwest::Client::new()
                    .post(format!("{url}/api/evaluate-code", url = self.url))
                    .json(submission),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn agent_reply(&self, turn: &AgentTurn) -> Result<AgentResponse> {
        return self
            .send_json(
                "ai-agent",
                reqwest::Client::new()
                    .post(format!("{url}/api/ai-agent", url = self.url))
                    .json(turn),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn assistance(&self, request: &AssistanceRequest) -> Result<AssistanceResponse> {
        return self
            .send_json(
                "ai-assistance",
                reqwest::Client::new()
                    .post(format!("{url}/api/ai-assistance", url = self.url))
                    .json(request),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<AgentSession>> {
        return self
            .send_json(
                "sessions",
                reqwest::Client::new()
                    .get(format!("{url}/api/ai-agent/sessions", url = self.url))
                    .query(&[("userId", user_id)]),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn session_messages(&self, session_id: &str) -> Result<Vec<AgentMessage>> {
        return self
            .send_json(
                "session-messages",
                reqwest::Client::new().get(format!(
                    "{url}/api/ai-agent/sessions/{session_id}/messages",
                    url = self.url
                )),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn create_session(&self, user_id: &str, topic: &str) -> Result<AgentSession> {
        let req = CreateSessionRequest {
            user_id: user_id.to_string(),
            topic: topic.to_string(),
        };

        return self
            .send_json(
                "create-session",
                reqwest::Client::new()
                    .post(format!("{url}/api/ai-agent/sessions", url = self.url))
                    .json(&req),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn get_user(&self, user_id: &str) -> Result<UserData> {
        return self
            .send_json(
                "get-user",
                reqwest::Client::new().get(format!("{url}/api/user/{user_id}", url = self.url)),
            )
            .await;
    }

    #[allow(clippy::implicit_return)]
    async fn update_user(&self, user_id: &str, patch: &UserDataPatch) -> Result<UserData> {
        return self
            .send_json(
                "update-user",
                reqwest::Client::new()
                    .put(format!("{url}/api/user/{user_id}", url = self.url))
                    .json(patch),
            )
            .await;
    }
}
