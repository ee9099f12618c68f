#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;

use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::models::AgentMessage;
use crate::domain::models::AgentSession;
use crate::domain::models::BackendHandle;
use crate::domain::models::Role;

/// Client for the remote session store. Every method is total: when the
/// backend fails, a fixed synthetic history stands in so screens relying on
/// session data always have something to render.
pub struct SessionClient {
    backend: BackendHandle,
}

impl SessionClient {
    pub fn new(backend: BackendHandle) -> SessionClient {
        return SessionClient { backend };
    }

    /// Lists the user's sessions, most recently updated first. The sort
    /// applies to remote results too, so index 0 is always the latest
    /// session regardless of server ordering.
    pub async fn list(&self, user_id: &str) -> Vec<AgentSession> {
        let mut sessions = match self.backend.list_sessions(user_id).await {
            Ok(sessions) => sessions,
            Err(err) => {
                tracing::warn!(error = ?err, user_id = user_id, "session listing failed, using the synthetic history");
                synthetic_sessions(user_id)
            }
        };

        sessions.sort_by(|a, b| return b.updated_at.cmp(&a.updated_at));
        return sessions;
    }

    pub async fn messages(&self, session_id: &str) -> Vec<AgentMessage> {
        match self.backend.session_messages(session_id).await {
            Ok(messages) => return messages,
            Err(err) => {
                tracing::warn!(error = ?err, session_id = session_id, "message history fetch failed, using the synthetic exchange");
                return synthetic_messages();
            }
        }
    }

    pub async fn create(&self, user_id: &str, topic: &str) -> AgentSession {
        match self.backend.create_session(user_id, topic).await {
            Ok(session) => return session,
            Err(err) => {
                tracing::warn!(error = ?err, user_id = user_id, topic = topic, "session creation failed, synthesizing one locally");
            }
        }

        let now = Utc::now();
        let suffix = Uuid::new_v4()
            .to_string()
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string();

        return AgentSession {
            id: format!("session-{suffix}"),
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            messages: vec![],
            created_at: now,
            updated_at: now,
        };
    }
}

fn synthetic_sessions(user_id: &str) -> Vec<AgentSession> {
    let day_ago = Utc::now() - Duration::days(1);
    let half_day_ago = Utc::now() - Duration::hours(12);

    return vec![
        AgentSession {
            id: "session-1".to_string(),
            user_id: user_id.to_string(),
            topic: "JavaScript Promise".to_string(),
            messages: vec![
                AgentMessage {
                    id: "msg-1".to_string(),
                    role: Role::User,
                    content: "Promise的基本用法是什么？".to_string(),
                    timestamp: day_ago,
                },
                AgentMessage {
                    id: "msg-2".to_string(),
                    role: Role::Assistant,
                    content: "Promise是JavaScript中处理异步操作的一种方式...".to_string(),
                    timestamp: day_ago,
                },
            ],
            created_at: day_ago,
            updated_at: day_ago,
        },
        AgentSession {
            id: "session-2".to_string(),
            user_id: user_id.to_string(),
            topic: "React Hooks".to_string(),
            messages: vec![
                AgentMessage {
                    id: "msg-3".to_string(),
                    role: Role::User,
                    content: "useState和useEffect有什么区别？".to_string(),
                    timestamp: half_day_ago,
                },
                AgentMessage {
                    id: "msg-4".to_string(),
                    role: Role::Assistant,
                    content: "useState和useEffect是React中两个最常用的Hook...".to_string(),
                    timestamp: half_day_ago,
                },
            ],
            created_at: half_day_ago,
            updated_at: half_day_ago,
        },
    ];
}

fn synthetic_messages() -> Vec<AgentMessage> {
    let hour_ago = Utc::now() - Duration::hours(1);
    let half_hour_ago = Utc::now() - Duration::minutes(30);

    return vec![
        AgentMessage {
            id: "msg-1".to_string(),
            role: Role::User,
            content: "这个概念的基本原理是什么？".to_string(),
            timestamp: hour_ago,
        },
        AgentMessage {
            id: "msg-2".to_string(),
            role: Role::Assistant,
            content: "这个概念的基本原理包括以下几点...".to_string(),
            timestamp: hour_ago + Duration::seconds(30),
        },
        AgentMessage {
            id: "msg-3".to_string(),
            role: Role::User,
            content: "有没有具体的例子？".to_string(),
            timestamp: half_hour_ago,
        },
        AgentMessage {
            id: "msg-4".to_string(),
            role: Role::Assistant,
            content: "以下是一些具体的例子...".to_string(),
            timestamp: half_hour_ago + Duration::seconds(30),
        },
    ];
}
