#[cfg(test)]
#[path = "users_test.rs"]
mod tests;

use chrono::Duration;
use chrono::Utc;

use crate::domain::models::BackendHandle;
use crate::domain::models::LearningRecord;
use crate::domain::models::UserData;
use crate::domain::models::UserDataPatch;
use crate::domain::models::UserPreferences;

/// Profile reads and writes over the backend. Both methods are total: a
/// fixed synthetic profile keyed by the user id stands in when the remote
/// store is unreachable, and updates merge into it locally.
pub struct UserService {
    backend: BackendHandle,
}

impl UserService {
    pub fn new(backend: BackendHandle) -> UserService {
        return UserService { backend };
    }

    pub async fn get(&self, user_id: &str) -> UserData {
        match self.backend.get_user(user_id).await {
            Ok(user) => return user,
            Err(err) => {
                tracing::warn!(error = ?err, user_id = user_id, "profile fetch failed, using the synthetic profile");
                return synthetic_profile(user_id);
            }
        }
    }

    pub async fn update(&self, user_id: &str, patch: &UserDataPatch) -> UserData {
        match self.backend.update_user(user_id, patch).await {
            Ok(user) => return user,
            Err(err) => {
                tracing::warn!(error = ?err, user_id = user_id, "profile update failed, merging the patch locally");
                return synthetic_profile(user_id).apply(patch);
            }
        }
    }
}

fn synthetic_profile(user_id: &str) -> UserData {
    return UserData {
        id: user_id.to_string(),
        username: "学习者".to_string(),
        email: "learner@example.com".to_string(),
        avatar_url: "".to_string(),
        preferences: UserPreferences {
            theme: "light".to_string(),
            language: "zh-CN".to_string(),
        },
        learning_history: vec![LearningRecord {
            id: "record-1".to_string(),
            lesson_title: "JavaScript 基础".to_string(),
            progress: 60,
            current_step: 3,
            completed_steps: vec![1, 2],
            last_access_date: Utc::now() - Duration::days(1),
        }],
    };
}
