#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: String,
    pub language: String,
}

/// Progress through one lesson. `progress` is a 0-100 percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecord {
    pub id: String,
    pub lesson_title: String,
    pub progress: u8,
    pub current_step: u32,
    #[serde(default)]
    pub completed_steps: Vec<u32>,
    pub last_access_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    pub preferences: UserPreferences,
    #[serde(default)]
    pub learning_history: Vec<LearningRecord>,
}

impl UserData {
    /// Builds a new profile with the patch's set fields replacing this one's.
    pub fn apply(&self, patch: &UserDataPatch) -> UserData {
        return UserData {
            id: self.id.to_string(),
            username: patch.username.clone().unwrap_or_else(|| return self.username.to_string()),
            email: patch.email.clone().unwrap_or_else(|| return self.email.to_string()),
            avatar_url: patch.avatar_url.clone().unwrap_or_else(|| return self.avatar_url.to_string()),
            preferences: patch.preferences.clone().unwrap_or_else(|| return self.preferences.clone()),
            learning_history: patch.learning_history.clone().unwrap_or_else(|| return self.learning_history.clone()),
        };
    }
}

/// Partial profile for PUT updates. Unset fields leave the stored value
/// untouched.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_history: Option<Vec<LearningRecord>>,
}
