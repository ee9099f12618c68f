use std::sync::Arc;

use anyhow::Result;
use mockito::Matcher;

use super::UserService;
use crate::domain::models::UserDataPatch;
use crate::domain::models::UserPreferences;
use crate::infrastructure::backends::http::HttpBackend;
use crate::infrastructure::backends::offline::OfflineBackend;

fn offline_service() -> UserService {
    return UserService::new(Arc::new(OfflineBackend::default()));
}

#[tokio::test]
async fn it_falls_back_to_the_synthetic_profile() {
    let user = offline_service().get("12345").await;

    assert_eq!(user.id, "12345");
    assert_eq!(user.username, "学习者");
    assert_eq!(user.email, "learner@example.com");
    assert_eq!(user.preferences.theme, "light");
    assert_eq!(user.learning_history.len(), 1);
    assert_eq!(user.learning_history[0].lesson_title, "JavaScript 基础");
}

#[tokio::test]
async fn it_merges_the_patch_into_the_synthetic_profile() {
    let patch = UserDataPatch {
        preferences: Some(UserPreferences {
            theme: "dark".to_string(),
            language: "zh-CN".to_string(),
        }),
        ..Default::default()
    };

    let user = offline_service().update("12345", &patch).await;

    assert_eq!(user.preferences.theme, "dark");
    // Untouched fields keep the synthetic defaults.
    assert_eq!(user.username, "学习者");
    assert_eq!(user.learning_history.len(), 1);
}

#[tokio::test]
async fn it_sends_only_the_patched_fields() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/api/user/12345")
        .match_body(Matcher::JsonString(
            "{\"preferences\":{\"theme\":\"dark\",\"language\":\"zh-CN\"}}".to_string(),
        ))
        .with_status(200)
        .with_body(
            serde_json::json!({
                "id": "12345",
                "username": "学习者",
                "email": "learner@example.com",
                "preferences": {"theme": "dark", "language": "zh-CN"},
            })
            .to_string(),
        )
        .create();

    let service = UserService::new(Arc::new(HttpBackend::with_url(server.url())));
    let patch = UserDataPatch {
        preferences: Some(UserPreferences {
            theme: "dark".to_string(),
            language: "zh-CN".to_string(),
        }),
        ..Default::default()
    };
    let user = service.update("12345", &patch).await;
    mock.assert();

    assert_eq!(user.preferences.theme, "dark");
    return Ok(());
}
