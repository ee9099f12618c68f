use chrono::Utc;

use super::LearningRecord;
use super::UserData;
use super::UserDataPatch;
use super::UserPreferences;

fn build_user() -> UserData {
    return UserData {
        id: "12345".to_string(),
        username: "学习者".to_string(),
        email: "learner@example.com".to_string(),
        avatar_url: "".to_string(),
        preferences: UserPreferences {
            theme: "light".to_string(),
            language: "zh-CN".to_string(),
        },
        learning_history: vec![LearningRecord {
            id: "1".to_string(),
            lesson_title: "Python 基础语法".to_string(),
            progress: 100,
            current_step: 3,
            completed_steps: vec![1, 2, 3],
            last_access_date: Utc::now(),
        }],
    };
}

#[test]
fn it_applies_only_the_set_fields() {
    let user = build_user();
    let patch = UserDataPatch {
        username: Some("张三".to_string()),
        preferences: Some(UserPreferences {
            theme: "dark".to_string(),
            language: "zh-CN".to_string(),
        }),
        ..UserDataPatch::default()
    };

    let updated = user.apply(&patch);

    assert_eq!(updated.username, "张三");
    assert_eq!(updated.preferences.theme, "dark");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.learning_history, user.learning_history);
    assert_eq!(updated.id, user.id);
}

#[test]
fn it_applies_nothing_from_an_empty_patch() {
    let user = build_user();
    let updated = user.apply(&UserDataPatch::default());

    assert_eq!(updated, user);
}
