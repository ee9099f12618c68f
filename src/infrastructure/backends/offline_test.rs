use super::OfflineBackend;
use crate::domain::models::Backend;
use crate::domain::models::BackendName;
use crate::domain::models::TutorialRequest;

#[test]
fn it_reports_its_name() {
    assert_eq!(OfflineBackend::default().name(), BackendName::Offline);
}

#[tokio::test]
async fn it_fails_every_remote_operation() {
    let backend = OfflineBackend::default();

    assert!(backend.draft_tutorial("闭包").await.is_err());
    assert!(backend.generate_tutorial(&TutorialRequest::default()).await.is_err());
    assert!(backend.list_sessions("12345").await.is_err());
    assert!(backend.create_session("12345", "编程学习").await.is_err());
    assert!(backend.get_user("12345").await.is_err());
}
