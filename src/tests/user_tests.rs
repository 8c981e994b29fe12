use crate::core::errors::TodoError;
use crate::tests::{create_test_service, register};

#[tokio::test]
async fn test_add_user() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let user = service
        .add_user("Ana Lima".to_string(), "ana".to_string())
        .await
        .unwrap();

    assert!(!user.id.is_empty());
    assert_eq!(user.name, "Ana Lima");
    assert_eq!(user.username, "ana");
    assert!(user.todos.is_empty());
    assert_eq!(service.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_add_user_duplicate_username() {
    let service = create_test_service();
    service.add_user("First".to_string(), "ana".to_string()).await.unwrap();

    let result = service.add_user("Second".to_string(), "ana".to_string()).await;
    assert!(matches!(result, Err(TodoError::UserAlreadyExists(ref u)) if u == "ana"));
    assert_eq!(service.count_users().await.unwrap(), 1);

    let stored = service.authenticate(Some("ana")).await.unwrap();
    assert_eq!(stored.name, "First");
}

#[tokio::test]
async fn test_generated_ids_are_unique() {
    let service = create_test_service();
    let a = register(&service, "ana").await;
    let b = register(&service, "bo").await;
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_authenticate_rejects_unknown_or_missing_username() {
    let service = create_test_service();
    register(&service, "ana").await;

    assert_eq!(service.authenticate(None).await, Err(TodoError::Unauthorized));
    assert_eq!(service.authenticate(Some("bo")).await, Err(TodoError::Unauthorized));
    assert_eq!(service.authenticate(Some("ana")).await.unwrap().username, "ana");
}
