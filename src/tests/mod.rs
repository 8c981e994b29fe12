mod user_tests;

use crate::core::models::user::User;
use crate::core::services::TodoService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> TodoService<InMemoryStorage> {
    TodoService::new(InMemoryStorage::new())
}

pub async fn register(service: &TodoService<InMemoryStorage>, username: &str) -> User {
    service
        .add_user(format!("{} name", username), username.to_string())
        .await
        .unwrap();
    service.authenticate(Some(username)).await.unwrap()
}
