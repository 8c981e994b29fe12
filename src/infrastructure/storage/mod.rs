use crate::core::errors::TodoError;
use crate::core::models::{
    todo::{Todo, TodoPatch},
    user::User,
};
use async_trait::async_trait;

/// Backing store for the user directory and each user's todos.
///
/// Todo operations are always scoped by the owner's username; a todo ID that
/// exists under another user is reported as absent. Mutators return `Ok(None)`
/// when the todo is not found.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user_if_not_exists(&self, user: User) -> Result<User, TodoError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, TodoError>;
    async fn count_users(&self) -> Result<usize, TodoError>;
    async fn get_todo(&self, username: &str, todo_id: &str) -> Result<Option<Todo>, TodoError>;
    async fn list_todos(&self, username: &str) -> Result<Vec<Todo>, TodoError>;
    async fn insert_todo(&self, username: &str, todo: Todo) -> Result<Todo, TodoError>;
    async fn update_todo(&self, username: &str, todo_id: &str, patch: TodoPatch) -> Result<Option<Todo>, TodoError>;
    async fn mark_todo_done(&self, username: &str, todo_id: &str) -> Result<Option<Todo>, TodoError>;
    async fn remove_todo(&self, username: &str, todo_id: &str) -> Result<Option<Todo>, TodoError>;
}

pub mod in_memory;
